//! AI-vs-AI Tic-Tac-Toe battle
//!
//! Pits two search strategies against each other and renders every move:
//!
//! ```bash
//! cargo run --example play -- --player alphabeta --opp minimax
//! cargo run --example play -- --depth 5
//! ```

use std::env;
use std::process;

use tictactoe_minimax::{GameState, Mark, StrategyKind};

struct Args {
    player: StrategyKind,
    opp: StrategyKind,
    depth: Option<usize>,
}

fn usage() -> ! {
    eprintln!(
        "Usage: play [OPTIONS]\n\
         \n\
         Options:\n\
           -p, --player <NAME>  Strategy for X (default: alphabeta)\n\
               --opp <NAME>     Strategy for O (default: expectimax)\n\
               --depth <N>      Depth limit in plies (default: full search)\n\
           -h, --help           Show this help\n\
         \n\
         Strategies: minimax, alphabeta, expectimax"
    );
    process::exit(1);
}

fn parse_args() -> Args {
    let mut parsed = Args {
        player: StrategyKind::AlphaBeta,
        opp: StrategyKind::Expectimax,
        depth: None,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-p" | "--player" => {
                let name = args.next().unwrap_or_else(|| usage());
                parsed.player = name.parse().unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    usage()
                });
            }
            "--opp" | "--opponent" => {
                let name = args.next().unwrap_or_else(|| usage());
                parsed.opp = name.parse().unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    usage()
                });
            }
            "--depth" => {
                let value = args.next().unwrap_or_else(|| usage());
                parsed.depth = Some(value.parse().unwrap_or_else(|_| {
                    eprintln!("--depth expects a non-negative integer");
                    usage()
                }));
            }
            "-h" | "--help" => usage(),
            other => {
                eprintln!("unknown argument '{}'", other);
                usage();
            }
        }
    }

    parsed
}

fn main() {
    // Initialize logging
    env_logger::init();

    let args = parse_args();

    let agent_x = args.player.build();
    let agent_o = args.opp.build();

    println!("{}", "=".repeat(50));
    println!("           TIC-TAC-TOE AI BATTLE");
    println!("{}", "=".repeat(50));
    println!("Player X: {}", args.player);
    println!("Player O: {}", args.opp);
    match args.depth {
        Some(depth) => println!("Search depth: {}", depth),
        None => println!("Search depth: full search"),
    }

    let mut state = GameState::new();
    println!("\nInitial board:\n{}", state);

    let mut move_num = 1;

    while !state.is_terminal() {
        let mover = state.to_move();
        let (agent, name) = match mover {
            Mark::X => (&agent_x, args.player),
            Mark::O => (&agent_o, args.opp),
        };

        let action = match agent.decide(&state, args.depth) {
            Ok(action) => action,
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        };

        state = state.successor(action).unwrap();

        println!("--- MOVE {} ---", move_num);
        println!("{} ({}) chooses cell {}\n", name, mover, action);
        println!("{}", state);
        move_num += 1;
    }

    println!("{}", "=".repeat(50));
    println!("             GAME RESULTS");
    println!("{}", "=".repeat(50));

    match state.winner() {
        Some(Mark::X) => println!("WINNER: {} (X)", args.player),
        Some(Mark::O) => println!("WINNER: {} (O)", args.opp),
        None => {
            println!("Result: DRAW");
            println!("Both sides played optimally!");
        }
    }

    println!("\nFinal board:\n{}", state);
}
