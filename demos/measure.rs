//! Per-move decision metrics for the search strategies
//!
//! Plays one or more games and reports decision time and nodes visited per
//! move, then per-side averages. Handy for eyeballing how much work pruning
//! saves:
//!
//! ```bash
//! cargo run --release --example measure -- -p minimax --opp alphabeta
//! cargo run --release --example measure -- --games 10 --quiet
//! ```

use std::env;
use std::process;

use tictactoe_minimax::{GameState, Mark, StrategyKind};

struct Args {
    player: StrategyKind,
    opp: StrategyKind,
    depth: Option<usize>,
    games: usize,
    quiet: bool,
}

#[derive(Default)]
struct SideTotals {
    ms: f64,
    nodes: u64,
    moves: u64,
}

impl SideTotals {
    fn avg_ms(&self) -> f64 {
        if self.moves == 0 {
            return 0.0;
        }
        self.ms / self.moves as f64
    }

    fn avg_nodes(&self) -> f64 {
        if self.moves == 0 {
            return 0.0;
        }
        self.nodes as f64 / self.moves as f64
    }
}

fn usage() -> ! {
    eprintln!(
        "Usage: measure [OPTIONS]\n\
         \n\
         Options:\n\
           -p, --player <NAME>  Strategy for X (default: alphabeta)\n\
               --opp <NAME>     Strategy for O (default: expectimax)\n\
               --depth <N>      Depth limit in plies (default: full search)\n\
               --games <N>      Number of games to play (default: 1)\n\
               --quiet          Suppress per-move lines\n\
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
        games: 1,
        quiet: false,
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
            "--games" => {
                let value = args.next().unwrap_or_else(|| usage());
                parsed.games = value.parse().unwrap_or_else(|_| {
                    eprintln!("--games expects a positive integer");
                    usage()
                });
            }
            "--quiet" => parsed.quiet = true,
            "-h" | "--help" => usage(),
            other => {
                eprintln!("unknown argument '{}'", other);
                usage();
            }
        }
    }

    parsed
}

fn play_one_game(args: &Args) -> (SideTotals, SideTotals) {
    let agent_x = args.player.build();
    let agent_o = args.opp.build();

    let mut totals_x = SideTotals::default();
    let mut totals_o = SideTotals::default();

    let mut state = GameState::new();

    while !state.is_terminal() {
        let mover = state.to_move();
        let (agent, name, totals) = match mover {
            Mark::X => (&agent_x, args.player, &mut totals_x),
            Mark::O => (&agent_o, args.opp, &mut totals_o),
        };

        let (action, stats) = match agent.decide_with_stats(&state, args.depth) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        };

        totals.ms += stats.elapsed_ms();
        totals.nodes += stats.nodes;
        totals.moves += 1;

        if !args.quiet {
            println!(
                "[{}:{}] move={}  time={:.3} ms  nodes={}",
                mover, name, action, stats.elapsed_ms(), stats.nodes
            );
        }

        state = state.successor(action).unwrap();
    }

    let outcome = match state.winner() {
        Some(mark) => format!("{} wins", mark),
        None => "DRAW".to_string(),
    };

    println!(
        "\nSUMMARY: X={}  O={}  outcome={}",
        args.player, args.opp, outcome
    );
    println!(
        "         X avg: {:.3} ms, {:.1} nodes/move | O avg: {:.3} ms, {:.1} nodes/move",
        totals_x.avg_ms(),
        totals_x.avg_nodes(),
        totals_o.avg_ms(),
        totals_o.avg_nodes()
    );

    (totals_x, totals_o)
}

fn main() {
    // Initialize logging
    env_logger::init();

    let args = parse_args();

    let mut sum_x_ms = 0.0;
    let mut sum_o_ms = 0.0;
    let mut sum_x_nodes = 0.0;
    let mut sum_o_nodes = 0.0;

    for game in 0..args.games {
        if !args.quiet {
            let depth = match args.depth {
                Some(d) => d.to_string(),
                None => "full".to_string(),
            };
            println!(
                "\n=== GAME {} | X={}  O={}  depth={} ===",
                game + 1,
                args.player,
                args.opp,
                depth
            );
        }

        let (totals_x, totals_o) = play_one_game(&args);
        sum_x_ms += totals_x.avg_ms();
        sum_o_ms += totals_o.avg_ms();
        sum_x_nodes += totals_x.avg_nodes();
        sum_o_nodes += totals_o.avg_nodes();
    }

    if args.games > 1 {
        let n = args.games as f64;
        println!("\nOVERALL AVERAGES ACROSS GAMES:");
        println!(
            "X ({}): {:.3} ms | {:.1} nodes/move",
            args.player,
            sum_x_ms / n,
            sum_x_nodes / n
        );
        println!(
            "O ({}): {:.3} ms | {:.1} nodes/move",
            args.opp,
            sum_o_ms / n,
            sum_o_nodes / n
        );
    }
}
