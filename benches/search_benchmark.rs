#[macro_use]
extern crate criterion;

use criterion::{black_box, BenchmarkId, Criterion};
use tictactoe_minimax::{GameState, Mark, StrategyKind};

// A midgame position with five empty cells, X to move
fn midgame() -> GameState {
    let x = Some(Mark::X);
    let o = Some(Mark::O);
    GameState::from_cells([x, None, o, None, x, None, o, None, None], Mark::X)
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");

    let empty = GameState::new();

    // Exhaustive search from the empty board: the worst case for all three
    // strategies, and the clearest view of what pruning saves.
    for kind in StrategyKind::ALL {
        let agent = kind.build();

        group.bench_with_input(
            BenchmarkId::new("empty_full", kind),
            &empty,
            |b, state| b.iter(|| black_box(agent.decide(black_box(state), None))),
        );
    }

    // Depth-limited searches from a midgame position
    let position = midgame();
    for depth in [2, 4, 6] {
        let agent = StrategyKind::AlphaBeta.build();

        group.bench_with_input(
            BenchmarkId::new("alphabeta_midgame_depth", depth),
            &depth,
            |b, &depth| {
                b.iter(|| black_box(agent.decide(black_box(&position), Some(depth))))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
