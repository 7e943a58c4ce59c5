//! Expectimax search against a stochastic opponent
//!
//! Identical to minimax at X nodes. O nodes are chance nodes: instead of
//! assuming O plays the minimizing move, the opponent is modeled as picking
//! uniformly at random, so the node's value is the arithmetic mean of all
//! children. This makes expectimax willing to enter positions a worst-case
//! analysis would reject, which pays off exactly when the opponent really
//! is sloppy.

use crate::{
    game_state::{GameState, Mark},
    stats::SearchStats,
    strategy::{cutoff, SearchOutcome, Strategy},
    Result,
};

/// Expectimax: max at X nodes, uniform average at O chance nodes
///
/// Chance nodes back up `None` as their action since an averaging node does
/// not choose a move. When `decide` is invoked with O to move the root
/// itself is a chance node, and the shared first-legal-action fallback
/// supplies the move.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expectimax;

impl Strategy for Expectimax {
    fn name(&self) -> &'static str {
        "expectimax"
    }

    fn search(
        &self,
        state: &GameState,
        depth_limit: Option<usize>,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Result<SearchOutcome> {
        stats.count_node();

        if let Some(outcome) = cutoff(state, depth_limit, depth) {
            return Ok(outcome);
        }

        let actions = state.legal_actions();

        if state.to_move() == Mark::X {
            let mut best_value = f64::NEG_INFINITY;
            let mut best_action = None;

            for action in actions {
                let child = state.successor(action)?;
                let value = self.search(&child, depth_limit, depth + 1, stats)?.value;

                if value > best_value {
                    best_value = value;
                    best_action = Some(action);
                }
            }

            Ok(SearchOutcome {
                value: best_value,
                action: best_action,
            })
        } else {
            // Degenerate chance node with nothing to average; unreachable
            // from legal play since the cutoff catches full boards.
            if actions.is_empty() {
                return Ok(SearchOutcome::leaf(0.0));
            }

            let mut total = 0.0;
            let count = actions.len();

            for action in actions {
                let child = state.successor(action)?;
                total += self.search(&child, depth_limit, depth + 1, stats)?.value;
            }

            Ok(SearchOutcome::leaf(total / count as f64))
        }
    }
}
