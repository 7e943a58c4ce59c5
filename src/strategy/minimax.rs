//! Exhaustive minimax search
//!
//! The reference algorithm: X picks the child with the maximum backed-up
//! value, O the minimum, with no pruning. Every node in the subtree (bounded
//! only by the depth limit) is visited, which makes this the baseline the
//! alpha-beta node counts are compared against.

use crate::{
    game_state::{GameState, Mark},
    stats::SearchStats,
    strategy::{cutoff, SearchOutcome, Strategy},
    Result,
};

/// Exhaustive minimax: max at X nodes, min at O nodes
///
/// Ties break toward the lowest cell index: the comparison is strict, so the
/// first action reaching the extremal value is kept and later equal values
/// never replace it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Strategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
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

        let maximizing = state.to_move() == Mark::X;
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_action = None;

        for action in state.legal_actions() {
            let child = state.successor(action)?;
            let value = self.search(&child, depth_limit, depth + 1, stats)?.value;

            let improved = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improved {
                best_value = value;
                best_action = Some(action);
            }
        }

        Ok(SearchOutcome {
            value: best_value,
            action: best_action,
        })
    }
}
