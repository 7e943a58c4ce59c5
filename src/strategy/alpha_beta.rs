//! Alpha-beta pruned minimax
//!
//! Produces the same root value as [`Minimax`](crate::Minimax) on every
//! tree while skipping subtrees that provably cannot affect it. The chosen
//! action can differ from plain minimax only among actions of equal value:
//! pruning changes which branches get explored, so a different, equally
//! optimal, first-best move may surface. Comparative tests against minimax
//! should compare values, not actions.

use crate::{
    game_state::{GameState, Mark},
    stats::SearchStats,
    strategy::{cutoff, SearchOutcome, Strategy},
    Result,
};

/// Minimax with alpha-beta pruning
///
/// The `[alpha, beta]` window starts at `(-inf, +inf)` at the root and is
/// threaded through the recursion by value: later siblings at a node observe
/// the bounds tightened by earlier ones, but unrelated subtrees never see
/// each other's windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl AlphaBeta {
    fn alphabeta(
        &self,
        state: &GameState,
        mut alpha: f64,
        mut beta: f64,
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
            let value = self
                .alphabeta(&child, alpha, beta, depth_limit, depth + 1, stats)?
                .value;

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_action = Some(action);
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_action = Some(action);
                }
                beta = beta.min(best_value);
            }

            // Remaining siblings cannot change the value backed up here.
            if alpha >= beta {
                break;
            }
        }

        Ok(SearchOutcome {
            value: best_value,
            action: best_action,
        })
    }
}

impl Strategy for AlphaBeta {
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn search(
        &self,
        state: &GameState,
        depth_limit: Option<usize>,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Result<SearchOutcome> {
        self.alphabeta(
            state,
            f64::NEG_INFINITY,
            f64::INFINITY,
            depth_limit,
            depth,
            stats,
        )
    }
}
