//! Static positional evaluation.
//!
//! When a search is depth-limited it stops recursing at the cutoff frontier
//! and scores the position with [`evaluate`] instead of the exact terminal
//! utility. The heuristic is additive and signed from X's perspective:
//! positive favors X, negative favors O.

use crate::game_state::{GameState, Mark, WIN_LINES};

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

const CENTER_WEIGHT: f64 = 1.0;
const CORNER_WEIGHT: f64 = 0.5;
const OPEN_LINE_WEIGHT: f64 = 3.0;

/// Scores a position from X's perspective.
///
/// Terminal states return the exact [`GameState::utility`], keeping cutoff
/// values and true leaf values on one consistent scale. Non-terminal states
/// are scored by three additive features:
///
/// - center control: ±1.0 for the center cell
/// - corner control: ±0.5 per corner
/// - open lines: ±3.0 per winning line containing only one side's marks
///   (a line holding both marks, or neither, contributes nothing)
///
/// Pure and deterministic: same state, same score, no side effects.
pub fn evaluate(state: &GameState) -> f64 {
    if state.is_terminal() {
        return state.utility();
    }

    let mut score = 0.0;

    match state.cell(CENTER) {
        Some(Mark::X) => score += CENTER_WEIGHT,
        Some(Mark::O) => score -= CENTER_WEIGHT,
        None => {}
    }

    for corner in CORNERS {
        match state.cell(corner) {
            Some(Mark::X) => score += CORNER_WEIGHT,
            Some(Mark::O) => score -= CORNER_WEIGHT,
            None => {}
        }
    }

    for line in WIN_LINES {
        let has_x = line.iter().any(|&i| state.cell(i) == Some(Mark::X));
        let has_o = line.iter().any(|&i| state.cell(i) == Some(Mark::O));

        if has_x && !has_o {
            score += OPEN_LINE_WEIGHT;
        } else if has_o && !has_x {
            score -= OPEN_LINE_WEIGHT;
        }
    }

    score
}
