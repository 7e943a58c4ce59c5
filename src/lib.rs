//! # tictactoe-minimax
//!
//! Adversarial game-tree search for 3x3 Tic-Tac-Toe, with three
//! interchangeable decision procedures behind one uniform contract:
//!
//! - [`Minimax`]: exhaustive minimax search
//! - [`AlphaBeta`]: minimax with alpha-beta pruning (same values, fewer nodes)
//! - [`Expectimax`]: models the opponent as uniformly random instead of
//!   adversarial
//!
//! All three search a tree of immutable [`GameState`] values. X is the
//! maximizing player and O the minimizing (or, for expectimax, random) one.
//! Search is exhaustive by default; an optional depth limit in plies cuts the
//! recursion off early and substitutes the static [`evaluate`] heuristic at
//! the frontier.
//!
//! ## Basic Usage
//!
//! ```
//! use tictactoe_minimax::{AlphaBeta, GameState, Strategy};
//!
//! fn main() -> Result<(), tictactoe_minimax::SearchError> {
//!     let mut state = GameState::new();
//!     let agent = AlphaBeta;
//!
//!     // Exhaustive search (no depth limit) from the empty board.
//!     let action = agent.decide(&state, None)?;
//!     state = state.successor(action)?;
//!
//!     assert!(!state.is_terminal());
//!     Ok(())
//! }
//! ```
//!
//! ## Depth limits and instrumentation
//!
//! ```
//! use tictactoe_minimax::{GameState, Minimax, Strategy};
//!
//! fn main() -> Result<(), tictactoe_minimax::SearchError> {
//!     let state = GameState::new();
//!
//!     // Look ahead three plies, then score frontier positions heuristically.
//!     let (action, stats) = Minimax.decide_with_stats(&state, Some(3))?;
//!
//!     println!("chose {} after {} nodes", action, stats.nodes);
//!     Ok(())
//! }
//! ```
//!
//! ## Choosing a strategy at runtime
//!
//! [`StrategyKind`] parses strategy names and builds boxed trait objects,
//! which is how the `play` and `measure` demos wire up their command lines:
//!
//! ```
//! use tictactoe_minimax::{Strategy, StrategyKind};
//!
//! let kind: StrategyKind = "alphabeta".parse().unwrap();
//! let agent = kind.build();
//! assert_eq!(agent.name(), "alphabeta");
//! ```

pub mod evaluation;
pub mod game_state;
pub mod stats;
pub mod strategy;

pub use evaluation::evaluate;
pub use game_state::{GameState, Mark};
pub use stats::SearchStats;
pub use strategy::{AlphaBeta, Expectimax, Minimax, SearchOutcome, Strategy, StrategyKind};

/// Error types for search and state transitions
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// The requested cell is out of range or already occupied
    #[error("invalid move: cell {index} is out of range or already occupied")]
    InvalidMove { index: usize },

    /// No legal actions are available from the current state
    #[error("no legal actions available from current state")]
    NoLegalActions,

    /// A strategy name that none of the built-in strategies answer to
    #[error("unknown strategy '{0}' (expected minimax, alphabeta or expectimax)")]
    UnknownStrategy(String),
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
