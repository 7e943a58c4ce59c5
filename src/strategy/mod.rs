//! Search strategies and the shared decision contract
//!
//! The three strategies differ only in how they combine child values at each
//! node: minimax takes max/min, alpha-beta does the same while pruning
//! provably irrelevant subtrees, and expectimax replaces the opponent's min
//! with an average. The cutoff logic (exact utility at terminals, heuristic
//! at the depth frontier) is shared, as is the public [`Strategy::decide`]
//! entry point.

pub mod alpha_beta;
pub mod expectimax;
pub mod minimax;

pub use alpha_beta::AlphaBeta;
pub use expectimax::Expectimax;
pub use minimax::Minimax;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::{evaluate, GameState, Result, SearchError, SearchStats};

/// The (value, action) pair produced by one search call
///
/// `value` is an exact utility (±1.0 / 0.0) when the subtree was searched to
/// terminals, or a heuristic [`evaluate`] score when a depth cutoff
/// intervened. `action` is `None` at terminals, at depth cutoffs, and at
/// expectimax chance nodes, where no single move is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Backed-up value of the position, from X's perspective
    pub value: f64,

    /// The move achieving that value, if this node chose one
    pub action: Option<usize>,
}

impl SearchOutcome {
    /// An outcome with a value but no chosen move
    pub(crate) fn leaf(value: f64) -> Self {
        SearchOutcome {
            value,
            action: None,
        }
    }
}

/// Shared cutoff test applied at the top of every recursive search call.
///
/// Terminal states back up their exact utility. At the depth frontier the
/// static heuristic stands in. The root (depth 0) is never depth-cut, so a
/// decision always weighs at least the immediate successors; with a depth
/// limit of 0 this degenerates to one-ply lookahead over `evaluate`.
pub(crate) fn cutoff(
    state: &GameState,
    depth_limit: Option<usize>,
    depth: usize,
) -> Option<SearchOutcome> {
    if state.is_terminal() {
        return Some(SearchOutcome::leaf(state.utility()));
    }

    if depth > 0 {
        if let Some(limit) = depth_limit {
            if depth >= limit {
                return Some(SearchOutcome::leaf(evaluate(state)));
            }
        }
    }

    None
}

/// The uniform decision contract implemented by all three strategies
///
/// Callers normally use [`Strategy::decide`] (or
/// [`Strategy::decide_with_stats`] when instrumentation is wanted); the
/// recursive [`Strategy::search`] is public so tests and tooling can inspect
/// backed-up values directly.
pub trait Strategy: Send + Sync {
    /// The strategy's command-line name
    fn name(&self) -> &'static str;

    /// Recursive search returning the backed-up (value, action) pair
    ///
    /// `depth` counts plies from the root of this decision; `stats` records
    /// one node per invocation.
    fn search(
        &self,
        state: &GameState,
        depth_limit: Option<usize>,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Result<SearchOutcome>;

    /// Picks a move for the side to play in `state`
    ///
    /// `depth_limit` of `None` searches exhaustively to game end; `Some(n)`
    /// explores at most `n` plies and scores the frontier heuristically.
    ///
    /// Calling this on a terminal state is a precondition violation and
    /// fails with [`SearchError::NoLegalActions`]. For any non-terminal
    /// state the returned index is always a member of
    /// [`GameState::legal_actions`]: if the internal search backs up no
    /// action (expectimax at a chance-node root does this), the first legal
    /// action is substituted rather than surfacing an error.
    fn decide(&self, state: &GameState, depth_limit: Option<usize>) -> Result<usize> {
        self.decide_with_stats(state, depth_limit)
            .map(|(action, _)| action)
    }

    /// Like [`Strategy::decide`], also returning node-count and timing
    /// statistics for the move
    fn decide_with_stats(
        &self,
        state: &GameState,
        depth_limit: Option<usize>,
    ) -> Result<(usize, SearchStats)> {
        let legal = state.legal_actions();
        if state.is_terminal() || legal.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let mut stats = SearchStats::new(depth_limit);
        let start = Instant::now();
        let outcome = self.search(state, depth_limit, 0, &mut stats)?;
        stats.elapsed = start.elapsed();

        let action = match outcome.action {
            Some(action) => action,
            None => {
                log::warn!(
                    "{} backed up no action, substituting first legal cell {}",
                    self.name(),
                    legal[0]
                );
                legal[0]
            }
        };

        log::debug!(
            "{} plays cell {} (value {:.3}, {} nodes in {:.3} ms)",
            self.name(),
            action,
            outcome.value,
            stats.nodes,
            stats.elapsed_ms()
        );

        Ok((action, stats))
    }
}

/// Name-keyed construction of the built-in strategies
///
/// Lets the demos select an algorithm per side from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Exhaustive minimax
    Minimax,
    /// Alpha-beta pruned minimax
    AlphaBeta,
    /// Expectimax against a uniformly random opponent
    Expectimax,
}

impl StrategyKind {
    /// All built-in strategies, in display order
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Minimax,
        StrategyKind::AlphaBeta,
        StrategyKind::Expectimax,
    ];

    /// Builds a boxed instance of the strategy
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Minimax => Box::new(Minimax),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta),
            StrategyKind::Expectimax => Box::new(Expectimax),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Minimax => write!(f, "minimax"),
            StrategyKind::AlphaBeta => write!(f, "alphabeta"),
            StrategyKind::Expectimax => write!(f, "expectimax"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(StrategyKind::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(StrategyKind::AlphaBeta),
            "expectimax" => Ok(StrategyKind::Expectimax),
            other => Err(SearchError::UnknownStrategy(other.to_string())),
        }
    }
}
