//! Statistics collection for search decisions
//!
//! Every call to [`Strategy::decide_with_stats`](crate::Strategy::decide_with_stats)
//! fills one of these: how many nodes the recursion visited and how long the
//! decision took. The counter is threaded explicitly through the recursive
//! search rather than wrapped around it, so counting one node per recursive
//! call costs a single increment.

use std::time::Duration;

/// Statistics collected while deciding a single move
#[derive(Debug, Clone)]
pub struct SearchStats {
    /// Number of nodes visited (one per recursive search call)
    pub nodes: u64,

    /// Wall-clock time spent on the decision
    pub elapsed: Duration,

    /// The depth limit the search ran under, if any
    pub depth_limit: Option<usize>,
}

impl SearchStats {
    /// Creates an empty statistics object for a search under the given
    /// depth limit
    pub fn new(depth_limit: Option<usize>) -> Self {
        SearchStats {
            nodes: 0,
            elapsed: Duration::from_secs(0),
            depth_limit,
        }
    }

    /// Records one visited node
    pub(crate) fn count_node(&mut self) {
        self.nodes += 1;
    }

    /// Returns the elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Returns the number of nodes visited per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes as f64 / self.elapsed.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        let depth = match self.depth_limit {
            Some(limit) => limit.to_string(),
            None => "full".to_string(),
        };
        format!(
            "Search Statistics:\n\
             - Nodes visited: {}\n\
             - Decision time: {:.3} ms\n\
             - Nodes per second: {:.1}\n\
             - Depth limit: {}",
            self.nodes,
            self.elapsed_ms(),
            self.nodes_per_second(),
            depth
        )
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new(None)
    }
}
