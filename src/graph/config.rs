//! Graph search configuration and strategies.

use std::fmt;

/// Frontier ordering discipline.
///
/// | Strategy       | Container | Key       | Duplicate rule      |
/// |----------------|-----------|-----------|---------------------|
/// | `BreadthFirst` | FIFO      | –         | explored-set        |
/// | `DepthFirst`   | LIFO      | –         | explored-set        |
/// | `UniformCost`  | priority  | `g`       | best-known `g`      |
/// | `Greedy`       | priority  | `h`       | explored-set        |
/// | `AStar`        | priority  | `g + h`   | best-known `g`      |
///
/// Explored-set strategies mark a state when it is first *generated*, so a
/// state is queued at most once. Best-known-`g` strategies re-queue a state
/// whenever a strictly cheaper path to it is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first search. Optimal in number of steps.
    #[default]
    BreadthFirst,
    /// Depth-first search. Returns some path, not necessarily the shortest.
    DepthFirst,
    /// Uniform-cost search (Dijkstra). Optimal for non-negative step costs.
    UniformCost,
    /// Greedy best-first search on the heuristic alone. No optimality claim.
    Greedy,
    /// A*. Optimal when the heuristic is admissible.
    AStar,
}

impl Strategy {
    /// Whether duplicates are handled with a best-known-cost table
    /// instead of the once-only explored-set.
    pub fn tracks_best_cost(self) -> bool {
        matches!(self, Strategy::UniformCost | Strategy::AStar)
    }

    /// Whether the heuristic is evaluated for generated states.
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Strategy::Greedy | Strategy::AStar)
    }

    /// Frontier key for a node with cost-so-far `g` and estimate `h`.
    ///
    /// FIFO/LIFO strategies ignore the key; `0.0` is returned.
    pub fn priority(self, g: f64, h: f64) -> f64 {
        match self {
            Strategy::BreadthFirst | Strategy::DepthFirst => 0.0,
            Strategy::UniformCost => g,
            Strategy::Greedy => h,
            Strategy::AStar => g + h,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::UniformCost => "ucs",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for a graph search run.
///
/// # Examples
///
/// ```
/// use u_search::graph::{GraphSearchConfig, Strategy};
///
/// let config = GraphSearchConfig::new(Strategy::AStar).with_max_expansions(10_000);
/// assert_eq!(config.strategy, Strategy::AStar);
/// assert_eq!(config.max_expansions, 10_000);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSearchConfig {
    /// Frontier ordering discipline.
    pub strategy: Strategy,

    /// Maximum number of node expansions. 0 = no limit.
    ///
    /// Reaching the limit ends the search with
    /// [`Termination::BudgetExhausted`](super::Termination::BudgetExhausted).
    pub max_expansions: usize,
}

impl GraphSearchConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphSearchConfig::default();
        assert_eq!(config.strategy, Strategy::BreadthFirst);
        assert_eq!(config.max_expansions, 0);
    }

    #[test]
    fn test_priority_keys() {
        assert_eq!(Strategy::UniformCost.priority(2.0, 5.0), 2.0);
        assert_eq!(Strategy::Greedy.priority(2.0, 5.0), 5.0);
        assert_eq!(Strategy::AStar.priority(2.0, 5.0), 7.0);
        assert_eq!(Strategy::BreadthFirst.priority(2.0, 5.0), 0.0);
    }

    #[test]
    fn test_dedup_rule() {
        assert!(Strategy::UniformCost.tracks_best_cost());
        assert!(Strategy::AStar.tracks_best_cost());
        assert!(!Strategy::Greedy.tracks_best_cost());
        assert!(!Strategy::BreadthFirst.tracks_best_cost());
        assert!(!Strategy::DepthFirst.tracks_best_cost());
    }

    #[test]
    fn test_display() {
        assert_eq!(Strategy::AStar.to_string(), "astar");
        assert_eq!(Strategy::DepthFirst.to_string(), "dfs");
    }
}
