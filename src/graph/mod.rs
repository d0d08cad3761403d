//! Systematic graph search: BFS, DFS, UCS, Greedy best-first and A*.
//!
//! A single expand / goal-test / enqueue loop parameterized by a frontier
//! discipline ([`Strategy`]) and an optional heuristic. Nodes share their
//! parent links, and the action sequence is rebuilt by walking those links
//! back from the goal.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 3

mod config;
mod frontier;
mod node;
mod runner;
mod types;

use std::hash::Hash;

pub use config::{GraphSearchConfig, Strategy};
pub use frontier::Frontier;
pub use node::{reconstruct, reconstruct_states, Ancestors, Node};
pub use runner::{GraphResult, GraphSearchRunner, Termination};
pub use types::{FnProblem, GraphProblem, Successor};

/// Searches from `start` using closures for the goal test and successor
/// generation.
///
/// # Examples
///
/// ```
/// use u_search::graph::{search, Strategy, Successor};
///
/// let result = search(
///     0i32,
///     |&n| n == 3,
///     |&n| vec![Successor::unit('+', n + 1), Successor::unit('-', n - 1)],
///     Strategy::BreadthFirst,
/// );
/// assert!(result.found);
/// assert_eq!(result.path, vec!['+', '+', '+']);
/// ```
pub fn search<S, A, G, F>(
    start: S,
    is_goal: G,
    successors: F,
    strategy: Strategy,
) -> GraphResult<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<Successor<S, A>>,
{
    let problem = FnProblem::new(start, is_goal, successors, None::<fn(&S) -> f64>);
    GraphSearchRunner::run(&problem, &GraphSearchConfig::new(strategy))
}

/// Like [`search`], with a heuristic for [`Strategy::Greedy`] and
/// [`Strategy::AStar`].
///
/// A* only guarantees an optimal path when `heuristic` is admissible.
pub fn search_with_heuristic<S, A, G, F, H>(
    start: S,
    is_goal: G,
    successors: F,
    strategy: Strategy,
    heuristic: H,
) -> GraphResult<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<Successor<S, A>>,
    H: Fn(&S) -> f64,
{
    let problem = FnProblem::new(start, is_goal, successors, Some(heuristic));
    GraphSearchRunner::run(&problem, &GraphSearchConfig::new(strategy))
}
