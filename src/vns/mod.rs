//! Variable Neighborhood Search (VNS).
//!
//! Runs the same retain-the-best-k step as beam search, but starts with a
//! narrow neighborhood and widens it by one after every step that fails to
//! reach the maximum score, escaping stagnation by progressively enlarging
//! the candidate pool.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.

mod config;
mod runner;

pub use config::VnsConfig;
pub use runner::{VnsResult, VnsRunner};

use crate::error::Result;
use crate::local::FlipProblem;
use crate::sat::Assignment;

/// VNS over single-variable flips of a boolean assignment.
///
/// `max_steps` is required: on unsatisfiable instances the width would
/// otherwise grow forever.
///
/// # Errors
///
/// [`SearchError::InvalidProblem`](crate::SearchError::InvalidProblem) if
/// `initial_width` is 0, [`SearchError::InvalidConfig`](crate::SearchError::InvalidConfig)
/// if `max_steps` is 0.
pub fn variable_neighborhood_search<F>(
    initial: Assignment,
    evaluate: F,
    max_score: f64,
    initial_width: usize,
    max_steps: usize,
) -> Result<VnsResult<Assignment>>
where
    F: Fn(&Assignment) -> f64,
{
    let problem = FlipProblem::new(evaluate, Some(max_score));
    let config = VnsConfig::new(max_steps).with_initial_width(initial_width);
    VnsRunner::run(&problem, initial, &config)
}
