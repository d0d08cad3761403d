//! Beam search over a discrete neighborhood.
//!
//! Keeps the `width` best neighbors of the current solution at each step,
//! stops as soon as one of them reaches the known maximum score, and
//! otherwise walks on from the best of them.

mod config;
mod runner;

pub use config::BeamConfig;
pub use runner::{BeamResult, BeamRunner};

use crate::error::Result;
use crate::local::FlipProblem;
use crate::sat::Assignment;

/// Beam search over single-variable flips of a boolean assignment.
///
/// `max_score` is the score at which the search stops (e.g. the clause
/// count). `max_steps` of 0 leaves only the stagnation limit of
/// [`BeamConfig::default`].
///
/// # Errors
///
/// [`SearchError::InvalidProblem`](crate::SearchError::InvalidProblem) if
/// `width` is 0.
pub fn beam_search<F>(
    initial: Assignment,
    evaluate: F,
    max_score: f64,
    width: usize,
    max_steps: usize,
) -> Result<BeamResult<Assignment>>
where
    F: Fn(&Assignment) -> f64,
{
    let problem = FlipProblem::new(evaluate, Some(max_score));
    let config = BeamConfig::new(width).with_max_steps(max_steps);
    BeamRunner::run(&problem, initial, &config)
}
