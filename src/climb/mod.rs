//! Steepest-ascent hill climbing.
//!
//! Moves to the best neighbor as long as it strictly improves the score and
//! stops at the first local optimum. Reports where along the run the final
//! solution was found (penetrance).

mod config;
mod runner;

pub use config::ClimbConfig;
pub use runner::{ClimbResult, ClimbRunner};

use crate::local::FlipProblem;
use crate::sat::Assignment;

/// Hill-climbs over single-variable flips of a boolean assignment.
///
/// `max_moves` of 0 means no limit.
///
/// # Examples
///
/// ```
/// use u_search::climb::hill_climb;
/// use u_search::sat::Assignment;
///
/// let result = hill_climb(Assignment::all_false(4), |a| a.count_true() as f64, 0);
/// assert_eq!(result.score, 4.0);
/// assert_eq!(result.moves, 4);
/// ```
pub fn hill_climb<F>(initial: Assignment, evaluate: F, max_moves: usize) -> ClimbResult<Assignment>
where
    F: Fn(&Assignment) -> f64,
{
    let problem = FlipProblem::new(evaluate, None);
    ClimbRunner::run(&problem, initial, &ClimbConfig::default().with_max_moves(max_moves))
}
