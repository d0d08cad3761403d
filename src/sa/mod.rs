//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima. The best configuration ever visited is returned, not the
//! one the walk ends on.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;
mod types;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
pub use types::{FnAnneal, SaProblem};

use rand::RngCore;

use crate::error::Result;

/// Anneals `initial` using closures for cost and perturbation.
///
/// Cools geometrically by `cooling_rate`, performing one perturbation per
/// temperature step until the temperature drops to `stop_temp`.
///
/// # Examples
///
/// ```
/// use rand::{Rng, RngCore};
/// use u_search::sa::simulated_anneal;
///
/// let result = simulated_anneal(
///     10i64,
///     |&x: &i64| (x * x) as f64,
///     |&x: &i64, rng: &mut dyn RngCore| if rng.random_bool(0.5) { x + 1 } else { x - 1 },
///     100.0,
///     0.99,
///     0.01,
/// )
/// .unwrap();
/// assert!(result.best_cost <= 100.0);
/// ```
///
/// # Errors
///
/// [`SearchError::InvalidConfig`](crate::SearchError::InvalidConfig) when the
/// temperatures or cooling rate are out of range.
pub fn simulated_anneal<S, C, N>(
    initial: S,
    cost: C,
    perturb: N,
    initial_temp: f64,
    cooling_rate: f64,
    stop_temp: f64,
) -> Result<SaResult<S>>
where
    S: Clone,
    C: Fn(&S) -> f64,
    N: Fn(&S, &mut dyn RngCore) -> S,
{
    let problem = FnAnneal::new(cost, perturb);
    let config = SaConfig::default()
        .with_initial_temperature(initial_temp)
        .with_min_temperature(stop_temp)
        .with_cooling_rate(cooling_rate);
    SaRunner::run(&problem, initial, &config)
}
