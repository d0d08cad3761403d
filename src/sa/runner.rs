//! Simulated annealing loop.
//!
//! # Algorithm
//!
//! 1. Start from the caller's configuration at the initial temperature
//! 2. At each temperature level, attempt the schedule's number of moves:
//!    a. Perturb the current configuration
//!    b. Accept if the cost drops, otherwise with probability
//!    `exp(-(new - current) / T)`
//!    c. Snapshot the configuration whenever it beats the best so far
//! 3. Cool, and stop once the temperature is no longer above the stopping
//!    temperature (or the move budget runs out)
//! 4. Return the snapshot, not the configuration the walk ended on

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// Lowest-cost configuration visited.
    pub best: S,

    pub best_cost: f64,

    /// Cost of the configuration the walk ended on. Never below `best_cost`.
    pub final_cost: f64,

    /// Perturbations attempted.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Accepted perturbations, improving ones included.
    pub accepted_moves: usize,

    /// Perturbations that strictly lowered the cost.
    pub improving_moves: usize,

    pub cancelled: bool,

    /// Best cost, sampled every `max(100, iterations_per_temperature)`
    /// perturbations and once more at the end if it changed.
    pub cost_history: Vec<f64>,

    /// Current cost after every perturbation when
    /// [`SaConfig::record_trajectory`] is set; empty otherwise.
    pub trajectory: Vec<f64>,
}

/// Executes simulated annealing.
pub struct SaRunner;

impl SaRunner {
    /// Anneals from `initial`.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidConfig`](crate::SearchError::InvalidConfig)
    /// if `config` does not validate.
    pub fn run<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>> {
        Self::run_with_cancel(problem, initial, config, None)
    }

    /// Like [`run`](Self::run); the flag is polled once per temperature
    /// level.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        let moves_per_level = config.cooling.moves_per_level(config);
        let budget = match config.max_iterations {
            0 => usize::MAX,
            n => n,
        };
        let sample_every = config.iterations_per_temperature.max(100);

        let mut current_cost = problem.cost(&initial);
        let mut current = initial;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut level = 0usize;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        let mut cost_history = vec![best_cost];
        let mut trajectory = Vec::new();

        debug!(
            event = "anneal_start",
            cost = current_cost,
            initial_temperature = temperature,
            min_temperature = config.min_temperature,
            cooling = ?config.cooling,
        );

        while temperature > config.min_temperature && iterations < budget {
            if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }

            for _ in 0..moves_per_level.min(budget - iterations) {
                let candidate = problem.neighbor(&current, &mut rng);
                let candidate_cost = problem.cost(&candidate);
                let delta = candidate_cost - current_cost;

                if delta < 0.0 {
                    improving_moves += 1;
                }
                if metropolis(delta, temperature, &mut rng) {
                    accepted_moves += 1;
                    current = candidate;
                    current_cost = candidate_cost;
                    if current_cost < best_cost {
                        best_cost = current_cost;
                        best = current.clone();
                    }
                }

                iterations += 1;
                if config.record_trajectory {
                    trajectory.push(current_cost);
                }
                if iterations % sample_every == 0 {
                    cost_history.push(best_cost);
                }
            }

            temperature = config.cooling.next_temperature(temperature, level, config);
            level += 1;
        }

        if cost_history.last() != Some(&best_cost) {
            cost_history.push(best_cost);
        }

        debug!(
            event = "anneal_end",
            best_cost,
            final_cost = current_cost,
            iterations,
            levels = level,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            cancelled,
        );

        Ok(SaResult {
            best,
            best_cost,
            final_cost: current_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
            trajectory,
        })
    }
}

/// Acceptance test: always take a strict improvement, otherwise take the
/// move with probability `exp(-delta / temperature)`.
fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    delta < 0.0 || rng.random::<f64>() < (-delta / temperature).exp()
}
