//! Variable Neighborhood Search execution engine.
//!
//! # Algorithm
//!
//! 1. Set the width k to its initial value
//! 2. While the step limit is not reached:
//!    a. Stop if the current solution reaches the maximum score
//!    b. Score every neighbor and retain the k best
//!    c. Stop if a retained candidate reaches the maximum score
//!    d. Otherwise continue from the best retained candidate and set
//!    k = k + 1 (clamped to the width cap, if any)
//! 3. Return the best solution found and the final width

use tracing::{debug, trace};

use super::config::VnsConfig;
use crate::error::Result;
use crate::local::{
    is_perfect, penetrance, retain_top, score_neighbors, LocalSearchProblem, LocalTermination,
};

/// Result of a VNS run.
#[derive(Debug, Clone)]
pub struct VnsResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Score of the best solution.
    pub score: f64,
    /// Evaluation index at which the best solution was scored.
    pub best_evaluation: usize,
    /// Total number of neighbor evaluations.
    pub evaluations: usize,
    /// Steps executed.
    pub steps: usize,
    /// Neighborhood width in effect when the search stopped.
    pub final_width: usize,
    /// Best score after each step, starting with the initial score.
    pub history: Vec<f64>,
    /// Why the search stopped.
    pub termination: LocalTermination,
}

impl<S: Clone> VnsResult<S> {
    /// `best_evaluation / evaluations`.
    ///
    /// The initial solution is evaluation 0 and is not counted in
    /// `evaluations`, so a run whose best is the initial solution reports 0,
    /// as does a run that evaluated no neighbor at all.
    pub fn penetrance(&self) -> f64 {
        penetrance(self.best_evaluation, self.evaluations)
    }
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Executes VNS from `initial`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_search::sat::{Assignment, Clause, Formula};
    /// use u_search::vns::{VnsConfig, VnsRunner};
    ///
    /// let formula = Formula::new(2, vec![Clause::from_signed(&[1]), Clause::from_signed(&[2])]).unwrap();
    /// let result = VnsRunner::run(&formula, Assignment::all_false(2), &VnsConfig::new(10)).unwrap();
    /// assert!(formula.is_satisfied(&result.best));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid configuration, before any evaluation.
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        initial: P::Solution,
        config: &VnsConfig,
    ) -> Result<VnsResult<P::Solution>> {
        config.validate()?;

        let max_score = problem.max_score();
        let mut current_score = problem.score(&initial);
        let mut current = initial;
        let mut best = current.clone();
        let mut best_score = current_score;
        let mut best_evaluation = 0usize;
        let mut evaluations = 0usize;
        let mut steps = 0usize;
        let mut width = config.initial_width;
        let mut history = vec![best_score];

        debug!(
            event = "vns_start",
            initial_width = width,
            max_steps = config.max_steps,
            score = current_score,
        );

        let termination = loop {
            if is_perfect(current_score, max_score) {
                break LocalTermination::Satisfied;
            }
            if steps >= config.max_steps {
                break LocalTermination::StepLimit;
            }

            let candidates = score_neighbors(problem, &current, &mut evaluations);
            let neighborhood = retain_top(candidates, width);
            steps += 1;

            let Some(leader) = neighborhood.into_iter().next() else {
                break LocalTermination::NoNeighbors;
            };

            if leader.score > best_score {
                best = leader.solution.clone();
                best_score = leader.score;
                best_evaluation = leader.evaluation;
            }
            history.push(best_score);
            trace!(step = steps, width, score = leader.score, best_score);

            current = leader.solution;
            current_score = leader.score;

            if is_perfect(current_score, max_score) {
                break LocalTermination::Satisfied;
            }

            width += 1;
            if config.max_width > 0 {
                width = width.min(config.max_width);
            }
        };

        debug!(
            event = "vns_end",
            score = best_score,
            steps,
            evaluations,
            final_width = width,
            termination = ?termination,
        );

        Ok(VnsResult {
            best,
            score: best_score,
            best_evaluation,
            evaluations,
            steps,
            final_width: width,
            history,
            termination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::{Assignment, Clause, Formula};
    use crate::SearchError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn contradiction() -> Formula {
        Formula::new(
            1,
            vec![Clause::from_signed(&[1]), Clause::from_signed(&[-1])],
        )
        .unwrap()
    }

    #[test]
    fn test_finds_satisfying_assignment() {
        let mut rng = StdRng::seed_from_u64(42);
        let formula = Formula::random_k_sat(3, 15, 30, &mut rng).unwrap();
        let initial = Assignment::random(15, &mut rng);

        let result = VnsRunner::run(&formula, initial, &VnsConfig::new(300)).unwrap();

        assert!(result.score >= 29.0, "score {} too low", result.score);
        assert!(result.final_width >= 1);
        if result.termination == LocalTermination::Satisfied {
            assert!(formula.is_satisfied(&result.best));
        }
    }

    #[test]
    fn test_width_grows_each_failed_step() {
        let result =
            VnsRunner::run(&contradiction(), Assignment::all_false(1), &VnsConfig::new(6)).unwrap();
        assert_eq!(result.termination, LocalTermination::StepLimit);
        assert_eq!(result.steps, 6);
        assert_eq!(result.final_width, 7);
    }

    #[test]
    fn test_width_cap() {
        let config = VnsConfig::new(20).with_initial_width(2).with_max_width(4);
        let result = VnsRunner::run(&contradiction(), Assignment::all_false(1), &config).unwrap();
        assert_eq!(result.final_width, 4);
    }

    #[test]
    fn test_width_reported_at_success() {
        // Two unit clauses from all-false: the first step fixes x1, the
        // second fixes x2 at width 2.
        let formula = Formula::new(2, vec![Clause::from_signed(&[1]), Clause::from_signed(&[2])]).unwrap();
        let result = VnsRunner::run(&formula, Assignment::all_false(2), &VnsConfig::new(10)).unwrap();
        assert_eq!(result.termination, LocalTermination::Satisfied);
        assert_eq!(result.steps, 2);
        assert_eq!(result.final_width, 2);
        assert_eq!(result.score, 2.0);
        assert_eq!(result.evaluations, 4);
        assert_eq!(result.best_evaluation, 4);
    }

    #[test]
    fn test_invalid_width() {
        let config = VnsConfig::new(10).with_initial_width(0);
        let result = VnsRunner::run(&contradiction(), Assignment::all_false(1), &config);
        assert!(matches!(result, Err(SearchError::InvalidProblem(_))));
    }

    #[test]
    fn test_history_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(7);
        let formula = Formula::random_k_sat(3, 10, 45, &mut rng).unwrap();
        let initial = Assignment::random(10, &mut rng);
        let result = VnsRunner::run(&formula, initial, &VnsConfig::new(40)).unwrap();
        for w in result.history.windows(2) {
            assert!(w[1] >= w[0]);
        }
        assert_eq!(result.history.len(), result.steps + 1);
    }
}
