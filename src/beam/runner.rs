//! Beam search execution loop.
//!
//! # Algorithm
//!
//! 1. Stop if the current solution reaches the maximum score
//! 2. Score every neighbor and retain the `width` best
//! 3. Stop if a retained candidate reaches the maximum score
//! 4. Otherwise continue from the best retained candidate, even when it
//!    does not improve on the current one
//!
//! The best solution seen is kept separately, so sideways and downhill
//! steps never lose it.

use tracing::{debug, trace};

use super::config::BeamConfig;
use crate::error::Result;
use crate::local::{
    is_perfect, penetrance, retain_top, score_neighbors, LocalSearchProblem, LocalTermination,
};

/// Result of a beam search run.
#[derive(Debug, Clone)]
pub struct BeamResult<S: Clone> {
    /// Best solution found.
    pub best: S,

    /// Score of `best`.
    pub score: f64,

    /// Evaluation index at which `best` was scored (0 = initial solution).
    pub best_evaluation: usize,

    /// Total number of neighbor evaluations.
    pub evaluations: usize,

    /// Number of steps taken.
    pub steps: usize,

    /// Best score after each step, starting with the initial score.
    pub history: Vec<f64>,

    /// Why the search stopped.
    pub termination: LocalTermination,
}

impl<S: Clone> BeamResult<S> {
    /// `best_evaluation / evaluations`.
    ///
    /// The initial solution is evaluation 0 and is not counted in
    /// `evaluations`, so a run whose best is the initial solution reports 0,
    /// as does a run that evaluated no neighbor at all.
    pub fn penetrance(&self) -> f64 {
        penetrance(self.best_evaluation, self.evaluations)
    }
}

/// Executes beam search.
pub struct BeamRunner;

impl BeamRunner {
    /// Runs beam search from `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidProblem`](crate::SearchError::InvalidProblem)
    /// for a zero beam width, before any evaluation.
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        initial: P::Solution,
        config: &BeamConfig,
    ) -> Result<BeamResult<P::Solution>> {
        config.validate()?;

        let max_score = problem.max_score();
        let mut current_score = problem.score(&initial);
        let mut current = initial;
        let mut best = current.clone();
        let mut best_score = current_score;
        let mut best_evaluation = 0usize;
        let mut evaluations = 0usize;
        let mut steps = 0usize;
        let mut no_improve = 0usize;
        let mut history = vec![best_score];

        debug!(event = "beam_start", width = config.width, score = current_score);

        let termination = loop {
            if is_perfect(current_score, max_score) {
                break LocalTermination::Satisfied;
            }
            if config.max_steps > 0 && steps >= config.max_steps {
                break LocalTermination::StepLimit;
            }

            let candidates = score_neighbors(problem, &current, &mut evaluations);
            let beam = retain_top(candidates, config.width);
            steps += 1;

            // Retained candidates are best-first, so a perfect one leads.
            let Some(leader) = beam.into_iter().next() else {
                break LocalTermination::NoNeighbors;
            };

            if leader.score > best_score {
                best = leader.solution.clone();
                best_score = leader.score;
                best_evaluation = leader.evaluation;
                no_improve = 0;
            } else {
                no_improve += 1;
            }
            history.push(best_score);
            trace!(step = steps, score = leader.score, best_score, evaluations);

            current = leader.solution;
            current_score = leader.score;

            if config.max_no_improve > 0 && no_improve >= config.max_no_improve {
                break LocalTermination::Stagnation;
            }
        };

        debug!(
            event = "beam_end",
            score = best_score,
            steps,
            evaluations,
            best_evaluation,
            termination = ?termination,
        );

        Ok(BeamResult {
            best,
            score: best_score,
            best_evaluation,
            evaluations,
            steps,
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

    fn single_clause() -> Formula {
        Formula::new(3, vec![Clause::from_signed(&[1, 2, 3])]).unwrap()
    }

    #[test]
    fn test_zero_width_rejected_before_search() {
        let result = BeamRunner::run(&single_clause(), Assignment::all_false(3), &BeamConfig::new(0));
        assert!(matches!(result, Err(SearchError::InvalidProblem(_))));
    }

    #[test]
    fn test_initial_already_satisfied() {
        let initial = Assignment::new(vec![true, false, false]);
        let result = BeamRunner::run(&single_clause(), initial.clone(), &BeamConfig::new(2)).unwrap();
        assert_eq!(result.best, initial);
        assert_eq!(result.steps, 0);
        assert_eq!(result.evaluations, 0);
        assert_eq!(result.best_evaluation, 0);
        assert_eq!(result.penetrance(), 0.0);
        assert_eq!(result.termination, LocalTermination::Satisfied);
    }

    #[test]
    fn test_single_clause_one_step() {
        let result =
            BeamRunner::run(&single_clause(), Assignment::all_false(3), &BeamConfig::new(3)).unwrap();
        assert_eq!(result.score, 1.0);
        assert_eq!(result.steps, 1);
        assert_eq!(result.evaluations, 3);
        assert_eq!(result.best_evaluation, 1);
        assert!((result.penetrance() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.termination, LocalTermination::Satisfied);
    }

    #[test]
    fn test_solves_random_3sat() {
        // Under-constrained instances (m/n = 2) are almost always satisfiable.
        let mut rng = StdRng::seed_from_u64(42);
        let formula = Formula::random_k_sat(3, 20, 40, &mut rng).unwrap();
        let initial = Assignment::random(20, &mut rng);
        let config = BeamConfig::new(3).with_max_steps(500);

        let result = BeamRunner::run(&formula, initial, &config).unwrap();
        assert!(result.score >= 38.0, "score {} too low", result.score);
        assert!(result.best_evaluation <= result.evaluations);
        if result.termination == LocalTermination::Satisfied {
            assert!(formula.is_satisfied(&result.best));
        }
    }

    #[test]
    fn test_best_survives_downhill_steps() {
        // Unsatisfiable: (x1) & (!x1). Every step is sideways, score stays 1.
        let formula = Formula::new(
            1,
            vec![Clause::from_signed(&[1]), Clause::from_signed(&[-1])],
        )
        .unwrap();
        let config = BeamConfig::new(1).with_max_no_improve(5);
        let result = BeamRunner::run(&formula, Assignment::all_false(1), &config).unwrap();

        assert_eq!(result.score, 1.0);
        assert_eq!(result.steps, 5);
        assert_eq!(result.termination, LocalTermination::Stagnation);
        for w in result.history.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_step_limit() {
        let formula = Formula::new(
            1,
            vec![Clause::from_signed(&[1]), Clause::from_signed(&[-1])],
        )
        .unwrap();
        let config = BeamConfig::new(2).with_max_steps(3).with_max_no_improve(0);
        let result = BeamRunner::run(&formula, Assignment::all_false(1), &config).unwrap();
        assert_eq!(result.steps, 3);
        assert_eq!(result.termination, LocalTermination::StepLimit);
    }
}
