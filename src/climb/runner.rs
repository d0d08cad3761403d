//! Hill-climbing execution loop.
//!
//! # Algorithm (steepest ascent)
//!
//! 1. Score every neighbor of the current solution
//! 2. If the best neighbor strictly beats the current score, move to it
//! 3. Otherwise stop: the current solution is a local optimum
//!
//! Ties go to the first neighbor generated.

use tracing::{debug, trace};

use super::config::ClimbConfig;
use crate::local::{penetrance, score_neighbors, LocalSearchProblem, LocalTermination};

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct ClimbResult<S: Clone> {
    /// The final (locally optimal) solution.
    pub best: S,

    /// Score of `best`.
    pub score: f64,

    /// Evaluation index at which `best` was scored. 0 if the initial
    /// solution was never improved on.
    pub best_evaluation: usize,

    /// Total number of neighbor evaluations.
    pub evaluations: usize,

    /// Number of accepted moves.
    pub moves: usize,

    /// Score after each move, starting with the initial score.
    /// Strictly increasing.
    pub history: Vec<f64>,

    /// Why the climb stopped.
    pub termination: LocalTermination,
}

impl<S: Clone> ClimbResult<S> {
    /// `best_evaluation / evaluations`.
    ///
    /// The initial solution is evaluation 0 and is not counted in
    /// `evaluations`, so a run whose best is the initial solution reports 0,
    /// as does a run that evaluated no neighbor at all.
    pub fn penetrance(&self) -> f64 {
        penetrance(self.best_evaluation, self.evaluations)
    }
}

/// Executes steepest-ascent hill climbing.
pub struct ClimbRunner;

impl ClimbRunner {
    /// Climbs from `initial` until no neighbor improves the score.
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        initial: P::Solution,
        config: &ClimbConfig,
    ) -> ClimbResult<P::Solution> {
        let mut current = initial;
        let mut current_score = problem.score(&current);
        let mut best_evaluation = 0usize;
        let mut evaluations = 0usize;
        let mut moves = 0usize;
        let mut history = vec![current_score];

        debug!(event = "climb_start", score = current_score);

        let termination = loop {
            if config.max_moves > 0 && moves >= config.max_moves {
                break LocalTermination::StepLimit;
            }

            let candidates = score_neighbors(problem, &current, &mut evaluations);
            if candidates.is_empty() {
                break LocalTermination::NoNeighbors;
            }

            let mut best_neighbor = None;
            let mut best_neighbor_score = current_score;
            for candidate in candidates {
                if candidate.score > best_neighbor_score {
                    best_neighbor_score = candidate.score;
                    best_neighbor = Some(candidate);
                }
            }

            match best_neighbor {
                Some(candidate) => {
                    current = candidate.solution;
                    current_score = candidate.score;
                    best_evaluation = candidate.evaluation;
                    moves += 1;
                    history.push(current_score);
                    trace!(move_index = moves, score = current_score, evaluations);
                }
                None => break LocalTermination::LocalOptimum,
            }
        };

        debug!(
            event = "climb_end",
            score = current_score,
            moves,
            evaluations,
            best_evaluation,
            termination = ?termination,
        );

        ClimbResult {
            best: current,
            score: current_score,
            best_evaluation,
            evaluations,
            moves,
            history,
            termination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::{Assignment, Clause, Formula};

    /// Maximize -(x - target)^2 over integers with +-1 steps.
    struct Parabola {
        target: i32,
    }

    impl LocalSearchProblem for Parabola {
        type Solution = i32;

        fn score(&self, &x: &i32) -> f64 {
            let d = (x - self.target) as f64;
            -(d * d)
        }

        fn neighbors(&self, &x: &i32) -> Vec<i32> {
            vec![x - 1, x + 1]
        }
    }

    #[test]
    fn test_climbs_to_peak() {
        let problem = Parabola { target: 7 };
        let result = ClimbRunner::run(&problem, -3, &ClimbConfig::default());
        assert_eq!(result.best, 7);
        assert_eq!(result.moves, 10);
        assert_eq!(result.termination, LocalTermination::LocalOptimum);
        // 11 rounds of 2 evaluations; the best was scored in the 10th.
        assert_eq!(result.evaluations, 22);
        assert_eq!(result.best_evaluation, 20);
    }

    #[test]
    fn test_history_strictly_increasing() {
        let problem = Parabola { target: 0 };
        let result = ClimbRunner::run(&problem, 25, &ClimbConfig::default());
        assert_eq!(result.history.len(), result.moves + 1);
        for w in result.history.windows(2) {
            assert!(w[1] > w[0], "history must increase: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_move_limit() {
        let problem = Parabola { target: 100 };
        let config = ClimbConfig::default().with_max_moves(5);
        let result = ClimbRunner::run(&problem, 0, &config);
        assert_eq!(result.best, 5);
        assert_eq!(result.termination, LocalTermination::StepLimit);
    }

    #[test]
    fn test_already_optimal() {
        let problem = Parabola { target: 3 };
        let result = ClimbRunner::run(&problem, 3, &ClimbConfig::default());
        assert_eq!(result.moves, 0);
        assert_eq!(result.best_evaluation, 0);
        assert_eq!(result.evaluations, 2);
        assert_eq!(result.penetrance(), 0.0);
    }

    #[test]
    fn test_single_clause_satisfied_in_one_move() {
        // [[a, b, c]] from a = b = c = 0.
        let formula = Formula::new(3, vec![Clause::from_signed(&[1, 2, 3])]).unwrap();
        let result = ClimbRunner::run(&formula, Assignment::all_false(3), &ClimbConfig::default());

        assert_eq!(result.score, 1.0);
        assert!(formula.is_satisfied(&result.best));
        assert_eq!(result.moves, 1);
        assert!(result.best_evaluation <= 3);
    }

    #[test]
    fn test_single_clause_penetrance_counts_neighbors_only() {
        // First move flips a (evaluation 1); the satisfied assignment then
        // scores three more neighbors, none strictly better.
        let formula = Formula::new(3, vec![Clause::from_signed(&[1, 2, 3])]).unwrap();
        let result = ClimbRunner::run(&formula, Assignment::all_false(3), &ClimbConfig::default());

        assert_eq!(result.best_evaluation, 1);
        assert_eq!(result.evaluations, 6);
        assert!((result.penetrance() - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(result.termination, LocalTermination::LocalOptimum);
    }

    #[test]
    fn test_terminates_only_at_local_optimum() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(42);
        let formula = Formula::random_k_sat(3, 12, 50, &mut rng).unwrap();
        let initial = Assignment::random(12, &mut rng);
        let result = ClimbRunner::run(&formula, initial, &ClimbConfig::default());

        for neighbor in result.best.flip_neighbors() {
            assert!(formula.score(&neighbor) <= result.score);
        }
    }

    mod properties {
        use super::super::ClimbRunner;
        use crate::climb::ClimbConfig;
        use crate::local::LocalSearchProblem;
        use crate::sat::{Assignment, Formula};
        use proptest::prelude::*;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        proptest! {
            #[test]
            fn climb_scores_never_decrease(seed in any::<u64>(), n in 3usize..12, m in 1usize..40) {
                let mut rng = StdRng::seed_from_u64(seed);
                let formula = Formula::random_k_sat(3, n, m, &mut rng).unwrap();
                let initial = Assignment::random(n, &mut rng);
                let initial_score = formula.score(&initial);

                let result = ClimbRunner::run(&formula, initial, &ClimbConfig::default());

                prop_assert!(result.score >= initial_score);
                prop_assert!(result.score <= m as f64);
                for w in result.history.windows(2) {
                    prop_assert!(w[1] > w[0]);
                }
                prop_assert!(result.best_evaluation <= result.evaluations);
            }
        }
    }
}
