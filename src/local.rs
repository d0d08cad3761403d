//! Shared machinery for neighborhood-based local search.
//!
//! Hill climbing, beam search and variable-neighborhood search all share
//! one neighbor-generation step: every candidate is produced as an
//! independent value, scored, and stamped with its evaluation index. The
//! current solution is never modified while its neighbors are scored.

use crate::sat::Assignment;

/// Defines a maximization problem over a discrete neighborhood.
///
/// Higher scores are better. When the best achievable score is known
/// (e.g. the number of clauses of a formula), beam search and VNS stop as
/// soon as a candidate reaches it.
pub trait LocalSearchProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Scores a solution. Higher is better.
    fn score(&self, solution: &Self::Solution) -> f64;

    /// The best achievable score, if known.
    fn max_score(&self) -> Option<f64> {
        None
    }

    /// Produces the neighbors of `solution`, one per movable unit.
    ///
    /// Each neighbor is a fresh value. Moves that would be invalid are left
    /// out rather than reported.
    fn neighbors(&self, solution: &Self::Solution) -> Vec<Self::Solution>;
}

/// A scored neighbor.
#[derive(Debug, Clone)]
pub struct Candidate<S> {
    pub solution: S,
    pub score: f64,
    /// 1-based evaluation index at which this candidate was scored.
    pub evaluation: usize,
}

/// Why a local search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocalTermination {
    /// No neighbor strictly improves on the current solution.
    LocalOptimum,
    /// A solution with the maximum achievable score was found.
    Satisfied,
    /// The step budget was spent.
    StepLimit,
    /// Too many consecutive steps without improving the best score.
    Stagnation,
    /// The current solution has no neighbors.
    NoNeighbors,
}

/// Scores every neighbor of `current`, advancing `evaluations` once per
/// candidate.
pub(crate) fn score_neighbors<P: LocalSearchProblem>(
    problem: &P,
    current: &P::Solution,
    evaluations: &mut usize,
) -> Vec<Candidate<P::Solution>> {
    problem
        .neighbors(current)
        .into_iter()
        .map(|solution| {
            *evaluations += 1;
            let score = problem.score(&solution);
            Candidate {
                solution,
                score,
                evaluation: *evaluations,
            }
        })
        .collect()
}

/// Keeps the `width` best candidates, best first. Equal scores keep
/// generation order.
pub(crate) fn retain_top<S>(mut candidates: Vec<Candidate<S>>, width: usize) -> Vec<Candidate<S>> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(width);
    candidates
}

/// Whether `score` reaches the known maximum.
pub(crate) fn is_perfect(score: f64, max_score: Option<f64>) -> bool {
    max_score.is_some_and(|max| score >= max - 1e-9)
}

/// Ratio of the step at which the best result was found to the total
/// number of steps. 0 when no step was taken.
pub fn penetrance(found_at: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        found_at as f64 / total as f64
    }
}

/// A [`LocalSearchProblem`] over boolean [`Assignment`]s built from an
/// evaluation closure. The neighbors of an assignment are its single-variable
/// flips, in variable order.
pub struct FlipProblem<F> {
    evaluate: F,
    max_score: Option<f64>,
}

impl<F> FlipProblem<F>
where
    F: Fn(&Assignment) -> f64,
{
    pub fn new(evaluate: F, max_score: Option<f64>) -> Self {
        Self {
            evaluate,
            max_score,
        }
    }
}

impl<F> LocalSearchProblem for FlipProblem<F>
where
    F: Fn(&Assignment) -> f64,
{
    type Solution = Assignment;

    fn score(&self, solution: &Assignment) -> f64 {
        (self.evaluate)(solution)
    }

    fn max_score(&self) -> Option<f64> {
        self.max_score
    }

    fn neighbors(&self, solution: &Assignment) -> Vec<Assignment> {
        solution.flip_neighbors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Maximize the number of `true` values.
    struct OneMax {
        n: usize,
    }

    impl LocalSearchProblem for OneMax {
        type Solution = Assignment;

        fn score(&self, a: &Assignment) -> f64 {
            a.count_true() as f64
        }

        fn max_score(&self) -> Option<f64> {
            Some(self.n as f64)
        }

        fn neighbors(&self, a: &Assignment) -> Vec<Assignment> {
            a.flip_neighbors()
        }
    }

    #[test]
    fn test_score_neighbors_counts_evaluations() {
        let problem = OneMax { n: 4 };
        let current = Assignment::all_false(4);
        let mut evaluations = 10;
        let candidates = score_neighbors(&problem, &current, &mut evaluations);

        assert_eq!(candidates.len(), 4);
        assert_eq!(evaluations, 14);
        let indices: Vec<usize> = candidates.iter().map(|c| c.evaluation).collect();
        assert_eq!(indices, vec![11, 12, 13, 14]);
        // Scoring neighbors leaves the current solution untouched.
        assert_eq!(current, Assignment::all_false(4));
    }

    #[test]
    fn test_retain_top_is_stable() {
        let candidates: Vec<Candidate<char>> = [('a', 1.0), ('b', 3.0), ('c', 3.0), ('d', 2.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (solution, score))| Candidate {
                solution,
                score,
                evaluation: i + 1,
            })
            .collect();

        let kept: Vec<char> = retain_top(candidates.clone(), 3)
            .into_iter()
            .map(|c| c.solution)
            .collect();
        assert_eq!(kept, vec!['b', 'c', 'd']);

        let all = retain_top(candidates, 10);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_is_perfect() {
        assert!(is_perfect(3.0, Some(3.0)));
        assert!(!is_perfect(2.0, Some(3.0)));
        assert!(!is_perfect(100.0, None));
    }

    #[test]
    fn test_penetrance() {
        assert_eq!(penetrance(0, 0), 0.0);
        assert!((penetrance(3, 12) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_flip_problem() {
        let problem = FlipProblem::new(|a: &Assignment| a.count_true() as f64, Some(2.0));
        let a = Assignment::new(vec![true, false]);
        assert_eq!(problem.score(&a), 1.0);
        assert_eq!(problem.max_score(), Some(2.0));
        let neighbors = problem.neighbors(&a);
        assert_eq!(
            neighbors,
            vec![
                Assignment::new(vec![false, false]),
                Assignment::new(vec![true, true]),
            ]
        );
    }
}
