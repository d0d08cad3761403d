//! CNF formulas scored by satisfied-clause count.

use rand::seq::index;
use rand::Rng;

use super::assignment::{Assignment, Literal};
use crate::error::{Result, SearchError};
use crate::local::LocalSearchProblem;

/// A disjunction of literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clause {
    pub literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    /// Builds a clause from signed, 1-based literals; zeros are skipped.
    pub fn from_signed(values: &[i64]) -> Self {
        Self {
            literals: values.iter().filter_map(|&v| Literal::from_signed(v)).collect(),
        }
    }

    /// Whether at least one literal is true under `assignment`.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.literals.iter().any(|&lit| assignment.literal(lit))
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

/// An ordered conjunction of clauses over `num_vars` variables.
///
/// The score of an assignment is the number of satisfied clauses, so
/// `0 <= score <= len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formula {
    num_vars: usize,
    clauses: Vec<Clause>,
}

impl Formula {
    /// Creates a formula, checking every literal against `num_vars`.
    pub fn new(num_vars: usize, clauses: Vec<Clause>) -> Result<Self> {
        for (i, clause) in clauses.iter().enumerate() {
            if let Some(lit) = clause.literals.iter().find(|lit| lit.var >= num_vars) {
                return Err(SearchError::InvalidProblem(format!(
                    "clause {i} uses variable {} but the formula has {num_vars} variables",
                    lit.var
                )));
            }
        }
        Ok(Self { num_vars, clauses })
    }

    /// Generates a random k-SAT instance: `m` clauses, each over `k`
    /// distinct variables drawn from `n`, each literal negated with
    /// probability ½.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidProblem`] if `k == 0` or `k > n`.
    pub fn random_k_sat<R: Rng>(k: usize, n: usize, m: usize, rng: &mut R) -> Result<Self> {
        if k == 0 {
            return Err(SearchError::InvalidProblem(
                "clauses need at least one literal".into(),
            ));
        }
        if k > n {
            return Err(SearchError::InvalidProblem(format!(
                "a {k}-literal clause needs at least {k} variables, got {n}"
            )));
        }

        let clauses = (0..m)
            .map(|_| {
                let mut literals: Vec<Literal> = index::sample(rng, n, k)
                    .into_iter()
                    .map(|var| {
                        if rng.random_bool(0.5) {
                            Literal::neg(var)
                        } else {
                            Literal::pos(var)
                        }
                    })
                    .collect();
                literals.sort();
                Clause::new(literals)
            })
            .collect();

        Ok(Self {
            num_vars: n,
            clauses,
        })
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of clauses satisfied by `assignment`.
    pub fn satisfied_count(&self, assignment: &Assignment) -> usize {
        self.clauses
            .iter()
            .filter(|c| c.is_satisfied(assignment))
            .count()
    }

    /// Whether every clause is satisfied.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().all(|c| c.is_satisfied(assignment))
    }
}

impl LocalSearchProblem for Formula {
    type Solution = Assignment;

    fn score(&self, assignment: &Assignment) -> f64 {
        self.satisfied_count(assignment) as f64
    }

    fn max_score(&self) -> Option<f64> {
        Some(self.clauses.len() as f64)
    }

    fn neighbors(&self, assignment: &Assignment) -> Vec<Assignment> {
        assignment.flip_neighbors()
    }
}
