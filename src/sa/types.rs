//! Core trait for Simulated Annealing.

use std::marker::PhantomData;

use rand::{Rng, RngCore};

/// Defines a Simulated Annealing problem over a configuration.
///
/// The user implements perturbation and cost evaluation. The SA framework
/// handles temperature management, the acceptance criterion, and cooling.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct TspProblem { distances: Vec<Vec<f64>> }
///
/// impl SaProblem for TspProblem {
///     type Solution = Vec<usize>;
///
///     fn cost(&self, tour: &Vec<usize>) -> f64 {
///         tour.windows(2).map(|w| self.distances[w[0]][w[1]]).sum()
///     }
///
///     fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
///         let mut new = tour.clone();
///         let i = rng.random_range(0..new.len());
///         let j = rng.random_range(0..new.len());
///         new.swap(i, j);
///         new
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem {
    /// The configuration type.
    type Solution: Clone;

    /// Computes the cost of a configuration. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a randomly perturbed copy of `solution`.
    ///
    /// The perturbation should be small (e.g. swapping two units), and must
    /// not modify `solution` itself.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}

/// An [`SaProblem`] built from a cost closure and a perturbation closure.
///
/// The perturbation receives the runner's random number generator as a
/// trait object so that seeded runs stay reproducible.
pub struct FnAnneal<S, C, N> {
    cost: C,
    perturb: N,
    _solution: PhantomData<fn() -> S>,
}

impl<S, C, N> FnAnneal<S, C, N>
where
    S: Clone,
    C: Fn(&S) -> f64,
    N: Fn(&S, &mut dyn RngCore) -> S,
{
    pub fn new(cost: C, perturb: N) -> Self {
        Self {
            cost,
            perturb,
            _solution: PhantomData,
        }
    }
}

impl<S, C, N> SaProblem for FnAnneal<S, C, N>
where
    S: Clone,
    C: Fn(&S) -> f64,
    N: Fn(&S, &mut dyn RngCore) -> S,
{
    type Solution = S;

    fn cost(&self, solution: &S) -> f64 {
        (self.cost)(solution)
    }

    fn neighbor<R: Rng>(&self, solution: &S, rng: &mut R) -> S {
        let rng: &mut dyn RngCore = rng;
        (self.perturb)(solution, rng)
    }
}
