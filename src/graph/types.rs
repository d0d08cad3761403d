//! Core trait for systematic graph search.

use std::hash::Hash;
use std::marker::PhantomData;

/// One transition out of a state: the action taken, the resulting state,
/// and the (non-negative) cost of the step.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    /// Descriptor of the transition, used only for path reporting.
    pub action: A,
    /// The state reached.
    pub state: S,
    /// Step cost. Must be non-negative for UCS and A*.
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    pub fn new(action: A, state: S, cost: f64) -> Self {
        Self {
            action,
            state,
            cost,
        }
    }

    /// A unit-cost transition.
    pub fn unit(action: A, state: S) -> Self {
        Self::new(action, state, 1.0)
    }
}

impl<S, A> From<(A, S, f64)> for Successor<S, A> {
    fn from((action, state, cost): (A, S, f64)) -> Self {
        Self::new(action, state, cost)
    }
}

/// Defines a state-space search problem.
///
/// The user implements successor generation and the goal test. The graph
/// search framework handles frontier ordering, duplicate suppression and
/// path reconstruction.
///
/// States are values: a transition must build a new state rather than
/// mutate an existing one. Equality and hashing must be structural, since
/// they key the explored-set and best-cost table.
///
/// # Examples
///
/// ```ignore
/// struct Line { len: u32 }
///
/// impl GraphProblem for Line {
///     type State = u32;
///     type Action = &'static str;
///
///     fn initial_state(&self) -> u32 { 0 }
///     fn is_goal(&self, &s: &u32) -> bool { s == self.len }
///     fn successors(&self, &s: &u32) -> Vec<Successor<u32, &'static str>> {
///         if s < self.len { vec![Successor::unit("step", s + 1)] } else { vec![] }
///     }
/// }
/// ```
pub trait GraphProblem {
    /// The state representation type.
    type State: Clone + Eq + Hash;

    /// The action descriptor type.
    type Action: Clone;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerates the legal transitions out of `state`.
    ///
    /// Enumeration order matters: it determines tie-breaking and therefore
    /// which of several equally good paths is returned. Illegal moves are
    /// simply left out.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Estimated remaining cost from `state` to a goal. Lower is closer.
    ///
    /// Only consulted by [`Strategy::Greedy`](super::Strategy::Greedy) and
    /// [`Strategy::AStar`](super::Strategy::AStar). For A* to return an
    /// optimal path the estimate must be admissible (never exceed the true
    /// remaining cost). This is not checked.
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}

/// A [`GraphProblem`] assembled from closures.
///
/// Used by [`search`](super::search) and
/// [`search_with_heuristic`](super::search_with_heuristic).
pub struct FnProblem<S, A, G, F, H> {
    start: S,
    is_goal: G,
    successors: F,
    heuristic: Option<H>,
    _action: PhantomData<fn() -> A>,
}

impl<S, A, G, F, H> FnProblem<S, A, G, F, H> {
    pub fn new(start: S, is_goal: G, successors: F, heuristic: Option<H>) -> Self {
        Self {
            start,
            is_goal,
            successors,
            heuristic,
            _action: PhantomData,
        }
    }
}

impl<S, A, G, F, H> GraphProblem for FnProblem<S, A, G, F, H>
where
    S: Clone + Eq + Hash,
    A: Clone,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<Successor<S, A>>,
    H: Fn(&S) -> f64,
{
    type State = S;
    type Action = A;

    fn initial_state(&self) -> S {
        self.start.clone()
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.is_goal)(state)
    }

    fn successors(&self, state: &S) -> Vec<Successor<S, A>> {
        (self.successors)(state)
    }

    fn heuristic(&self, state: &S) -> f64 {
        self.heuristic.as_ref().map_or(0.0, |h| h(state))
    }
}
