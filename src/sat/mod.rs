//! Boolean satisfaction model.
//!
//! A [`Formula`] in conjunctive normal form scores an [`Assignment`] by the
//! number of clauses it satisfies. `Formula` implements
//! [`LocalSearchProblem`](crate::local::LocalSearchProblem) with
//! single-variable flips as the neighborhood, so it plugs directly into the
//! hill-climbing, beam and VNS runners.

mod assignment;
mod formula;

pub use assignment::{Assignment, Literal};
pub use formula::{Clause, Formula};
