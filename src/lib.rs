//! Combinatorial search toolkit.
//!
//! Provides generic implementations of classic search algorithms over
//! user-defined problems:
//!
//! - **Graph search**: Breadth-first, depth-first, uniform-cost, greedy
//!   best-first and A* over an implicit state graph, returning the action
//!   path to a goal.
//! - **Hill climbing**: Steepest-ascent local search that stops at the
//!   first local optimum.
//! - **Beam search**: Local search that keeps the best `k` neighbors each
//!   step and follows the leader.
//! - **Variable Neighborhood Search (VNS)**: Beam search whose width grows
//!   after every step that does not reach the maximum score.
//! - **Simulated Annealing (SA)**: Single-solution trajectory optimization
//!   with pluggable cooling schedules.
//!
//! Boolean satisfiability ([`sat`]) is the shared reference problem for the
//! local search family; [`problems`] holds further puzzles for the graph
//! searches and annealing.
//!
//! # Architecture
//!
//! Each algorithm is a stateless runner (`XRunner::run(problem, ..., config)`)
//! over a problem trait, configured by a builder-style config struct. Thin
//! closure wrappers ([`graph::search`], [`climb::hill_climb`],
//! [`beam::beam_search`], [`vns::variable_neighborhood_search`],
//! [`sa::simulated_anneal`]) cover one-off use. Runners emit `tracing`
//! events and never install a subscriber.

pub mod beam;
pub mod climb;
pub mod error;
pub mod graph;
pub mod local;
pub mod problems;
pub mod sa;
pub mod sat;
pub mod vns;

pub use error::{Result, SearchError};
