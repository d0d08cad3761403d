//! Error types shared by all search drivers.
//!
//! Only whole-search outcomes cross the module boundary. An exhausted
//! frontier is *not* an error: it is reported through
//! [`GraphResult::found`](crate::graph::GraphResult::found).

use thiserror::Error;

/// Errors raised before a search begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A structural precondition of the problem is violated
    /// (e.g. a 3-literal clause over fewer than 3 variables, or a beam
    /// width of zero).
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// A runner configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
