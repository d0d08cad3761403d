//! Hill-climbing configuration.

/// Configuration for steepest-ascent hill climbing.
///
/// # Examples
///
/// ```
/// use u_search::climb::ClimbConfig;
///
/// let config = ClimbConfig::default().with_max_moves(50);
/// assert_eq!(config.max_moves, 50);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbConfig {
    /// Maximum number of accepted moves. 0 = no limit.
    ///
    /// Every move strictly improves the score, so the climb always ends on
    /// a finite neighborhood graph; the limit only bounds runtime.
    pub max_moves: usize,
}

impl ClimbConfig {
    pub fn with_max_moves(mut self, n: usize) -> Self {
        self.max_moves = n;
        self
    }
}
