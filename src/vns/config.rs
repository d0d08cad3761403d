//! Variable Neighborhood Search configuration.

use crate::error::{Result, SearchError};

/// Configuration parameters for Variable Neighborhood Search.
///
/// The neighborhood width grows by one after every step that fails to reach
/// the maximum score and has no built-in bound, so the step limit is
/// required.
///
/// # Examples
///
/// ```
/// use u_search::vns::VnsConfig;
///
/// let config = VnsConfig::new(1000)
///     .with_initial_width(2)
///     .with_max_width(10);
/// assert_eq!(config.max_steps, 1000);
/// assert_eq!(config.initial_width, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsConfig {
    /// Maximum number of steps. Must be at least 1.
    pub max_steps: usize,
    /// Width of the first step's retained neighborhood.
    pub initial_width: usize,
    /// Upper bound on the width. 0 = unbounded.
    pub max_width: usize,
}

impl VnsConfig {
    /// Creates a configuration with the given step limit, starting at
    /// width 1 with unbounded growth.
    pub fn new(max_steps: usize) -> Self {
        Self {
            max_steps,
            initial_width: 1,
            max_width: 0,
        }
    }

    /// Sets the maximum number of steps.
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    /// Sets the initial neighborhood width.
    pub fn with_initial_width(mut self, width: usize) -> Self {
        self.initial_width = width;
        self
    }

    /// Caps the neighborhood width.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.initial_width == 0 {
            return Err(SearchError::InvalidProblem(
                "neighborhood width must be at least 1".into(),
            ));
        }
        if self.max_steps == 0 {
            return Err(SearchError::InvalidConfig(
                "max_steps must be at least 1".into(),
            ));
        }
        if self.max_width > 0 && self.max_width < self.initial_width {
            return Err(SearchError::InvalidConfig(format!(
                "max_width {} is below initial_width {}",
                self.max_width, self.initial_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let config = VnsConfig::new(50);
        assert_eq!(config.max_steps, 50);
        assert_eq!(config.initial_width, 1);
        assert_eq!(config.max_width, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = VnsConfig::new(1)
            .with_max_steps(200)
            .with_initial_width(3)
            .with_max_width(8);
        assert_eq!(config.max_steps, 200);
        assert_eq!(config.initial_width, 3);
        assert_eq!(config.max_width, 8);
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            VnsConfig::new(10).with_initial_width(0).validate(),
            Err(SearchError::InvalidProblem(_))
        ));
        assert!(VnsConfig::new(0).validate().is_err());
        assert!(VnsConfig::new(10)
            .with_initial_width(4)
            .with_max_width(2)
            .validate()
            .is_err());
    }
}
