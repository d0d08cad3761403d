//! Beam search configuration.

use crate::error::{Result, SearchError};

/// Configuration for beam search.
///
/// # Examples
///
/// ```
/// use u_search::beam::BeamConfig;
///
/// let config = BeamConfig::new(3).with_max_steps(1000).with_max_no_improve(25);
/// assert_eq!(config.width, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeamConfig {
    /// Number of top-scoring neighbors retained per step. Must be at least 1.
    pub width: usize,

    /// Maximum number of steps. 0 = no limit.
    pub max_steps: usize,

    /// Maximum consecutive steps without improving the best score before
    /// stopping. 0 = no limit.
    pub max_no_improve: usize,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            width: 3,
            max_steps: 0,
            max_no_improve: 100,
        }
    }
}

impl BeamConfig {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(SearchError::InvalidProblem(
                "beam width must be at least 1".into(),
            ));
        }
        if self.max_steps == 0 && self.max_no_improve == 0 {
            return Err(SearchError::InvalidConfig(
                "beam search needs a step limit or a stagnation limit".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BeamConfig::default();
        assert_eq!(config.width, 3);
        assert_eq!(config.max_steps, 0);
        assert_eq!(config.max_no_improve, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_width_is_invalid_problem() {
        let err = BeamConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, SearchError::InvalidProblem(_)));
    }

    #[test]
    fn test_unbounded_is_invalid() {
        let config = BeamConfig::new(2).with_max_no_improve(0);
        assert!(config.validate().is_err());
        assert!(config.with_max_steps(10).validate().is_ok());
    }
}
