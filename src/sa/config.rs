//! Annealing parameters and temperature schedules.

use crate::error::{Result, SearchError};

/// How the temperature drops from one level to the next.
///
/// # References
///
/// - Lundy, M. & Mees, A. (1986). "Convergence of an annealing algorithm",
///   *Mathematical Programming* 34, 111-124.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// `T ← alpha · T`.
    Geometric {
        /// Multiplier in (0, 1); closer to 1 cools more slowly.
        alpha: f64,
    },

    /// Straight line from the initial to the stopping temperature in
    /// `levels` equal decrements.
    Linear {
        /// Number of temperature levels before the stopping temperature is
        /// reached.
        levels: usize,
    },

    /// `T ← T / (1 + beta · T)`, with a single move per level.
    LundyMees {
        /// Positive cooling parameter. `(T0 - Tmin) / (n · T0 · Tmin)` reaches
        /// `Tmin` after `n` moves.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.99 }
    }
}

impl CoolingSchedule {
    /// Temperature of level `level + 1`, given the temperature `t` of
    /// `level`.
    pub fn next_temperature(self, t: f64, level: usize, config: &SaConfig) -> f64 {
        match self {
            CoolingSchedule::Geometric { alpha } => alpha * t,
            CoolingSchedule::Linear { levels } => {
                let drop = (config.initial_temperature - config.min_temperature) / levels as f64;
                (config.initial_temperature - drop * (level + 1) as f64)
                    .max(config.min_temperature)
            }
            CoolingSchedule::LundyMees { beta } => t / (1.0 + beta * t),
        }
    }

    /// Moves attempted at each temperature level.
    pub fn moves_per_level(self, config: &SaConfig) -> usize {
        match self {
            CoolingSchedule::LundyMees { .. } => 1,
            _ => config.iterations_per_temperature,
        }
    }

    fn validate(self) -> Result<()> {
        match self {
            CoolingSchedule::Geometric { alpha } if !(0.0..1.0).contains(&alpha) || alpha == 0.0 => Err(
                SearchError::InvalidConfig(format!("cooling rate {alpha} is outside (0, 1)")),
            ),
            CoolingSchedule::Linear { levels: 0 } => Err(SearchError::InvalidConfig(
                "linear cooling needs at least one level".into(),
            )),
            CoolingSchedule::LundyMees { beta } if beta.is_nan() || beta <= 0.0 => Err(
                SearchError::InvalidConfig(format!("lundy-mees beta {beta} is not positive")),
            ),
            _ => Ok(()),
        }
    }
}

/// Simulated annealing parameters.
///
/// The defaults make one perturbation per level and cool geometrically by
/// 0.99 from 1000 until the temperature is no longer above 0.1.
///
/// # Examples
///
/// ```
/// use u_search::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_min_temperature(0.5)
///     .with_cooling(CoolingSchedule::Linear { levels: 400 })
///     .with_iterations_per_temperature(10)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    pub initial_temperature: f64,

    /// The run ends once the temperature is no longer above this.
    pub min_temperature: f64,

    pub cooling: CoolingSchedule,

    /// Perturbations per temperature level. Ignored by `LundyMees`.
    pub iterations_per_temperature: usize,

    /// Hard cap on perturbations. 0 = no cap.
    pub max_iterations: usize,

    /// Fixed seed; `None` draws one per run.
    pub seed: Option<u64>,

    /// Record the current cost after every perturbation in
    /// [`SaResult::trajectory`](super::SaResult::trajectory).
    pub record_trajectory: bool,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 0.1,
            cooling: CoolingSchedule::default(),
            iterations_per_temperature: 1,
            max_iterations: 0,
            seed: None,
            record_trajectory: false,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Geometric cooling by `alpha`.
    pub fn with_cooling_rate(self, alpha: f64) -> Self {
        self.with_cooling(CoolingSchedule::Geometric { alpha })
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trajectory(mut self, record: bool) -> Self {
        self.record_trajectory = record;
        self
    }

    /// Checks temperatures, moves per level and the schedule parameter.
    pub fn validate(&self) -> Result<()> {
        let (t0, t_min) = (self.initial_temperature, self.min_temperature);
        let ordered = t_min > 0.0 && t0 > t_min && t0.is_finite();
        if !ordered {
            return Err(SearchError::InvalidConfig(format!(
                "temperatures must satisfy 0 < stop < start, got start {t0}, stop {t_min}"
            )));
        }
        if self.iterations_per_temperature == 0 {
            return Err(SearchError::InvalidConfig(
                "iterations_per_temperature must be at least 1".into(),
            ));
        }
        self.cooling.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SaConfig::default();
        assert_eq!(config.initial_temperature, 1000.0);
        assert_eq!(config.min_temperature, 0.1);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.99 });
        assert_eq!(config.iterations_per_temperature, 1);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_temperature_order() {
        for (t0, t_min) in [(-1.0, 0.1), (10.0, 20.0), (10.0, 10.0), (10.0, 0.0)] {
            let config = SaConfig::default()
                .with_initial_temperature(t0)
                .with_min_temperature(t_min);
            assert!(
                matches!(config.validate(), Err(SearchError::InvalidConfig(_))),
                "accepted start {t0}, stop {t_min}"
            );
        }
    }

    #[test]
    fn test_schedule_parameters() {
        assert!(SaConfig::default().with_cooling_rate(1.0).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(0.0).validate().is_err());
        assert!(SaConfig::default()
            .with_cooling(CoolingSchedule::Linear { levels: 0 })
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_cooling(CoolingSchedule::LundyMees { beta: 0.0 })
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_iterations_per_temperature(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_linear_reaches_stop_after_levels() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(2.0)
            .with_cooling(CoolingSchedule::Linear { levels: 4 });
        let mut t = config.initial_temperature;
        let mut seen = Vec::new();
        for level in 0..4 {
            t = config.cooling.next_temperature(t, level, &config);
            seen.push(t);
        }
        assert_eq!(seen, vec![8.0, 6.0, 4.0, 2.0]);
    }

    #[test]
    fn test_lundy_mees_one_move_per_level() {
        let config = SaConfig::default()
            .with_iterations_per_temperature(25)
            .with_cooling(CoolingSchedule::LundyMees { beta: 0.5 });
        assert_eq!(config.cooling.moves_per_level(&config), 1);
        assert_eq!(config.cooling.next_temperature(2.0, 0, &config), 1.0);

        let geometric = config.clone().with_cooling_rate(0.9);
        assert_eq!(geometric.cooling.moves_per_level(&geometric), 25);
    }
}
