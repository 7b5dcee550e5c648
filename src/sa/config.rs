//! SA configuration.

use crate::error::{invalid, Result};

/// Configuration for the tour annealer.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, applied once per
/// step whether or not the candidate was accepted.
///
/// # Examples
///
/// ```
/// use u_stepopt::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Drivers stop once the temperature falls to or below this value.
    pub min_temperature: f64,

    /// Hard step budget for drivers. 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_rate: 0.995,
            min_temperature: 1.0,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
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

    /// Number of steps until the temperature first drops to or below
    /// `min_temperature`: `ceil(ln(min / initial) / ln(cooling_rate))`.
    ///
    /// Assumes a validated configuration.
    pub fn cooling_steps(&self) -> usize {
        let steps = (self.min_temperature / self.initial_temperature).ln() / self.cooling_rate.ln();
        steps.ceil().max(0.0) as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(invalid("initial_temperature must be positive and finite"));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(invalid(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if !(self.min_temperature > 0.0) {
            return Err(invalid("min_temperature must be positive"));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(invalid("min_temperature must be less than initial_temperature"));
        }
        Ok(())
    }
}
