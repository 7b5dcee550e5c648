//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{invalid, Result};

/// Configuration for the target-sum Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_stepopt::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.elitism_count, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_stepopt::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_elitism_count(4)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of genomes in every generation. Must be at least 1.
    pub population_size: usize,

    /// Generation cap. The engine never stops on its own; the driver
    /// compares the generation counter against this value.
    pub max_generations: usize,

    /// Per-bit flip probability applied to every offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of best genomes copied unchanged into the next generation.
    ///
    /// Must be strictly less than `population_size`, otherwise no offspring
    /// would ever be produced.
    pub elitism_count: usize,

    /// Number of distinct competitors drawn per tournament.
    pub tournament_size: usize,

    /// Probability that a bit of an initial genome is `true` (0.0–1.0).
    ///
    /// Biasing toward inclusion speeds convergence toward high-sum targets.
    pub inclusion_bias: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 1000,
            mutation_rate: 0.05,
            elitism_count: 2,
            tournament_size: 3,
            inclusion_bias: 0.7,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of elites carried forward.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the inclusion bias of initial genomes.
    pub fn with_inclusion_bias(mut self, bias: f64) -> Self {
        self.inclusion_bias = bias;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(invalid("max_generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.elitism_count >= self.population_size {
            return Err(invalid(format!(
                "elitism_count ({}) must be less than population_size ({})",
                self.elitism_count, self.population_size
            )));
        }
        if self.tournament_size == 0 {
            return Err(invalid("tournament_size must be at least 1"));
        }
        if self.tournament_size > self.population_size {
            return Err(invalid(format!(
                "tournament_size ({}) exceeds population_size ({})",
                self.tournament_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.inclusion_bias) {
            return Err(invalid(format!(
                "inclusion_bias must be in [0, 1], got {}",
                self.inclusion_bias
            )));
        }
        Ok(())
    }
}
