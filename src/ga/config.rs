//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{ensure, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the genetic algorithm engine.
///
/// # Defaults
///
/// ```
/// use u_salesman::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elite_count, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_salesman::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.2)
///     .with_elites(3, 2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of genomes in every generation. Must be positive.
    pub population_size: usize,

    /// Probability of recombining a selected pair (0.0–1.0).
    ///
    /// When crossover is skipped the first parent passes through unchanged.
    pub crossover_rate: f64,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// How many of the best genomes are carried into the next generation.
    pub elite_count: usize,

    /// How many times each elite is repeated in the next generation.
    ///
    /// `elite_count * elite_copies` must not exceed `population_size`.
    pub elite_copies: usize,

    /// Whether to score populations in parallel.
    ///
    /// Only honored when the crate is built with the `parallel` feature.
    /// Scoring draws no randomness, so results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_rate: 0.75,
            mutation_rate: 0.1,
            elite_count: 2,
            elite_copies: 1,
            parallel: false,
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

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets elite count and copies per elite.
    pub fn with_elites(mut self, count: usize, copies: usize) -> Self {
        self.elite_count = count;
        self.elite_copies = copies;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total slots taken by elites each generation.
    ///
    /// Saturates on overflow, which `validate` then rejects.
    pub fn total_elites(&self) -> usize {
        self.elite_count.saturating_mul(self.elite_copies)
    }

    /// Validates the configuration.
    ///
    /// Fails with `InvalidArgument` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        ensure(self.population_size > 0, "population_size", || {
            "must be at least 1, got 0"
        })?;
        ensure(
            (0.0..=1.0).contains(&self.crossover_rate),
            "crossover_rate",
            || format!("must be in [0, 1], got {}", self.crossover_rate),
        )?;
        ensure(
            (0.0..=1.0).contains(&self.mutation_rate),
            "mutation_rate",
            || format!("must be in [0, 1], got {}", self.mutation_rate),
        )?;
        ensure(
            self.elite_count.checked_mul(self.elite_copies).is_some()
                && self.population_size >= self.total_elites(),
            "population_size",
            || {
                format!(
                    "the following must hold true: population_size >= elite_count * elite_copies, \
                     got {} < {} * {}",
                    self.population_size, self.elite_count, self.elite_copies
                )
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaError;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert!((config.crossover_rate - 0.75).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.elite_count, 2);
        assert_eq!(config.elite_copies, 1);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.05)
            .with_elites(4, 3)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.elite_count, 4);
        assert_eq!(config.elite_copies, 3);
        assert_eq!(config.total_elites(), 12);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0).with_elites(0, 0);
        assert!(matches!(
            config.validate(),
            Err(GaError::InvalidArgument {
                name: "population_size",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_elites_exceed_population() {
        let config = GaConfig::default().with_population_size(10).with_elites(4, 3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elites_fill_population_exactly() {
        let config = GaConfig::default().with_population_size(12).with_elites(4, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_elite_overflow() {
        let config = GaConfig::default().with_elites(usize::MAX, 2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_rate() {
        let config = GaConfig {
            mutation_rate: f64::NAN,
            ..GaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GaError::InvalidArgument {
                name: "mutation_rate",
                ..
            })
        ));
    }
}
