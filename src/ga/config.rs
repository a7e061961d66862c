//! Evolver configuration.
//!
//! [`EvolverConfig`] holds the sizes that shape the population buffer and
//! the length of the run.

use crate::error::ConfigError;

/// Configuration for the evolver.
///
/// Every size is required; there are no defaults. The population buffer
/// holds `population_size + 2 * hybridization_size + mutation_size` tours.
///
/// # Builder Pattern
///
/// ```
/// use u_tspga::ga::EvolverConfig;
///
/// let config = EvolverConfig::new(10, 500, 150, 20, 2000).with_seed(42);
/// assert_eq!(config.capacity(), 500 + 300 + 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolverConfig {
    /// Number of vertices every tour visits.
    pub number_of_vertices: usize,

    /// Number of surviving tours carried into each generation.
    pub population_size: usize,

    /// Number of hybridizations per generation; each yields two children.
    pub hybridization_size: usize,

    /// Number of mutations per generation; each yields one child.
    pub mutation_size: usize,

    /// Number of generations to run.
    pub number_of_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl EvolverConfig {
    pub fn new(
        number_of_vertices: usize,
        population_size: usize,
        hybridization_size: usize,
        mutation_size: usize,
        number_of_generations: usize,
    ) -> Self {
        Self {
            number_of_vertices,
            population_size,
            hybridization_size,
            mutation_size,
            number_of_generations,
            seed: None,
        }
    }

    /// Sets the number of vertices.
    pub fn with_number_of_vertices(mut self, n: usize) -> Self {
        self.number_of_vertices = n;
        self
    }

    /// Sets the surviving population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of hybridizations per generation.
    pub fn with_hybridization_size(mut self, n: usize) -> Self {
        self.hybridization_size = n;
        self
    }

    /// Sets the number of mutations per generation.
    pub fn with_mutation_size(mut self, n: usize) -> Self {
        self.mutation_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_number_of_generations(mut self, n: usize) -> Self {
        self.number_of_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of population slots.
    pub fn capacity(&self) -> usize {
        self.population_size + 2 * self.hybridization_size + self.mutation_size
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.number_of_vertices < 2 {
            return Err(ConfigError::TooFewVertices(self.number_of_vertices));
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.number_of_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let config = EvolverConfig::new(5, 20, 5, 2, 50);
        assert_eq!(config.number_of_vertices, 5);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.hybridization_size, 5);
        assert_eq!(config.mutation_size, 2);
        assert_eq!(config.number_of_generations, 50);
        assert!(config.seed.is_none());
        assert_eq!(config.capacity(), 32);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolverConfig::new(5, 20, 5, 2, 50)
            .with_number_of_vertices(8)
            .with_population_size(30)
            .with_hybridization_size(0)
            .with_mutation_size(7)
            .with_number_of_generations(10)
            .with_seed(42);

        assert_eq!(config.number_of_vertices, 8);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.hybridization_size, 0);
        assert_eq!(config.mutation_size, 7);
        assert_eq!(config.number_of_generations, 10);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.capacity(), 37);
    }

    #[test]
    fn test_validate_ok() {
        assert!(EvolverConfig::new(2, 2, 0, 0, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_too_few_vertices() {
        let config = EvolverConfig::new(1, 20, 5, 2, 50);
        assert_eq!(config.validate(), Err(ConfigError::TooFewVertices(1)));
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = EvolverConfig::new(5, 1, 5, 2, 50);
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = EvolverConfig::new(5, 20, 5, 2, 0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }
}
