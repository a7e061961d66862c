//! Generation loop.
//!
//! [`Evolver`] drives the run: it is created in the initialized state with
//! a fully random population, advances one generation per [`Evolver::step`]
//! (hybridize, mutate, select) and is consumed by [`Evolver::finish`],
//! which yields the best tour and its cost.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;

use super::config::EvolverConfig;
use super::operators::{hybridize_into, mutate_into, MutationMethod};
use super::population::Population;
use super::selection::select;
use crate::cost::CostMatrix;
use crate::error::ConfigError;
use crate::random::rng_from_option;

/// Result of an evolver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult {
    /// Best tour found: a permutation of `0..n`.
    pub tour: Vec<usize>,

    /// Closed-tour cost of `tour`.
    pub cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost at the end of each generation.
    pub cost_history: Vec<f64>,
}

/// Summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,

    /// Lowest cost in the population after selection.
    pub best_cost: f64,
}

/// Evolves a population of tours over a cost matrix.
///
/// # Usage
///
/// ```
/// use u_tspga::{CostMatrix, Point};
/// use u_tspga::ga::{Evolver, EvolverConfig};
///
/// let points: Vec<Point> = [[0, 0], [10, 0], [10, 10], [0, 10], [5, 5]]
///     .map(Point::from)
///     .to_vec();
/// let costs = CostMatrix::from_points(&points);
/// let config = EvolverConfig::new(5, 20, 5, 2, 50).with_seed(42);
///
/// let result = Evolver::new(&costs, &config).expect("valid config").run();
/// assert_eq!(result.generations, 50);
/// assert!(result.cost <= costs.tour_cost(&[0, 1, 2, 3, 4]));
/// ```
pub struct Evolver<'a, R: Rng = StdRng> {
    costs: &'a CostMatrix,
    population: Population,
    rng: R,
    total_generations: usize,
    generation: usize,
    cost_history: Vec<f64>,
}

impl<'a> Evolver<'a, StdRng> {
    /// Validates `config` and builds an initialized evolver seeded from
    /// `config.seed`.
    pub fn new(costs: &'a CostMatrix, config: &EvolverConfig) -> Result<Self, ConfigError> {
        Self::with_rng(costs, config, rng_from_option(config.seed))
    }
}

impl<'a, R: Rng> Evolver<'a, R> {
    /// Validates `config` and builds an initialized evolver drawing from
    /// `rng`. Every population slot is filled with a random tour.
    pub fn with_rng(
        costs: &'a CostMatrix,
        config: &EvolverConfig,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if costs.size() != config.number_of_vertices {
            return Err(ConfigError::VertexCountMismatch {
                expected: config.number_of_vertices,
                actual: costs.size(),
            });
        }

        let population = Population::random(
            config.number_of_vertices,
            config.population_size,
            config.hybridization_size,
            config.mutation_size,
            &mut rng,
        );
        debug!(
            "evolver initialized: {} vertices, {} slots ({} base, {} hybrid pairs, {} mutations), {} generations",
            config.number_of_vertices,
            population.capacity(),
            config.population_size,
            config.hybridization_size,
            config.mutation_size,
            config.number_of_generations
        );

        Ok(Self {
            costs,
            population,
            rng,
            total_generations: config.number_of_generations,
            generation: 0,
            cost_history: Vec::with_capacity(config.number_of_generations),
        })
    }

    /// Number of generations executed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether every configured generation has run.
    pub fn is_done(&self) -> bool {
        self.generation >= self.total_generations
    }

    /// Best cost recorded by the last generation, if any ran.
    pub fn best_cost(&self) -> Option<f64> {
        self.cost_history.last().copied()
    }

    /// The population buffer.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Runs one generation. Returns `None` once the run is complete.
    pub fn step(&mut self) -> Option<GenerationStats> {
        if self.is_done() {
            return None;
        }

        let n = self.costs.size();
        let base = self.population.base_size();

        for i in 0..self.population.hybrid_count() {
            let first = self.rng.random_range(0..base);
            let second = self.rng.random_range(0..base);
            let from = self.rng.random_range(0..n);
            let to = self.rng.random_range(0..n);

            let (parents, child1, child2) = self.population.hybrid_slots(i);
            hybridize_into(&parents[first], &parents[second], from, to, child1, child2);
        }

        for i in 0..self.population.mutation_count() {
            let parent = self.rng.random_range(0..base);
            let method = MutationMethod::random(&mut self.rng);
            let from = self.rng.random_range(0..n);
            let to = self.rng.random_range(0..n);

            let (parents, child) = self.population.mutation_slot(i);
            mutate_into(&parents[parent], child, method, from, to);
        }

        let scores = select(self.costs, &mut self.population);
        let stats = GenerationStats {
            generation: self.generation,
            best_cost: scores[0],
        };
        trace!("generation {}: best cost {:.3}", stats.generation, stats.best_cost);

        self.cost_history.push(stats.best_cost);
        self.generation += 1;
        Some(stats)
    }

    /// Runs every remaining generation and returns the result.
    pub fn run(self) -> EvolutionResult {
        self.run_with_cancel(None)
    }

    /// Runs the remaining generations with an optional cancellation token.
    ///
    /// The flag is checked between generations; when it is set the run
    /// stops and the best tour found so far is returned.
    pub fn run_with_cancel(mut self, cancel: Option<Arc<AtomicBool>>) -> EvolutionResult {
        let mut cancelled = false;
        while !self.is_done() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            self.step();
        }

        let mut result = self.finish();
        result.cancelled = cancelled;
        if cancelled {
            info!(
                "evolution cancelled after {} generations, best cost {:.3}",
                result.generations, result.cost
            );
        }
        result
    }

    /// Consumes the evolver and returns the tour in slot 0 with its cost.
    ///
    /// If no generation has run yet, the initial population is scored first.
    pub fn finish(mut self) -> EvolutionResult {
        let cost = match self.best_cost() {
            Some(cost) => cost,
            None => select(self.costs, &mut self.population)[0],
        };
        let tour = self.population.best().to_vec();
        info!(
            "evolution finished: {} generations, best cost {:.3}",
            self.generation, cost
        );

        EvolutionResult {
            tour,
            cost,
            generations: self.generation,
            cancelled: false,
            cost_history: self.cost_history,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
