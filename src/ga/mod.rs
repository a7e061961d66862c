//! Genetic algorithm for the travelling salesman problem.
//!
//! A tour is a permutation of vertex indices. Each generation the evolver
//! fills the offspring slots of a fixed-size [`Population`] by hybridizing
//! random parent pairs and mutating random parents, then scores the whole
//! buffer and keeps the cheapest tours as the next parents (truncation
//! selection).
//!
//! # Key Types
//!
//! - [`EvolverConfig`]: population sizes, generation count, seed
//! - [`Evolver`]: executes the generation loop
//! - [`EvolutionResult`]: best tour, its cost and run statistics
//!
//! # Submodules
//!
//! - [`operators`]: random tours, hybridization and the three mutations
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;

pub use config::EvolverConfig;
pub use operators::MutationMethod;
pub use population::Population;
pub use runner::{EvolutionResult, Evolver, GenerationStats};
pub use selection::{evaluate, select};
