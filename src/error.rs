//! Error types.
//!
//! Configuration problems are reported before any evolution starts.
//! Operators themselves are total over valid permutations and never fail.

use thiserror::Error as ThisError;

/// Invalid evolver configuration.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ConfigError {
    #[error("number_of_vertices must be at least 2, got {0}")]
    TooFewVertices(usize),
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("number_of_generations must be at least 1")]
    ZeroGenerations,
    #[error("config expects {expected} vertices but the cost matrix has {actual}")]
    VertexCountMismatch { expected: usize, actual: usize },
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid vertex data: {0}")]
    InvalidVertexData(String),
    #[error("no points given")]
    EmptyInput,
    #[error("start index {start} out of range for {len} points")]
    StartOutOfRange { start: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_vertex_data(message: impl Into<String>) -> Self {
        Self::InvalidVertexData(message.into())
    }
}
