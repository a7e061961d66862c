//! Genetic algorithm for the Euclidean travelling salesman problem.
//!
//! Given `n` points in the plane, finds a low-cost closed visiting order:
//!
//! - **Cost model** ([`CostMatrix`]): pairwise Euclidean distances with an
//!   infinite self-cost.
//! - **Genetic algorithm** ([`ga`]): a fixed-capacity population of
//!   permutations evolved by reciprocal window hybridization, three
//!   mutations (swap, reverse, rotate) and truncation selection.
//! - **Greedy baseline** ([`greedy_tour`]): nearest-neighbor construction
//!   for comparison.
//! - **Vertex sources** ([`vertices`]): random grid points and whitespace
//!   separated text files.
//!
//! # Example
//!
//! ```
//! use u_tspga::ga::{Evolver, EvolverConfig};
//! use u_tspga::random::create_rng;
//! use u_tspga::vertices::RandomGrid;
//! use u_tspga::{greedy_tour, CostMatrix};
//!
//! let points = RandomGrid::default().generate(12, &mut create_rng(1));
//! let costs = CostMatrix::from_points(&points);
//!
//! let config = EvolverConfig::new(12, 40, 15, 5, 100).with_seed(42);
//! let ga = Evolver::new(&costs, &config)?.run();
//! let greedy = greedy_tour(&points, 0)?;
//!
//! assert_eq!(ga.tour.len(), 12);
//! assert_eq!(greedy.tour.len(), 12);
//! # Ok::<(), u_tspga::Error>(())
//! ```
//!
//! Randomness always comes from an explicit seeded generator, so a run is
//! reproducible from its seed. The crate logs through the `log` facade and
//! never installs a logger.

pub mod cost;
pub mod error;
pub mod ga;
pub mod geometry;
pub mod greedy;
pub mod random;
pub mod vertices;

pub use cost::{CostMatrix, SELF_COST};
pub use error::{ConfigError, Error, Result};
pub use geometry::Point;
pub use greedy::{greedy_best_start, greedy_tour, GreedyResult};
