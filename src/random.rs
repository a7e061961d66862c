//! Seeded random number generation.
//!
//! Every randomised routine in this crate takes an explicit `&mut R: Rng`
//! so that a run is reproducible from its seed alone.

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use rand::Rng;

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from `seed`, or from a fresh random seed when `None`.
pub fn rng_from_option(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
