//! Random source helpers.
//!
//! Every stochastic operation in the crate takes an explicit `R: Rng`, so
//! callers decide whether randomness is seeded (tests, replays) or fresh.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded, reproducible random number generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from the given seed, or from a fresh random seed.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or_else(rand::random))
}
