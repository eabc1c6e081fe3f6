//! Fitness-proportional (roulette wheel) selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::PopulationStat;
use rand::Rng;

/// Roulette wheel selection over stats sorted by fitness, best first.
///
/// Draws `r` uniformly from `[0, total_fitness)` and returns the index of
/// the first stat whose running fitness sum exceeds `r`. If rounding keeps
/// every running sum at or below `r`, the last (lowest-fitness) index is
/// returned.
///
/// When `total_fitness <= 0` (every genome has the same distance, so every
/// fitness is 0) no draw is made and the last index is returned.
///
/// # Complexity
/// O(n) per selection (linear scan)
///
/// # Panics
/// Panics if `stats` is empty.
pub fn roulette_select<R: Rng>(stats: &[PopulationStat], total_fitness: f64, rng: &mut R) -> usize {
    assert!(!stats.is_empty(), "cannot select from empty population");
    let last = stats.len() - 1;

    if total_fitness.is_nan() || total_fitness <= 0.0 {
        return last;
    }

    let wheel_position = rng.random_range(0.0..1.0) * total_fitness;
    let mut cumulative = 0.0;
    for (i, stat) in stats.iter().enumerate() {
        cumulative += stat.fitness;
        if cumulative > wheel_position {
            return i;
        }
    }

    last // floating-point fallback
}
