//! Core trait definitions for the GA engine.
//!
//! [`GeneticOperators`] is the contract between the generic
//! [`GaEngine`](super::GaEngine) and a concrete operator set such as
//! [`TspOperators`](super::TspOperators).

use super::genome::Genome;
use crate::error::Result;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A genome paired with its fitness for the current generation.
///
/// Recomputed every epoch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PopulationStat {
    /// The scored genome (shared with the population, not copied).
    pub genome: Genome,
    /// Fitness of `genome` relative to the population it was scored in.
    /// Higher is better.
    pub fitness: f64,
}

/// The operator set the engine drives: generation, scoring, selection,
/// crossover and mutation.
///
/// Alternative strategies (tournament or stochastic universal sampling,
/// cycle or order-based crossover, inversion or scramble mutation) plug in
/// by implementing this trait; the engine does not change.
///
/// # Data flow
///
/// Before reading fitness for a population the engine calls
/// [`prepare_for_generation`](Self::prepare_for_generation) with it, so
/// implementations may cache population-wide values (the TSP set caches the
/// worst distance). Fitness is only meaningful relative to the last
/// population prepared.
///
/// # Thread Safety
///
/// `Send + Sync` so the engine can score a population in parallel when the
/// `parallel` feature is enabled.
pub trait GeneticOperators: Send + Sync {
    /// Creates a random genome for the initial population.
    fn generate_genome<R: Rng>(&self, rng: &mut R) -> Genome;

    /// Refreshes cached statistics for the population about to be scored.
    fn prepare_for_generation(&mut self, population: &[Genome]);

    /// Scores a genome. Higher is better.
    fn fitness(&self, genome: &Genome) -> f64;

    /// Picks a parent from stats sorted best-first.
    ///
    /// `total_fitness` is the sum of `stats[i].fitness`.
    fn select_genome<R: Rng>(
        &self,
        stats: &[PopulationStat],
        total_fitness: f64,
        rng: &mut R,
    ) -> Genome;

    /// Recombines two parents into one child.
    ///
    /// Fails with `InvalidArgument` if the parents are incompatible.
    fn crossover<R: Rng>(&self, parent_a: &Genome, parent_b: &Genome, rng: &mut R)
        -> Result<Genome>;

    /// Produces a perturbed copy of `genome`.
    fn mutate<R: Rng>(&self, genome: &Genome, rng: &mut R) -> Genome;
}
