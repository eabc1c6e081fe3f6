//! The TSP operator set.

use super::genome::Genome;
use super::operators::{exchange_mutation, pmx_crossover, random_permutation};
use super::selection::roulette_select;
use super::types::{GeneticOperators, PopulationStat};
use crate::error::{ensure, Result};
use crate::world::{City, World};
use rand::Rng;
use std::sync::Arc;

/// Operator set for tours over a fixed list of cities.
///
/// - generation: uniformly random permutation (Fisher–Yates)
/// - fitness: `worst_distance - distance`, where `worst_distance` is the
///   longest tour of the last prepared population
/// - selection: roulette wheel
/// - crossover: partially mapped crossover (PMX)
/// - mutation: exchange of two distinct positions
///
/// # Examples
///
/// ```
/// use u_salesman::ga::{GeneticOperators, TspOperators};
/// use u_salesman::random::create_rng;
/// use u_salesman::world::World;
///
/// let world = World::from_cities(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).unwrap();
/// let mut ops = TspOperators::new(&world);
/// let mut rng = create_rng(42);
///
/// let population: Vec<_> = (0..4).map(|_| ops.generate_genome(&mut rng)).collect();
/// ops.prepare_for_generation(&population);
/// assert!(population.iter().all(|g| ops.fitness(g) >= 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct TspOperators {
    cities: Arc<[City]>,
    worst_distance: f64,
}

impl TspOperators {
    /// Creates an operator set for the cities of `world`.
    pub fn new(world: &World) -> Self {
        Self::from_cities(world.shared_cities())
    }

    /// Creates an operator set over a shared city list.
    pub fn from_cities(cities: Arc<[City]>) -> Self {
        Self {
            cities,
            // No population prepared yet.
            worst_distance: f64::INFINITY,
        }
    }

    /// The cities tours are measured over.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Longest tour in the last prepared population.
    pub fn worst_distance(&self) -> f64 {
        self.worst_distance
    }

    /// Wraps a sequence produced by an operator into a genome.
    ///
    /// Operators never change the sequence length.
    fn wrap(&self, sequence: Vec<usize>) -> Genome {
        Genome::from_sequence(&self.cities, sequence)
    }
}

impl GeneticOperators for TspOperators {
    fn generate_genome<R: Rng>(&self, rng: &mut R) -> Genome {
        self.wrap(random_permutation(self.cities.len(), rng))
    }

    fn prepare_for_generation(&mut self, population: &[Genome]) {
        self.worst_distance = population
            .iter()
            .map(Genome::distance)
            .fold(f64::NEG_INFINITY, f64::max);
    }

    fn fitness(&self, genome: &Genome) -> f64 {
        self.worst_distance - genome.distance()
    }

    fn select_genome<R: Rng>(
        &self,
        stats: &[PopulationStat],
        total_fitness: f64,
        rng: &mut R,
    ) -> Genome {
        stats[roulette_select(stats, total_fitness, rng)].genome.clone()
    }

    fn crossover<R: Rng>(
        &self,
        parent_a: &Genome,
        parent_b: &Genome,
        rng: &mut R,
    ) -> Result<Genome> {
        ensure(parent_a.len() == parent_b.len(), "parent_b", || {
            format!(
                "lengths of both parent sequences must match, got {} and {}",
                parent_a.len(),
                parent_b.len()
            )
        })?;
        // A single permutation exists below two cities.
        if parent_a.len() < 2 {
            return Ok(parent_a.clone());
        }
        let child = pmx_crossover(parent_a.sequence(), parent_b.sequence(), rng);
        Genome::new(&self.cities, child)
    }

    fn mutate<R: Rng>(&self, genome: &Genome, rng: &mut R) -> Genome {
        if genome.len() < 2 {
            return genome.clone();
        }
        let mut sequence = genome.sequence().to_vec();
        exchange_mutation(&mut sequence, rng);
        self.wrap(sequence)
    }
}
