//! Step-driven GA engine.
//!
//! [`GaEngine`] owns the population and advances it one generation per
//! [`epoch`](GaEngine::epoch) call:
//! elitism → roulette selection → crossover → mutation → scoring.
//!
//! The engine never loops on its own. A host calls `epoch` from whatever
//! scheduler it has (timer, render loop, CLI loop) and reads
//! [`state`](GaEngine::state) between calls.

use super::config::GaConfig;
use super::genome::Genome;
use super::types::{GeneticOperators, PopulationStat};
use crate::error::Result;
use crate::random::rng_from_seed;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, instrument, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only snapshot of the engine after an epoch.
///
/// Genomes are shared with the engine (reference-counted), not copied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineState {
    /// Generation number; 0 right after construction.
    pub generation: usize,

    pub best_genome: Genome,
    pub median_genome: Genome,
    pub worst_genome: Genome,

    pub best_fitness: f64,
    pub median_fitness: f64,
    pub worst_fitness: f64,

    /// Highest fitness seen in any generation so far.
    pub all_time_best_fitness: f64,
    /// Genome that scored `all_time_best_fitness`.
    pub all_time_best_genome: Genome,
    /// Generation in which `all_time_best_fitness` was first reached.
    pub all_time_best_generation: usize,
}

/// Generational genetic algorithm driven one epoch at a time.
///
/// Construction validates the configuration, generates the initial
/// population, and scores it as generation 0, so a valid state exists
/// before the first read.
///
/// Not safe for concurrent `epoch` calls; `&mut self` enforces a single
/// caller at a time.
///
/// # Usage
///
/// ```
/// use u_salesman::ga::{GaConfig, GaEngine, TspOperators};
/// use u_salesman::world::World;
///
/// let world = World::from_cities(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]).unwrap();
/// let config = GaConfig::default().with_population_size(20).with_seed(42);
/// let mut engine = GaEngine::new(TspOperators::new(&world), &config).unwrap();
///
/// for _ in 0..30 {
///     engine.epoch().unwrap();
/// }
/// let state = engine.state();
/// assert_eq!(state.generation, 30);
/// assert!(state.best_genome.distance() >= 14.0 - 1e-9);
/// ```
#[derive(Debug)]
pub struct GaEngine<P: GeneticOperators, R: Rng = StdRng> {
    operators: P,
    rng: R,

    population_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    elite_count: usize,
    elite_copies: usize,
    parallel: bool,

    generation: usize,
    population: Vec<Genome>,
    /// Current population scored and sorted best-first.
    stats: Vec<PopulationStat>,
    all_time_best: PopulationStat,
    all_time_best_generation: usize,
}

impl<P: GeneticOperators> GaEngine<P, StdRng> {
    /// Creates an engine seeded from `config.seed` (random if `None`).
    pub fn new(operators: P, config: &GaConfig) -> Result<Self> {
        Self::with_rng(operators, config, rng_from_seed(config.seed))
    }
}

impl<P: GeneticOperators, R: Rng> GaEngine<P, R> {
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// Fails with `InvalidArgument` if the configuration is invalid, in
    /// particular if `population_size < elite_count * elite_copies`. No
    /// engine is produced on failure.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = config.population_size,
            elite_count = config.elite_count,
            elite_copies = config.elite_copies
        )
    )]
    pub fn with_rng(mut operators: P, config: &GaConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let population: Vec<Genome> = (0..config.population_size)
            .map(|_| operators.generate_genome(&mut rng))
            .collect();
        operators.prepare_for_generation(&population);

        // Priming: score the initial population as generation 0.
        let stats = score_population(&operators, &population, config.parallel);
        let all_time_best = stats[0].clone();
        debug!(
            fitness = all_time_best.fitness,
            distance = all_time_best.genome.distance(),
            "engine primed"
        );

        Ok(Self {
            operators,
            rng,
            population_size: config.population_size,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            elite_count: config.elite_count,
            elite_copies: config.elite_copies,
            parallel: config.parallel,
            generation: 0,
            population,
            stats,
            all_time_best,
            all_time_best_generation: 0,
        })
    }

    /// Advances the population by one generation.
    ///
    /// 1. Elites: the `elite_count` best genomes, each `elite_copies` times.
    /// 2. Offspring fill the rest: two roulette-selected parents, crossover
    ///    with probability `crossover_rate` (else the first parent), then
    ///    mutation with probability `mutation_rate`.
    /// 3. The new population is prepared, scored and sorted; the all-time
    ///    best is replaced only on a strict fitness improvement.
    ///
    /// Returns an error only if the operator set rejects its own offspring
    /// (a crossover length mismatch). Population, stats and generation are
    /// left as they were in that case.
    pub fn epoch(&mut self) -> Result<()> {
        let next = self.breed()?;

        self.population = next;
        self.operators.prepare_for_generation(&self.population);
        self.generation += 1;
        self.stats = score_population(&self.operators, &self.population, self.parallel);

        let best = &self.stats[0];
        trace!(
            generation = self.generation,
            best = best.fitness,
            median = self.median().fitness,
            worst = self.worst().fitness,
            "epoch complete"
        );

        if best.fitness > self.all_time_best.fitness {
            debug!(
                generation = self.generation,
                fitness = best.fitness,
                distance = best.genome.distance(),
                "new all-time best"
            );
            self.all_time_best = best.clone();
            self.all_time_best_generation = self.generation;
        }
        Ok(())
    }

    /// Builds the next population from the current sorted stats.
    fn breed(&mut self) -> Result<Vec<Genome>> {
        let mut next: Vec<Genome> = Vec::with_capacity(self.population_size);

        // Elite preservation
        for stat in self.stats.iter().take(self.elite_count) {
            for _ in 0..self.elite_copies {
                next.push(stat.genome.clone());
            }
        }

        let total_fitness: f64 = self.stats.iter().map(|s| s.fitness).sum();

        // Generate offspring
        while next.len() < self.population_size {
            let parent_a = self
                .operators
                .select_genome(&self.stats, total_fitness, &mut self.rng);
            let parent_b = self
                .operators
                .select_genome(&self.stats, total_fitness, &mut self.rng);

            let child = if self.rng.random_range(0.0..1.0) < self.crossover_rate {
                self.operators
                    .crossover(&parent_a, &parent_b, &mut self.rng)?
            } else {
                parent_a
            };

            let child = if self.rng.random_range(0.0..1.0) < self.mutation_rate {
                self.operators.mutate(&child, &mut self.rng)
            } else {
                child
            };

            next.push(child);
        }
        Ok(next)
    }

    /// Snapshot of the current generation and the all-time best.
    pub fn state(&self) -> EngineState {
        let (best, median, worst) = (self.best(), self.median(), self.worst());
        EngineState {
            generation: self.generation,
            best_genome: best.genome.clone(),
            median_genome: median.genome.clone(),
            worst_genome: worst.genome.clone(),
            best_fitness: best.fitness,
            median_fitness: median.fitness,
            worst_fitness: worst.fitness,
            all_time_best_fitness: self.all_time_best.fitness,
            all_time_best_genome: self.all_time_best.genome.clone(),
            all_time_best_generation: self.all_time_best_generation,
        }
    }

    /// Highest-fitness stat of the current generation.
    pub fn best(&self) -> &PopulationStat {
        &self.stats[0]
    }

    /// Stat at index `population_size / 2` of the sorted generation.
    pub fn median(&self) -> &PopulationStat {
        &self.stats[self.population_size / 2]
    }

    /// Lowest-fitness stat of the current generation.
    pub fn worst(&self) -> &PopulationStat {
        &self.stats[self.population_size - 1]
    }

    /// Current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current population, in breeding order (elites first).
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// Current population scored and sorted best-first.
    pub fn stats(&self) -> &[PopulationStat] {
        &self.stats
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn all_time_best_fitness(&self) -> f64 {
        self.all_time_best.fitness
    }

    pub fn all_time_best_genome(&self) -> &Genome {
        &self.all_time_best.genome
    }

    pub fn all_time_best_generation(&self) -> usize {
        self.all_time_best_generation
    }

    /// The operator set driving this engine.
    pub fn operators(&self) -> &P {
        &self.operators
    }
}

/// Scores every genome and sorts best-first.
///
/// The sort is stable, so equal-fitness genomes keep population order.
fn score_population<P: GeneticOperators>(
    operators: &P,
    population: &[Genome],
    parallel: bool,
) -> Vec<PopulationStat> {
    let score = |genome: &Genome| PopulationStat {
        genome: genome.clone(),
        fitness: operators.fitness(genome),
    };

    #[cfg(feature = "parallel")]
    let mut stats: Vec<PopulationStat> = if parallel {
        use rayon::prelude::*;
        population.par_iter().map(score).collect()
    } else {
        population.iter().map(score).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut stats: Vec<PopulationStat> = {
        let _ = parallel;
        population.iter().map(score).collect()
    };

    stats.sort_by(|a, b| {
        b.fitness
            .partial_cmp(&a.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    stats
}

// ============================================================================
// Tests
// ============================================================================
