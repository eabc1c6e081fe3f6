//! Genetic algorithm for tours.
//!
//! The [`GaEngine`] is generic over a [`GeneticOperators`] set and advances
//! one generation per [`epoch`](GaEngine::epoch). [`TspOperators`] is the
//! operator set for tours over a [`World`](crate::world::World).
//!
//! # Core Traits
//!
//! - [`GeneticOperators`]: generation, fitness, selection, crossover, mutation
//!
//! # Key Types
//!
//! - [`Genome`]: an immutable tour with its cached length
//! - [`GaConfig`]: population size, operator rates, elitism
//! - [`GaEngine`]: the step-driven evolutionary loop
//! - [`EngineState`]: per-generation snapshot for hosts
//!
//! # Submodules
//!
//! - [`operators`]: permutation primitives (PMX crossover, exchange mutation)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod config;
mod engine;
mod genome;
pub mod operators;
mod selection;
mod tsp;
mod types;

pub use config::GaConfig;
pub use engine::{EngineState, GaEngine};
pub use genome::{tour_distance, Genome};
pub use selection::roulette_select;
pub use tsp::TspOperators;
pub use types::{GeneticOperators, PopulationStat};
