//! Step-driven genetic algorithm for the Traveling Salesman Problem.
//!
//! - **World**: immutable city layouts from a placement policy
//!   (circular or uniformly random).
//! - **GA engine**: generational loop with elitism, roulette wheel
//!   selection, partially mapped crossover and exchange mutation, advanced
//!   one [`epoch`](ga::GaEngine::epoch) at a time.
//! - **Session**: world + engine + the distance history a presentation
//!   layer plots.
//!
//! # Architecture
//!
//! The engine is generic over [`ga::GeneticOperators`]; [`ga::TspOperators`]
//! is the tour-specific implementation. All randomness comes from an
//! injected `rand::Rng`, so runs are reproducible and independent engines
//! share no state. Rendering, charting and scheduling stay with the host.
//!
//! # Features
//!
//! - `serde`: Serialize/Deserialize for configs, genomes and snapshots
//! - `parallel`: rayon-backed population scoring
//! - `wasm`: `wasm-bindgen` exports for browser hosts

pub mod error;
pub mod ga;
pub mod random;
pub mod session;
pub mod world;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{GaError, Result};
