//! Host-facing session: one world, one engine, and the bookkeeping a
//! presentation layer plots.
//!
//! A host (timer loop, UI, WASM shell) typically:
//!
//! 1. builds a [`Session`] from a [`SessionConfig`],
//! 2. calls [`step`](Session::step) on every tick,
//! 3. reads [`read_state`](Session::read_state) and
//!    [`history`](Session::history) to render.
//!
//! Engine fitness is relative to the worst tour of the current generation,
//! so fitness values from different generations are not comparable. The
//! session therefore also tracks the shortest tour ever seen by distance.

use crate::error::Result;
use crate::ga::{EngineState, GaConfig, GaEngine, Genome, TspOperators};
use crate::random::rng_from_seed;
use crate::world::{World, WorldConfig};
use tracing::{debug, info, instrument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to (re)build a session.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub world: WorldConfig,
    pub ga: GaConfig,
}

/// Tour lengths of one generation's best, median and worst genomes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationStats {
    pub generation: usize,
    pub best_distance: f64,
    pub median_distance: f64,
    pub worst_distance: f64,
}

impl GenerationStats {
    fn from_state(state: &EngineState) -> Self {
        Self {
            generation: state.generation,
            best_distance: state.best_genome.distance(),
            median_distance: state.median_genome.distance(),
            worst_distance: state.worst_genome.distance(),
        }
    }
}

/// A world and the engine evolving tours over it.
///
/// # Examples
///
/// ```
/// use u_salesman::session::{Session, SessionConfig};
/// use u_salesman::world::{CityPlacement, PlacementBounds, WorldConfig};
/// use u_salesman::ga::GaConfig;
///
/// let config = SessionConfig {
///     world: WorldConfig::default()
///         .with_city_count(10)
///         .with_placement(CityPlacement::Circular)
///         .with_bounds(PlacementBounds::for_canvas(400.0, 400.0)),
///     ga: GaConfig::default().with_population_size(30).with_seed(1),
/// };
/// let mut session = Session::new(&config).unwrap();
/// session.run(20).unwrap();
/// assert_eq!(session.read_state().generation, 20);
/// assert_eq!(session.history().len(), 21);
/// ```
#[derive(Debug)]
pub struct Session {
    world: World,
    engine: GaEngine<TspOperators>,
    best_tour: Genome,
    best_tour_generation: usize,
    history: Vec<GenerationStats>,
}

impl Session {
    /// Builds the world, then the engine, from one seeded random source.
    ///
    /// The world draws first and the engine takes over the generator, so a
    /// seeded config reproduces both cities and evolution.
    #[instrument(level = "debug", skip_all, fields(city_count = config.world.city_count))]
    pub fn new(config: &SessionConfig) -> Result<Self> {
        config.world.validate()?;
        config.ga.validate()?;

        let mut rng = rng_from_seed(config.ga.seed);
        let world = World::from_config(&config.world, &mut rng)?;
        let engine = GaEngine::with_rng(TspOperators::new(&world), &config.ga, rng)?;

        let state = engine.state();
        info!(
            cities = world.city_count(),
            population = engine.population_size(),
            best_distance = state.best_genome.distance(),
            "session initialized"
        );

        Ok(Self {
            world,
            best_tour: state.best_genome.clone(),
            best_tour_generation: state.generation,
            history: vec![GenerationStats::from_state(&state)],
            engine,
        })
    }

    /// Replaces world and engine with freshly built ones.
    ///
    /// On error the current session is kept as it was.
    pub fn reinit(&mut self, config: &SessionConfig) -> Result<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Runs one epoch and returns the resulting snapshot.
    pub fn step(&mut self) -> Result<EngineState> {
        self.engine.epoch()?;
        let state = self.engine.state();

        let distance = state.best_genome.distance();
        if distance < self.best_tour.distance() {
            debug!(
                generation = state.generation,
                distance, "new shortest tour"
            );
            self.best_tour = state.best_genome.clone();
            self.best_tour_generation = state.generation;
        }
        self.history.push(GenerationStats::from_state(&state));
        Ok(state)
    }

    /// Runs `epochs` epochs back to back.
    pub fn run(&mut self, epochs: usize) -> Result<()> {
        for _ in 0..epochs {
            self.step()?;
        }
        Ok(())
    }

    /// Snapshot of the engine after the latest epoch.
    pub fn read_state(&self) -> EngineState {
        self.engine.state()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn engine(&self) -> &GaEngine<TspOperators> {
        &self.engine
    }

    /// Shortest tour seen in any generation.
    pub fn best_tour(&self) -> &Genome {
        &self.best_tour
    }

    /// Length of [`best_tour`](Self::best_tour).
    pub fn best_distance(&self) -> f64 {
        self.best_tour.distance()
    }

    /// Generation in which the shortest tour was first seen.
    pub fn best_distance_generation(&self) -> usize {
        self.best_tour_generation
    }

    /// Per-generation tour lengths, starting with generation 0.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaError;
    use crate::world::{CityPlacement, PlacementBounds};

    fn config(placement: CityPlacement, cities: usize, seed: u64) -> SessionConfig {
        SessionConfig {
            world: WorldConfig::default()
                .with_city_count(cities)
                .with_placement(placement)
                .with_bounds(PlacementBounds::for_canvas(600.0, 400.0)),
            ga: GaConfig::default()
                .with_population_size(40)
                .with_mutation_rate(0.2)
                .with_seed(seed),
        }
    }

    #[test]
    fn test_new_session_state() {
        let session = Session::new(&config(CityPlacement::Random, 12, 3)).unwrap();
        assert_eq!(session.world().city_count(), 12);
        assert_eq!(session.read_state().generation, 0);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.best_distance_generation(), 0);
        assert_eq!(
            session.best_distance(),
            session.read_state().best_genome.distance()
        );
    }

    #[test]
    fn test_step_records_history() {
        let mut session = Session::new(&config(CityPlacement::Circular, 10, 4)).unwrap();
        for expected in 1..=15 {
            let state = session.step().unwrap();
            assert_eq!(state.generation, expected);
        }
        let history = session.history();
        assert_eq!(history.len(), 16);
        for (i, h) in history.iter().enumerate() {
            assert_eq!(h.generation, i);
            assert!(h.best_distance <= h.median_distance);
            assert!(h.median_distance <= h.worst_distance);
        }
    }

    #[test]
    fn test_best_distance_tracks_minimum() {
        let mut session = Session::new(&config(CityPlacement::Random, 15, 8)).unwrap();
        session.run(80).unwrap();
        let min = session
            .history()
            .iter()
            .map(|h| h.best_distance)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(session.best_distance(), min);
        let first_hit = session
            .history()
            .iter()
            .find(|h| h.best_distance == min)
            .map(|h| h.generation)
            .unwrap();
        assert_eq!(session.best_distance_generation(), first_hit);
    }

    #[test]
    fn test_seeded_sessions_reproduce() {
        let cfg = config(CityPlacement::Random, 9, 42);
        let mut a = Session::new(&cfg).unwrap();
        let mut b = Session::new(&cfg).unwrap();
        assert_eq!(a.world(), b.world());
        a.run(10).unwrap();
        b.run(10).unwrap();
        assert_eq!(a.read_state(), b.read_state());
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_reinit_replaces_everything() {
        let mut session = Session::new(&config(CityPlacement::Random, 9, 1)).unwrap();
        session.run(5).unwrap();
        session
            .reinit(&config(CityPlacement::Circular, 6, 2))
            .unwrap();
        assert_eq!(session.world().city_count(), 6);
        assert_eq!(session.read_state().generation, 0);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_failed_reinit_keeps_session() {
        let mut session = Session::new(&config(CityPlacement::Random, 9, 1)).unwrap();
        session.run(3).unwrap();

        let mut bad = config(CityPlacement::Random, 9, 1);
        bad.ga = bad.ga.with_population_size(2).with_elites(2, 2);
        assert!(session.reinit(&bad).is_err());

        assert_eq!(session.world().city_count(), 9);
        assert_eq!(session.read_state().generation, 3);
    }

    #[test]
    fn test_missing_bounds() {
        let mut cfg = config(CityPlacement::Circular, 5, 0);
        cfg.world.bounds = None;
        assert_eq!(
            Session::new(&cfg).unwrap_err(),
            GaError::MissingArgument { name: "bounds" }
        );
    }

    #[test]
    fn test_circular_session_reaches_polygon() {
        // Six cities on a circle: the optimal tour is the hexagon, whose
        // perimeter equals six radii.
        let mut cfg = config(CityPlacement::Circular, 6, 17);
        cfg.ga = cfg.ga.with_crossover_rate(0.9).with_mutation_rate(0.4);
        let mut session = Session::new(&cfg).unwrap();
        session.run(150).unwrap();
        let radius = PlacementBounds::for_canvas(600.0, 400.0).radius;
        assert!(
            (session.best_distance() - 6.0 * radius).abs() < 1e-6,
            "best {} vs optimum {}",
            session.best_distance(),
            6.0 * radius
        );
    }
}
