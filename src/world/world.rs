//! The world: an immutable, ordered set of cities.

use super::city::City;
use super::config::WorldConfig;
use super::placement::CityFactory;
use crate::error::{ensure, GaError, Result};
use rand::Rng;
use std::sync::Arc;
use tracing::instrument;

/// An immutable collection of cities.
///
/// City `i` always has id `i`. The city list is shared (`Arc`) so operator
/// sets can hold it without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    cities: Arc<[City]>,
}

impl World {
    /// Builds `city_count` cities by asking `factory` for each index.
    ///
    /// Fails with `InvalidArgument` if `city_count == 0`.
    #[instrument(level = "debug", skip(factory, rng))]
    pub fn new<F: CityFactory, R: Rng>(
        factory: &F,
        city_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        ensure(city_count > 0, "city_count", || "must be more than 0, got 0")?;
        let cities = (0..city_count)
            .map(|i| factory.make_city(i, city_count, rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            cities: cities.into(),
        })
    }

    /// Builds a world from a configuration.
    pub fn from_config<R: Rng>(config: &WorldConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let factory = config.placement.factory(config.require_bounds()?);
        Self::new(&factory, config.city_count, rng)
    }

    /// Builds a world from explicit coordinates.
    ///
    /// Ids are reassigned to match positions. Fails with `InvalidArgument`
    /// if the list is empty or any coordinate is NaN or infinite.
    pub fn from_cities(points: &[(f64, f64)]) -> Result<Self> {
        ensure(!points.is_empty(), "cities", || "must not be empty")?;
        if let Some((i, &(x, y))) = points
            .iter()
            .enumerate()
            .find(|(_, (x, y))| !(x.is_finite() && y.is_finite()))
        {
            return Err(GaError::invalid(
                "cities",
                format!("coordinates must be finite, got ({x}, {y}) at index {i}"),
            ));
        }
        let cities: Vec<City> = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| City::new(i, x, y))
            .collect();
        Ok(Self {
            cities: cities.into(),
        })
    }

    /// Number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// The cities, ordered by id.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// A shared handle to the city list.
    pub fn shared_cities(&self) -> Arc<[City]> {
        Arc::clone(&self.cities)
    }
}
