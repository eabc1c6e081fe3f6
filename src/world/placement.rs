//! City placement policies.
//!
//! A placement policy turns `(index, total)` into a [`City`]. Two policies
//! exist: [`CircularCityFactory`] spaces cities evenly on a circle and
//! [`RandomCityFactory`] scatters them uniformly inside a rectangle.

use super::city::City;
use crate::error::{ensure, Result};
use rand::Rng;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which placement policy a world is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CityPlacement {
    /// Uniformly at random inside `[0, width) × [0, height)`.
    #[default]
    Random,
    /// Evenly around a circle of given center and radius.
    Circular,
}

impl CityPlacement {
    /// Builds the factory for this policy from the given bounds.
    pub fn factory(self, bounds: &PlacementBounds) -> PlacementFactory {
        match self {
            CityPlacement::Random => {
                PlacementFactory::Random(RandomCityFactory::new(bounds.width, bounds.height))
            }
            CityPlacement::Circular => PlacementFactory::Circular(CircularCityFactory::new(
                bounds.center_x,
                bounds.center_y,
                bounds.radius,
            )),
        }
    }
}

/// Geometry both placement policies draw from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementBounds {
    /// Width of the rectangle used by random placement.
    pub width: f64,
    /// Height of the rectangle used by random placement.
    pub height: f64,
    /// Circle center, x.
    pub center_x: f64,
    /// Circle center, y.
    pub center_y: f64,
    /// Circle radius.
    pub radius: f64,
}

impl PlacementBounds {
    /// Derives bounds from a drawing surface of the given size.
    ///
    /// The circle is centered on the surface with a radius of 40% of the
    /// shorter side.
    ///
    /// ```
    /// use u_salesman::world::PlacementBounds;
    ///
    /// let b = PlacementBounds::for_canvas(800.0, 600.0);
    /// assert_eq!((b.center_x, b.center_y), (400.0, 300.0));
    /// assert!((b.radius - 240.0).abs() < 1e-12);
    /// ```
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius: 0.4 * width.min(height),
        }
    }

    /// Checks that every extent is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("bounds.width", self.width),
            ("bounds.height", self.height),
            ("bounds.radius", self.radius),
        ] {
            ensure(value.is_finite() && value >= 0.0, name, || {
                format!("must be finite and non-negative, got {value}")
            })?;
        }
        ensure(
            self.center_x.is_finite() && self.center_y.is_finite(),
            "bounds.center",
            || format!("must be finite, got ({}, {})", self.center_x, self.center_y),
        )
    }
}

/// Produces the city at `index` out of `total`.
pub trait CityFactory {
    /// Creates one city.
    ///
    /// Fails with `InvalidArgument` if `total == 0` or `index >= total`.
    fn make_city<R: Rng>(&self, index: usize, total: usize, rng: &mut R) -> Result<City>;
}

fn check_index(index: usize, total: usize) -> Result<()> {
    ensure(total > 0, "total", || "must be a positive integer, got 0")?;
    ensure(index < total, "index", || {
        format!("must be in [0, {total}), got {index}")
    })
}

/// Places cities evenly around a circle, starting at the top and walking
/// clockwise in screen coordinates.
///
/// Deterministic: the random source is never consulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularCityFactory {
    center_x: f64,
    center_y: f64,
    radius: f64,
}

impl CircularCityFactory {
    /// Creates a circular factory.
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }
}

impl CityFactory for CircularCityFactory {
    fn make_city<R: Rng>(&self, index: usize, total: usize, _rng: &mut R) -> Result<City> {
        check_index(index, total)?;
        let theta = (index as f64 / total as f64) * (2.0 * PI);
        Ok(City::new(
            index,
            self.center_x + theta.sin() * self.radius,
            self.center_y + theta.cos() * self.radius,
        ))
    }
}

/// Places cities uniformly at random inside `[0, width) × [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomCityFactory {
    width: f64,
    height: f64,
}

impl RandomCityFactory {
    /// Creates a random factory.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl CityFactory for RandomCityFactory {
    fn make_city<R: Rng>(&self, index: usize, total: usize, rng: &mut R) -> Result<City> {
        check_index(index, total)?;
        let x = rng.random_range(0.0..1.0) * self.width;
        let y = rng.random_range(0.0..1.0) * self.height;
        Ok(City::new(index, x, y))
    }
}

/// A factory chosen at runtime from a [`CityPlacement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementFactory {
    Circular(CircularCityFactory),
    Random(RandomCityFactory),
}

impl CityFactory for PlacementFactory {
    fn make_city<R: Rng>(&self, index: usize, total: usize, rng: &mut R) -> Result<City> {
        match self {
            PlacementFactory::Circular(f) => f.make_city(index, total, rng),
            PlacementFactory::Random(f) => f.make_city(index, total, rng),
        }
    }
}
