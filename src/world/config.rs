//! World configuration.

use super::placement::{CityPlacement, PlacementBounds};
use crate::error::{ensure, GaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for building a [`World`](super::World).
///
/// # Examples
///
/// ```
/// use u_salesman::world::{CityPlacement, PlacementBounds, WorldConfig};
///
/// let config = WorldConfig::default()
///     .with_city_count(30)
///     .with_placement(CityPlacement::Circular)
///     .with_bounds(PlacementBounds::for_canvas(640.0, 480.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Number of cities. Must be positive.
    pub city_count: usize,

    /// Placement policy.
    pub placement: CityPlacement,

    /// Placement geometry. Required; `None` fails with `MissingArgument`.
    pub bounds: Option<PlacementBounds>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            city_count: 20,
            placement: CityPlacement::Random,
            bounds: Some(PlacementBounds::for_canvas(1.0, 1.0)),
        }
    }
}

impl WorldConfig {
    /// Sets the number of cities.
    pub fn with_city_count(mut self, n: usize) -> Self {
        self.city_count = n;
        self
    }

    /// Sets the placement policy.
    pub fn with_placement(mut self, placement: CityPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the placement geometry.
    pub fn with_bounds(mut self, bounds: PlacementBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Returns the bounds, or `MissingArgument` if none were set.
    pub fn require_bounds(&self) -> Result<&PlacementBounds> {
        self.bounds.as_ref().ok_or(GaError::missing("bounds"))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ensure(self.city_count > 0, "city_count", || {
            "must be more than 0, got 0"
        })?;
        self.require_bounds()?.validate()
    }
}
