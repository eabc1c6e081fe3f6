//! Cities and the world they live in.
//!
//! A [`World`] is the engine's input: an immutable, ordered list of
//! [`City`] values produced by a placement policy ([`CityPlacement`]).

mod city;
mod config;
mod placement;
#[allow(clippy::module_inception)]
mod world;

pub use city::City;
pub use config::WorldConfig;
pub use placement::{
    CircularCityFactory, CityFactory, CityPlacement, PlacementBounds, PlacementFactory,
    RandomCityFactory,
};
pub use world::World;
