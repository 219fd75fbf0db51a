//! Core domain types for the transit registry.
//!
//! Identifiers are validated newtypes so that the rest of the crate can
//! take them by value without re-checking invariants.

mod coord;
mod region;
mod station;
mod time;
mod train;

pub use coord::Coord;
pub use region::{InvalidRegionId, RegionId};
pub use station::{InvalidStationId, StationId};
pub use time::{DepartureTime, TimeError};
pub use train::{InvalidTrainId, TrainId};
