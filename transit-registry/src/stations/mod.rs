//! Station storage and queries.
//!
//! [`StationStore`] owns the station records and their indices;
//! [`Schedule`] holds one station's departures; [`closest_stations`]
//! answers nearest-neighbor queries against the store.

mod nearest;
mod schedule;
mod store;

pub use nearest::closest_stations;
pub use schedule::Schedule;
pub use store::StationStore;
