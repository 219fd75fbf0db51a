//! Output rendering for the front-end.
//!
//! The core API reports "not found" as `None`; this module turns those
//! into the documented sentinel constants and formats sequences one
//! item per line.

use crate::domain::{Coord, DepartureTime, RegionId, StationId, TrainId};

/// Rendered in place of a missing station or region name.
pub const NO_NAME: &str = "!NO_NAME!";
/// Rendered in place of a missing station id.
pub const NO_STATION: &str = "---";
/// Rendered in place of a missing train id.
pub const NO_TRAIN: &str = "---";
/// Rendered in place of a missing region id.
pub const NO_REGION: &str = "!NO_REGION!";
/// Rendered in place of a missing coordinate.
pub const NO_COORD: &str = "(?,?)";
/// Rendered in place of a missing departure time.
pub const NO_TIME: &str = "--:--";

/// Marker for a known but empty sequence, kept distinct from the
/// sentinels so "no such subject" and "nothing there" read differently.
const EMPTY: &str = "(empty)";

pub fn boolean(ok: bool) -> &'static str {
    if ok { "ok" } else { "failed" }
}

pub fn name_or_sentinel(name: Option<&str>) -> &str {
    name.unwrap_or(NO_NAME)
}

pub fn coord_or_sentinel(coord: Option<Coord>) -> String {
    match coord {
        Some(coord) => coord.to_string(),
        None => NO_COORD.to_string(),
    }
}

pub fn station_or_sentinel(id: Option<&StationId>) -> &str {
    match id {
        Some(id) => id.as_str(),
        None => NO_STATION,
    }
}

pub fn region_or_sentinel(id: Option<RegionId>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => NO_REGION.to_string(),
    }
}

/// One station id per line, or the empty marker.
pub fn station_list(ids: &[StationId]) -> String {
    if ids.is_empty() {
        return EMPTY.to_string();
    }
    ids.iter().map(StationId::as_str).collect::<Vec<_>>().join("\n")
}

/// One region id per line, or the empty marker; `None` renders the
/// region sentinel as a single entry.
pub fn regions_or_sentinel(ids: Option<&[RegionId]>) -> String {
    let Some(ids) = ids else {
        return NO_REGION.to_string();
    };
    if ids.is_empty() {
        return EMPTY.to_string();
    }
    ids.iter().map(RegionId::to_string).collect::<Vec<_>>().join("\n")
}

/// A polygon on one line, vertices in stored order; `None` renders the
/// coordinate sentinel.
pub fn boundary_or_sentinel(boundary: Option<&[Coord]>) -> String {
    let Some(boundary) = boundary else {
        return NO_COORD.to_string();
    };
    if boundary.is_empty() {
        return EMPTY.to_string();
    }
    boundary.iter().map(Coord::to_string).collect::<Vec<_>>().join(" ")
}

/// One `HH:MM train` pair per line; an unknown station renders the
/// single sentinel pair, a known station with nothing due the empty
/// marker.
pub fn departures_or_sentinel(departures: Option<&[(DepartureTime, TrainId)]>) -> String {
    let Some(departures) = departures else {
        return format!("{NO_TIME} {NO_TRAIN}");
    };
    if departures.is_empty() {
        return EMPTY.to_string();
    }
    departures
        .iter()
        .map(|(time, train)| format!("{time} {}", train.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}
