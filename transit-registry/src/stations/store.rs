//! The multi-indexed station store.
//!
//! Stations are kept under three indices that are maintained together:
//! the primary id index, a coordinate index ordered by distance from the
//! origin, and a name index. Two derived orderings (alphabetical and
//! distance-increasing) are cached and rebuilt lazily behind dirty flags.

use crate::domain::{Coord, DepartureTime, RegionId, StationId, TrainId};
use crate::stations::Schedule;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// One station's stored data. Indices refer to stations by id; this
/// record is the single owner of the name, coordinate, schedule, and
/// region link.
#[derive(Debug, Clone)]
struct StationRecord {
    name: String,
    coord: Coord,
    region: Option<RegionId>,
    schedule: Schedule,
}

/// A cached id ordering with a staleness flag. Starts dirty so the
/// first read computes it.
#[derive(Debug)]
struct Projection {
    ids: Vec<StationId>,
    dirty: bool,
}

impl Default for Projection {
    fn default() -> Self {
        Self { ids: Vec::new(), dirty: true }
    }
}

impl Projection {
    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn store(&mut self, ids: Vec<StationId>) {
        self.ids = ids;
        self.dirty = false;
    }
}

/// Owns every station and keeps the id, coordinate, and name indices
/// consistent across mutations.
///
/// The coordinate index is single-valued: one station id per coordinate,
/// last writer wins. A station whose coordinate slot has been taken over
/// by a later station stays reachable by id but is invisible to
/// coordinate lookups and the distance ordering.
///
/// # Examples
///
/// ```
/// use transit_registry::domain::{Coord, StationId};
/// use transit_registry::stations::StationStore;
///
/// let mut store = StationStore::new();
/// let id = StationId::new("KKN".to_string()).unwrap();
/// assert!(store.add(id.clone(), "Kirkkonummi".to_string(), Coord::new(24, 60)));
/// assert_eq!(store.name(&id), Some("Kirkkonummi"));
/// ```
#[derive(Debug, Default)]
pub struct StationStore {
    by_id: HashMap<StationId, StationRecord>,
    by_coord: BTreeMap<Coord, StationId>,
    by_name: BTreeMap<String, Vec<StationId>>,
    alphabetical: Projection,
    distance_increasing: Projection,
}

impl StationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stations currently stored.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Remove every station and reset both cached orderings.
    pub fn clear(&mut self) {
        self.by_id.clear();
        self.by_coord.clear();
        self.by_name.clear();
        self.alphabetical = Projection::default();
        self.distance_increasing = Projection::default();
    }

    /// Every station id, in arbitrary order.
    pub fn all_ids(&self) -> Vec<StationId> {
        self.by_id.keys().cloned().collect()
    }

    /// Add a station. Returns `false` without mutating anything if the
    /// id is already taken.
    ///
    /// Writing the coordinate index may hide a previously added station
    /// at the same coordinate.
    pub fn add(&mut self, id: StationId, name: String, coord: Coord) -> bool {
        if self.by_id.contains_key(&id) {
            return false;
        }

        self.by_coord.insert(coord, id.clone());
        self.by_name.entry(name.clone()).or_default().push(id.clone());
        self.by_id.insert(
            id,
            StationRecord {
                name,
                coord,
                region: None,
                schedule: Schedule::new(),
            },
        );

        self.alphabetical.mark_dirty();
        self.distance_increasing.mark_dirty();
        true
    }

    /// The station's display name, or `None` for an unknown id.
    pub fn name(&self, id: &StationId) -> Option<&str> {
        self.by_id.get(id).map(|record| record.name.as_str())
    }

    /// The station's coordinate, or `None` for an unknown id.
    pub fn coord(&self, id: &StationId) -> Option<Coord> {
        self.by_id.get(id).map(|record| record.coord)
    }

    /// Move a station to a new coordinate. Returns `false` for an
    /// unknown id.
    ///
    /// The old coordinate slot is erased even if another station has
    /// since taken it over, and the new slot is overwritten even if
    /// occupied. Only the distance ordering is invalidated; names are
    /// untouched.
    pub fn change_coord(&mut self, id: &StationId, new_coord: Coord) -> bool {
        let Some(record) = self.by_id.get_mut(id) else {
            return false;
        };

        let old_coord = record.coord;
        record.coord = new_coord;
        self.by_coord.remove(&old_coord);
        self.by_coord.insert(new_coord, id.clone());

        self.distance_increasing.mark_dirty();
        true
    }

    /// Delete a station from every index. Returns `false` for an
    /// unknown id.
    pub fn remove(&mut self, id: &StationId) -> bool {
        let Some(record) = self.by_id.remove(id) else {
            return false;
        };

        // Single-valued slot: this erases whichever station currently
        // holds the coordinate, which is only ever a different one if
        // that later station hid this one.
        self.by_coord.remove(&record.coord);

        if let Some(ids) = self.by_name.get_mut(&record.name) {
            ids.retain(|other| other != id);
            if ids.is_empty() {
                self.by_name.remove(&record.name);
            }
        }

        self.alphabetical.mark_dirty();
        self.distance_increasing.mark_dirty();
        true
    }

    /// Station ids ordered by name, ties in per-name insertion order.
    ///
    /// Rebuilt from the name index only when a mutation has run since
    /// the last read; otherwise the stored list is returned as is.
    pub fn alphabetical(&mut self) -> &[StationId] {
        if self.alphabetical.dirty {
            let ids: Vec<StationId> = self.by_name.values().flatten().cloned().collect();
            debug!(stations = ids.len(), "rebuilt alphabetical station ordering");
            self.alphabetical.store(ids);
        }
        &self.alphabetical.ids
    }

    /// Station ids ordered by ascending squared distance from the
    /// origin, ties by ascending y. Same caching discipline as
    /// [`StationStore::alphabetical`].
    ///
    /// Stations hidden by a coordinate collision do not appear.
    pub fn distance_increasing(&mut self) -> &[StationId] {
        if self.distance_increasing.dirty {
            let ids: Vec<StationId> = self.by_coord.values().cloned().collect();
            debug!(stations = ids.len(), "rebuilt distance station ordering");
            self.distance_increasing.store(ids);
        }
        &self.distance_increasing.ids
    }

    /// Exact-match coordinate lookup.
    pub fn find_by_coord(&self, coord: Coord) -> Option<&StationId> {
        self.by_coord.get(&coord)
    }

    /// Entries of the coordinate index in coordinate order.
    pub fn coordinate_entries(&self) -> impl Iterator<Item = (&Coord, &StationId)> {
        self.by_coord.iter()
    }

    /// The station's owning region: `None` for an unknown station,
    /// `Some(None)` for a station that belongs to no region.
    pub fn region_of(&self, id: &StationId) -> Option<Option<RegionId>> {
        self.by_id.get(id).map(|record| record.region)
    }

    /// Set the owning region. Returns `false` if the station is unknown
    /// or already belongs to a region; membership is never reassigned.
    pub fn assign_region(&mut self, id: &StationId, region: RegionId) -> bool {
        let Some(record) = self.by_id.get_mut(id) else {
            return false;
        };
        if record.region.is_some() {
            return false;
        }
        record.region = Some(region);
        true
    }

    /// Record a departure on a station's schedule. Returns `false` if
    /// the station is unknown or the exact pair is already present.
    pub fn add_departure(&mut self, id: &StationId, time: DepartureTime, train: TrainId) -> bool {
        self.by_id
            .get_mut(id)
            .is_some_and(|record| record.schedule.add(time, train))
    }

    /// Remove an exact departure pair. Returns `false` if the station
    /// is unknown or the pair is not present.
    pub fn remove_departure(
        &mut self,
        id: &StationId,
        time: DepartureTime,
        train: &TrainId,
    ) -> bool {
        self.by_id
            .get_mut(id)
            .is_some_and(|record| record.schedule.remove(time, train))
    }

    /// Departures at or after `time`, ordered by `(time, train)`, or
    /// `None` for an unknown station.
    pub fn departures_at_or_after(
        &self,
        id: &StationId,
        time: DepartureTime,
    ) -> Option<Vec<(DepartureTime, TrainId)>> {
        self.by_id
            .get(id)
            .map(|record| record.schedule.departures_at_or_after(time).cloned().collect())
    }
}
