//! The registry facade.
//!
//! [`TransitRegistry`] owns one [`StationStore`] and one
//! [`RegionForest`] and exposes the full operation set of the system.
//! The two stores are independent except for the one-way region link
//! kept on each station record; this module is where that link is
//! checked against both sides.

use crate::domain::{Coord, DepartureTime, RegionId, StationId, TrainId};
use crate::regions::RegionForest;
use crate::stations::{closest_stations, StationStore};

/// An in-memory registry of stations and regions.
///
/// Mutating operations return `true` on success and `false` when a
/// precondition fails, without partial effects. Queries return `None`
/// (or an empty sequence) for unknown subjects.
///
/// # Examples
///
/// ```
/// use transit_registry::domain::{Coord, RegionId, StationId};
/// use transit_registry::TransitRegistry;
///
/// let mut registry = TransitRegistry::new();
/// let hki = StationId::new("HKI".to_string()).unwrap();
/// let uusimaa = RegionId::new(1);
///
/// registry.add_station(hki.clone(), "Helsinki".to_string(), Coord::new(25, 60));
/// registry.add_region(uusimaa, "Uusimaa".to_string(), Vec::new());
/// registry.add_station_to_region(&hki, uusimaa);
///
/// assert_eq!(registry.station_in_regions(&hki), Some(vec![uusimaa]));
/// ```
#[derive(Debug, Default)]
pub struct TransitRegistry {
    stations: StationStore,
    regions: RegionForest,
}

impl TransitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stations currently stored.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Drop every station, region, and link.
    pub fn clear_all(&mut self) {
        self.stations.clear();
        self.regions.clear();
    }

    /// Every station id, in arbitrary order.
    pub fn all_stations(&self) -> Vec<StationId> {
        self.stations.all_ids()
    }

    pub fn add_station(&mut self, id: StationId, name: String, coord: Coord) -> bool {
        self.stations.add(id, name, coord)
    }

    pub fn station_name(&self, id: &StationId) -> Option<&str> {
        self.stations.name(id)
    }

    pub fn station_coord(&self, id: &StationId) -> Option<Coord> {
        self.stations.coord(id)
    }

    /// Station ids ordered by name. See [`StationStore::alphabetical`].
    pub fn stations_alphabetically(&mut self) -> &[StationId] {
        self.stations.alphabetical()
    }

    /// Station ids ordered by distance from the origin. See
    /// [`StationStore::distance_increasing`].
    pub fn stations_distance_increasing(&mut self) -> &[StationId] {
        self.stations.distance_increasing()
    }

    pub fn find_station_with_coord(&self, coord: Coord) -> Option<&StationId> {
        self.stations.find_by_coord(coord)
    }

    pub fn change_station_coord(&mut self, id: &StationId, coord: Coord) -> bool {
        self.stations.change_coord(id, coord)
    }

    /// Up to three stations closest to `coord`. See
    /// [`closest_stations`].
    pub fn stations_closest_to(&self, coord: Coord) -> Vec<StationId> {
        closest_stations(&self.stations, coord)
    }

    pub fn remove_station(&mut self, id: &StationId) -> bool {
        self.stations.remove(id)
    }

    pub fn add_departure(
        &mut self,
        station: &StationId,
        train: TrainId,
        time: DepartureTime,
    ) -> bool {
        self.stations.add_departure(station, time, train)
    }

    pub fn remove_departure(
        &mut self,
        station: &StationId,
        train: &TrainId,
        time: DepartureTime,
    ) -> bool {
        self.stations.remove_departure(station, time, train)
    }

    /// Departures from `station` at or after `time`, ordered by
    /// `(time, train)`; `None` for an unknown station.
    pub fn station_departures_after(
        &self,
        station: &StationId,
        time: DepartureTime,
    ) -> Option<Vec<(DepartureTime, TrainId)>> {
        self.stations.departures_at_or_after(station, time)
    }

    pub fn add_region(&mut self, id: RegionId, name: String, boundary: Vec<Coord>) -> bool {
        self.regions.add(id, name, boundary)
    }

    /// Every region id, in insertion order.
    pub fn all_regions(&self) -> &[RegionId] {
        self.regions.all_ids()
    }

    pub fn region_name(&self, id: RegionId) -> Option<&str> {
        self.regions.name(id)
    }

    pub fn region_boundary(&self, id: RegionId) -> Option<&[Coord]> {
        self.regions.boundary(id)
    }

    pub fn add_subregion_to_region(&mut self, child: RegionId, parent: RegionId) -> bool {
        self.regions.attach_subregion(child, parent)
    }

    /// Put a station into a region. Returns `false` if either id is
    /// unknown or the station already belongs to a region.
    pub fn add_station_to_region(&mut self, station: &StationId, region: RegionId) -> bool {
        if !self.regions.contains(region) {
            return false;
        }
        self.stations.assign_region(station, region)
    }

    /// The regions containing `station`, direct region first, then each
    /// enclosing region outward. `Some(vec![])` for a station in no
    /// region, `None` for an unknown station.
    pub fn station_in_regions(&self, station: &StationId) -> Option<Vec<RegionId>> {
        let region = self.stations.region_of(station)?;
        let Some(direct) = region else {
            return Some(Vec::new());
        };

        let mut chain = vec![direct];
        chain.extend(self.regions.ancestor_chain(direct));
        Some(chain)
    }

    /// Every subregion below `region`, directly or indirectly, in
    /// pre-order; `None` for an unknown region.
    pub fn all_subregions_of_region(&self, region: RegionId) -> Option<Vec<RegionId>> {
        self.regions.descendants_of(region)
    }

    /// The nearest region containing both arguments, or `None` if
    /// either id is unknown or no common ancestor exists.
    pub fn common_parent_of_regions(&self, first: RegionId, second: RegionId) -> Option<RegionId> {
        self.regions.lowest_common_ancestor(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationId {
        StationId::new(s.to_string()).unwrap()
    }

    fn train(s: &str) -> TrainId {
        TrainId::new(s.to_string()).unwrap()
    }

    fn time(s: &str) -> DepartureTime {
        DepartureTime::parse_hhmm(s).unwrap()
    }

    fn region(id: u64) -> RegionId {
        RegionId::new(id)
    }

    #[test]
    fn station_membership_needs_both_sides() {
        let mut registry = TransitRegistry::new();
        registry.add_station(station("HKI"), "Helsinki".to_string(), Coord::new(1, 1));
        registry.add_region(region(1), "Uusimaa".to_string(), Vec::new());

        assert!(!registry.add_station_to_region(&station("HKI"), region(9)));
        assert!(!registry.add_station_to_region(&station("XXX"), region(1)));
        assert!(registry.add_station_to_region(&station("HKI"), region(1)));
        assert!(!registry.add_station_to_region(&station("HKI"), region(1)));
    }

    #[test]
    fn station_in_regions_walks_outward_from_the_direct_region() {
        let mut registry = TransitRegistry::new();
        registry.add_station(station("HKI"), "Helsinki".to_string(), Coord::new(1, 1));
        for id in [1, 2, 3] {
            registry.add_region(region(id), format!("R{id}"), Vec::new());
        }
        registry.add_subregion_to_region(region(1), region(2));
        registry.add_subregion_to_region(region(2), region(3));
        registry.add_station_to_region(&station("HKI"), region(1));

        assert_eq!(
            registry.station_in_regions(&station("HKI")),
            Some(vec![region(1), region(2), region(3)])
        );
    }

    #[test]
    fn station_in_regions_distinguishes_unknown_from_unassigned() {
        let mut registry = TransitRegistry::new();
        registry.add_station(station("HKI"), "Helsinki".to_string(), Coord::new(1, 1));

        assert_eq!(registry.station_in_regions(&station("HKI")), Some(Vec::new()));
        assert_eq!(registry.station_in_regions(&station("XXX")), None);
    }

    #[test]
    fn departures_round_trip_through_the_facade() {
        let mut registry = TransitRegistry::new();
        registry.add_station(station("HKI"), "Helsinki".to_string(), Coord::new(1, 1));

        assert!(registry.add_departure(&station("HKI"), train("IC-7"), time("08:00")));
        assert!(registry.add_departure(&station("HKI"), train("IC-9"), time("12:15")));
        assert!(registry.remove_departure(&station("HKI"), &train("IC-7"), time("08:00")));

        assert_eq!(
            registry.station_departures_after(&station("HKI"), time("00:00")),
            Some(vec![(time("12:15"), train("IC-9"))])
        );
        assert_eq!(registry.station_departures_after(&station("XXX"), time("00:00")), None);
    }

    #[test]
    fn nearest_query_round_trips_through_the_facade() {
        let mut registry = TransitRegistry::new();
        for (id, x, y) in [("A", 0, 0), ("B", 1, 0), ("C", 0, 2), ("D", 5, 5)] {
            registry.add_station(station(id), id.to_string(), Coord::new(x, y));
        }

        assert_eq!(
            registry.stations_closest_to(Coord::new(0, 0)),
            vec![station("A"), station("B"), station("C")]
        );
    }

    #[test]
    fn clear_all_empties_both_stores() {
        let mut registry = TransitRegistry::new();
        registry.add_station(station("HKI"), "Helsinki".to_string(), Coord::new(1, 1));
        registry.add_region(region(1), "Uusimaa".to_string(), Vec::new());
        registry.add_station_to_region(&station("HKI"), region(1));

        registry.clear_all();

        assert_eq!(registry.station_count(), 0);
        assert!(registry.all_stations().is_empty());
        assert!(registry.all_regions().is_empty());
        assert_eq!(registry.region_name(region(1)), None);

        // Ids freed by the wipe are usable again.
        assert!(registry.add_region(region(1), "Back".to_string(), Vec::new()));
        assert_eq!(registry.all_regions(), &[region(1)]);
    }
}
