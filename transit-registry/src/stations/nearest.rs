//! Nearest-station selection.
//!
//! Finds the stations closest to a query point in a single pass over
//! the coordinate index, keeping only the current best three instead of
//! sorting the whole station set.

use crate::domain::{Coord, StationId};
use crate::stations::StationStore;
use tracing::trace;

/// How many neighbors a query returns at most.
const NEIGHBOR_COUNT: usize = 3;

/// Up to three station ids closest to `query`, ascending by squared
/// euclidean distance, ties broken by ascending station id.
///
/// Runs in one pass holding three `(distance, id)` slots sorted best
/// first; a closer candidate is inserted at its slot index and the
/// worse slots shift down by one. Stations hidden by a coordinate
/// collision are not visible to the scan.
///
/// # Examples
///
/// ```
/// use transit_registry::domain::{Coord, StationId};
/// use transit_registry::stations::{closest_stations, StationStore};
///
/// let mut store = StationStore::new();
/// for (id, x, y) in [("A", 0, 0), ("B", 1, 0), ("C", 0, 2), ("D", 5, 5)] {
///     store.add(StationId::new(id.to_string()).unwrap(), id.to_string(), Coord::new(x, y));
/// }
///
/// let closest = closest_stations(&store, Coord::new(0, 0));
/// let ids: Vec<&str> = closest.iter().map(|id| id.as_str()).collect();
/// assert_eq!(ids, vec!["A", "B", "C"]);
/// ```
pub fn closest_stations(store: &StationStore, query: Coord) -> Vec<StationId> {
    let mut slots: [Option<(u128, &StationId)>; NEIGHBOR_COUNT] = [None; NEIGHBOR_COUNT];

    for (coord, id) in store.coordinate_entries() {
        let candidate = (coord.distance_squared(query), id);
        let Some(pos) = slots
            .iter()
            .position(|slot| slot.is_none_or(|best| candidate < best))
        else {
            continue;
        };

        for i in (pos + 1..NEIGHBOR_COUNT).rev() {
            slots[i] = slots[i - 1];
        }
        slots[pos] = Some(candidate);
        trace!(station = %id, distance = candidate.0, slot = pos, "candidate enters nearest set");
    }

    slots.into_iter().flatten().map(|(_, id)| id.clone()).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_stations() -> impl Strategy<Value = Vec<(StationId, Coord)>> {
        proptest::collection::hash_map("[A-Z]{2,4}", (-1000i32..=1000, -1000i32..=1000), 0..32)
            .prop_map(|entries| {
                entries
                    .into_iter()
                    .map(|(id, (x, y))| (StationId::new(id).unwrap(), Coord::new(x, y)))
                    .collect()
            })
    }

    proptest! {
        /// The streaming pass agrees with sorting every visible station
        /// by (distance, id) and taking the first three.
        #[test]
        fn matches_full_sort(stations in arb_stations(), qx in -1000i32..=1000, qy in -1000i32..=1000) {
            let mut store = StationStore::new();
            for (id, coord) in &stations {
                store.add(id.clone(), id.as_str().to_string(), *coord);
            }
            let query = Coord::new(qx, qy);

            let mut expected: Vec<(u128, StationId)> = store
                .coordinate_entries()
                .map(|(coord, id)| (coord.distance_squared(query), id.clone()))
                .collect();
            expected.sort();
            let expected: Vec<StationId> =
                expected.into_iter().take(3).map(|(_, id)| id).collect();

            prop_assert_eq!(closest_stations(&store, query), expected);
        }
    }
}
