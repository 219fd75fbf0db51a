//! Per-station departure schedules.
//!
//! A [`Schedule`] holds the departures of a single station as ordered
//! `(time, train)` pairs. The same train may depart several times a day
//! and several trains may share a departure time, but an exact pair is
//! stored at most once.

use crate::domain::{DepartureTime, TrainId};
use std::collections::BTreeSet;

/// Ordered departures of one station.
///
/// # Examples
///
/// ```
/// use transit_registry::domain::{DepartureTime, TrainId};
/// use transit_registry::stations::Schedule;
///
/// let mut schedule = Schedule::new();
/// let noon = DepartureTime::parse_hhmm("12:00").unwrap();
/// let ice = TrainId::new("ICE-501".to_string()).unwrap();
///
/// assert!(schedule.add(noon, ice.clone()));
/// assert!(!schedule.add(noon, ice));
/// assert_eq!(schedule.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    departures: BTreeSet<(DepartureTime, TrainId)>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a departure. Returns `false` if the exact pair is already
    /// present, leaving the schedule unchanged.
    pub fn add(&mut self, time: DepartureTime, train: TrainId) -> bool {
        self.departures.insert((time, train))
    }

    /// Remove exactly one `(time, train)` pair. Returns `false` if the
    /// pair is not present.
    pub fn remove(&mut self, time: DepartureTime, train: &TrainId) -> bool {
        self.departures.remove(&(time, train.clone()))
    }

    /// All departures in `(time, train)` order.
    pub fn departures(&self) -> impl Iterator<Item = &(DepartureTime, TrainId)> {
        self.departures.iter()
    }

    /// Departures at or after `time`, in `(time, train)` order.
    ///
    /// The set iterates in ascending order, so everything after the
    /// first qualifying pair also qualifies.
    pub fn departures_at_or_after(
        &self,
        time: DepartureTime,
    ) -> impl Iterator<Item = &(DepartureTime, TrainId)> {
        self.departures.iter().skip_while(move |(t, _)| *t < time)
    }

    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> DepartureTime {
        DepartureTime::parse_hhmm(s).unwrap()
    }

    fn train(s: &str) -> TrainId {
        TrainId::new(s.to_string()).unwrap()
    }

    #[test]
    fn add_is_idempotent_per_pair() {
        let mut schedule = Schedule::new();
        assert!(schedule.add(time("10:00"), train("IC-1")));
        assert!(!schedule.add(time("10:00"), train("IC-1")));
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn same_time_different_trains_coexist() {
        let mut schedule = Schedule::new();
        assert!(schedule.add(time("10:00"), train("IC-2")));
        assert!(schedule.add(time("10:00"), train("IC-1")));

        let listed: Vec<_> = schedule.departures().cloned().collect();
        assert_eq!(
            listed,
            vec![(time("10:00"), train("IC-1")), (time("10:00"), train("IC-2"))]
        );
    }

    #[test]
    fn same_train_different_times_coexist() {
        let mut schedule = Schedule::new();
        assert!(schedule.add(time("16:00"), train("S-3")));
        assert!(schedule.add(time("08:00"), train("S-3")));
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn remove_requires_exact_pair() {
        let mut schedule = Schedule::new();
        schedule.add(time("10:00"), train("IC-1"));

        assert!(!schedule.remove(time("10:01"), &train("IC-1")));
        assert!(!schedule.remove(time("10:00"), &train("IC-2")));
        assert!(schedule.remove(time("10:00"), &train("IC-1")));
        assert!(schedule.is_empty());
    }

    #[test]
    fn at_or_after_includes_boundary() {
        let mut schedule = Schedule::new();
        schedule.add(time("08:00"), train("A"));
        schedule.add(time("12:00"), train("B"));
        schedule.add(time("12:00"), train("C"));
        schedule.add(time("18:30"), train("D"));

        let upcoming: Vec<_> = schedule.departures_at_or_after(time("12:00")).cloned().collect();
        assert_eq!(
            upcoming,
            vec![
                (time("12:00"), train("B")),
                (time("12:00"), train("C")),
                (time("18:30"), train("D")),
            ]
        );
    }

    #[test]
    fn at_or_after_past_last_departure_is_empty() {
        let mut schedule = Schedule::new();
        schedule.add(time("08:00"), train("A"));
        assert_eq!(schedule.departures_at_or_after(time("08:01")).count(), 0);
    }

    #[test]
    fn empty_schedule_lists_nothing() {
        let schedule = Schedule::new();
        assert_eq!(schedule.departures().count(), 0);
        assert_eq!(schedule.departures_at_or_after(time("00:00")).count(), 0);
    }
}
