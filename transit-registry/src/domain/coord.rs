//! Grid coordinates and their ranking order.

use std::cmp::Ordering;
use std::fmt;

/// An integer grid coordinate `(x, y)`.
///
/// Coordinates carry the order used everywhere they are ranked: ascending
/// squared Euclidean distance from the origin, ties broken by ascending `y`,
/// then ascending `x`. The final `x` tiebreak keeps the order total, so two
/// coordinates compare equal only when they are the same point.
///
/// # Examples
///
/// ```
/// use transit_registry::domain::Coord;
///
/// // (2, 0) is closer to the origin than (0, 3)
/// assert!(Coord::new(2, 0) < Coord::new(0, 3));
///
/// // Same distance: the smaller y comes first
/// assert!(Coord::new(5, 0) < Coord::new(3, 4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// The origin `(0, 0)`, the reference point for distance ordering.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate from its components.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another coordinate.
    ///
    /// Differences are widened before squaring, so no pair of `i32`
    /// coordinates can overflow.
    pub fn distance_squared(self, other: Coord) -> u128 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs() as u128;
        let dy = (self.y as i64 - other.y as i64).unsigned_abs() as u128;
        dx * dx + dy * dy
    }

    /// Squared distance from [`Coord::ORIGIN`].
    pub fn distance_squared_from_origin(self) -> u128 {
        self.distance_squared(Coord::ORIGIN)
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_squared_from_origin()
            .cmp(&other.distance_squared_from_origin())
            .then_with(|| self.y.cmp(&other.y))
            .then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coord_strategy() -> impl Strategy<Value = Coord> {
        (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Coord::new(x, y))
    }

    proptest! {
        /// The order agrees with comparing (distance², y, x) as a tuple.
        #[test]
        fn order_matches_key_tuple(a in coord_strategy(), b in coord_strategy()) {
            let key = |c: Coord| (c.distance_squared_from_origin(), c.y, c.x);
            prop_assert_eq!(a.cmp(&b), key(a).cmp(&key(b)));
        }

        /// Two coordinates compare equal only when they are the same point.
        #[test]
        fn equal_order_means_equal_point(a in coord_strategy(), b in coord_strategy()) {
            if a.cmp(&b) == std::cmp::Ordering::Equal {
                prop_assert_eq!(a, b);
            }
        }

        /// Distance is symmetric and zero only between identical points.
        #[test]
        fn distance_symmetric(a in coord_strategy(), b in coord_strategy()) {
            prop_assert_eq!(a.distance_squared(b), b.distance_squared(a));
            if a != b {
                prop_assert!(a.distance_squared(b) > 0);
            }
        }
    }
}
