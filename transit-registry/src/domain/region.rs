//! Region identifier type.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid region id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid region id: {reason}")]
pub struct InvalidRegionId {
    reason: &'static str,
}

/// A numeric region identifier, caller-assigned.
///
/// Any `u64` is a valid region id; the type exists so station and region
/// ids cannot be mixed up.
///
/// # Examples
///
/// ```
/// use transit_registry::domain::RegionId;
///
/// let id: RegionId = "42".parse().unwrap();
/// assert_eq!(id, RegionId::new(42));
/// assert!("-1".parse::<RegionId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u64);

impl RegionId {
    /// Create a region id from its raw value.
    pub fn new(raw: u64) -> Self {
        RegionId(raw)
    }

    /// Returns the raw numeric value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl FromStr for RegionId {
    type Err = InvalidRegionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(RegionId).map_err(|_| InvalidRegionId {
            reason: "region id must be an unsigned integer",
        })
    }
}

impl fmt::Debug for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionId({})", self.0)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
