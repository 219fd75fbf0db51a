//! Station identifier type.

use std::fmt;

/// Error returned when constructing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// An opaque station identifier.
///
/// Station ids are caller-assigned strings; the only validation is that they
/// must be non-empty. Ids have a total (lexicographic) order, which the
/// nearest-station query uses to break distance ties.
///
/// # Examples
///
/// ```
/// use transit_registry::domain::StationId;
///
/// let id = StationId::new("central-1".to_string()).unwrap();
/// assert_eq!(id.as_str(), "central-1");
///
/// // Empty ids are rejected
/// assert!(StationId::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Create a station id from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "station id cannot be empty",
            });
        }
        Ok(StationId(s))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
