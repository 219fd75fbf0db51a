//! Train identifier type.

use std::fmt;

/// Error returned when constructing an invalid train id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train id: {reason}")]
pub struct InvalidTrainId {
    reason: &'static str,
}

/// An opaque train identifier, caller-assigned and non-empty.
///
/// Departure listings sort equal times by train id, so ids carry their
/// lexicographic order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(String);

impl TrainId {
    /// Create a train id from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidTrainId> {
        if s.is_empty() {
            return Err(InvalidTrainId {
                reason: "train id cannot be empty",
            });
        }
        Ok(TrainId(s))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
