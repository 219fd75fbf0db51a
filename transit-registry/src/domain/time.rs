//! Departure time handling.
//!
//! Schedules store wall-clock departure times with minute precision,
//! parsed from "HH:MM" strings.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock departure time with minute precision.
///
/// # Examples
///
/// ```
/// use transit_registry::domain::DepartureTime;
///
/// let t = DepartureTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
///
/// // Invalid formats are rejected
/// assert!(DepartureTime::parse_hhmm("1430").is_err());
/// assert!(DepartureTime::parse_hhmm("25:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepartureTime(NaiveTime);

impl DepartureTime {
    /// Create a time from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(DepartureTime)
            .ok_or_else(|| TimeError::new("hour must be 0-23 and minute 0-59"))
    }

    /// Parse a time from "HH:MM" format.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Debug for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepartureTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert!(DepartureTime::parse_hhmm("00:00").is_ok());
        assert!(DepartureTime::parse_hhmm("09:05").is_ok());
        assert!(DepartureTime::parse_hhmm("23:59").is_ok());
    }

    #[test]
    fn reject_bad_format() {
        assert!(DepartureTime::parse_hhmm("").is_err());
        assert!(DepartureTime::parse_hhmm("1430").is_err());
        assert!(DepartureTime::parse_hhmm("14:3").is_err());
        assert!(DepartureTime::parse_hhmm("14-30").is_err());
        assert!(DepartureTime::parse_hhmm("ab:cd").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        assert!(DepartureTime::parse_hhmm("24:00").is_err());
        assert!(DepartureTime::parse_hhmm("14:60").is_err());
        assert!(DepartureTime::new(24, 0).is_err());
        assert!(DepartureTime::new(0, 60).is_err());
    }

    #[test]
    fn accessors() {
        let t = DepartureTime::parse_hhmm("14:30").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn ordered_by_clock() {
        let early = DepartureTime::parse_hhmm("08:15").unwrap();
        let late = DepartureTime::parse_hhmm("17:40").unwrap();
        assert!(early < late);
        assert_eq!(early, DepartureTime::new(8, 15).unwrap());
    }

    #[test]
    fn display_and_debug() {
        let t = DepartureTime::parse_hhmm("07:05").unwrap();
        assert_eq!(format!("{}", t), "07:05");
        assert_eq!(format!("{:?}", t), "DepartureTime(07:05)");
    }
}
