//! Timestamp samples handed over by the host on every tick

use serde::{Deserialize, Serialize};

/// Local wall-clock time of day, sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    hour: u32,
    minute: u32,
    second: u32,
}

impl Timestamp {
    /// Midnight, 00:00:00
    pub const MIDNIGHT: Timestamp = Timestamp {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build a timestamp from 24-hour components.
    /// Returns `None` when a component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Hour of day (0-23)
    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of hour (0-59)
    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Second of minute (0-59)
    #[inline]
    pub fn second(&self) -> u32 {
        self.second
    }
}

/// Locale-formatted digital display text, produced by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalLabels {
    /// Time of day, e.g. "3:15:30 PM"
    pub time: String,
    /// Date line, e.g. "Fri, Oct 16, 2026"
    pub date: String,
}

/// One reading of the host clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSample {
    pub time: Timestamp,
    pub labels: DigitalLabels,
}

impl TickSample {
    pub fn new(time: Timestamp, labels: DigitalLabels) -> Self {
        Self { time, labels }
    }

    /// Sample without display text (headless use, tests)
    pub fn unlabeled(time: Timestamp) -> Self {
        Self {
            time,
            labels: DigitalLabels::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hms_bounds() {
        assert!(Timestamp::from_hms(23, 59, 59).is_some());
        assert!(Timestamp::from_hms(24, 0, 0).is_none());
        assert!(Timestamp::from_hms(0, 60, 0).is_none());
        assert!(Timestamp::from_hms(0, 0, 60).is_none());
    }

    #[test]
    fn test_accessors() {
        let t = Timestamp::from_hms(15, 4, 9).unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (15, 4, 9));
        assert_eq!(Timestamp::from_hms(0, 0, 0), Some(Timestamp::MIDNIGHT));
    }
}
