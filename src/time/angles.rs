//! Hand rotation angles
//!
//! Angles are in degrees, 0 = 12 o'clock, increasing clockwise. They are not
//! normalized; rotation transforms accept any real value.

use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;
use crate::consts::{DEG_PER_HOUR, DEG_PER_MINUTE, DEG_PER_SECOND};

/// Rotation of each hand for one timestamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSet {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl AngleSet {
    /// Compute hand angles for a timestamp.
    ///
    /// The minute hand creeps 0.1° per second and the hour hand 0.5° per
    /// minute so neither jumps at its boundary.
    pub fn from_timestamp(t: &Timestamp) -> Self {
        let hours = f64::from(t.hour() % 12);
        let minutes = f64::from(t.minute());
        let seconds = f64::from(t.second());

        Self {
            second: seconds * DEG_PER_SECOND,
            minute: minutes * DEG_PER_MINUTE + seconds / 10.0,
            hour: hours * DEG_PER_HOUR + minutes / 2.0,
        }
    }
}
