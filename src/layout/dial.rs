//! Dial marks: hour numerals, hour ticks and minute ticks
//!
//! Positions are percentages of the dial (0..100 on each axis, origin top-left),
//! so they only get scaled once, by whoever draws them.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::proportions::{HOUR_TICK_RADIUS_PCT, MINUTE_TICK_RADIUS_PCT, NUMERAL_RADIUS_PCT};
use crate::consts::{DEG_PER_HOUR, DEG_PER_MINUTE};
use crate::dial_point;

/// Marks per hour step on the minute ring
const MINUTES_PER_HOUR_MARK: usize = 5;

/// A point on the dial plus the rotation applied to whatever sits there
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Center position in dial percent
    pub pos: DVec2,
    /// Clockwise rotation in degrees
    pub rotation_deg: f64,
}

/// An hour numeral ("12", "1", ... "11")
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Numeral {
    pub value: u32,
    pub placement: Placement,
}

/// The 12 hour numerals, starting at 12 o'clock. Numerals stay upright.
pub fn hour_numerals() -> Vec<Numeral> {
    (0..12u32)
        .map(|i| Numeral {
            value: if i == 0 { 12 } else { i },
            placement: Placement {
                pos: dial_point(NUMERAL_RADIUS_PCT, f64::from(i) * DEG_PER_HOUR),
                rotation_deg: 0.0,
            },
        })
        .collect()
}

/// The 12 hour ticks, each rotated to point at the center
pub fn hour_ticks() -> Vec<Placement> {
    (0..12u32)
        .map(|i| {
            let angle = f64::from(i) * DEG_PER_HOUR;
            Placement {
                pos: dial_point(HOUR_TICK_RADIUS_PCT, angle),
                rotation_deg: angle,
            }
        })
        .collect()
}

/// The 48 minute ticks; positions shared with an hour tick are skipped
pub fn minute_ticks() -> Vec<Placement> {
    (0..60usize)
        .filter(|i| i % MINUTES_PER_HOUR_MARK != 0)
        .map(|i| {
            let angle = i as f64 * DEG_PER_MINUTE;
            Placement {
                pos: dial_point(MINUTE_TICK_RADIUS_PCT, angle),
                rotation_deg: angle,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_numeral_labels() {
        let numerals = hour_numerals();
        assert_eq!(numerals.len(), 12);
        assert_eq!(numerals[0].value, 12);
        let values: Vec<u32> = numerals.iter().map(|n| n.value).collect();
        assert_eq!(values, vec![12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_twelve_sits_on_top() {
        let twelve = hour_numerals()[0].placement;
        assert!((twelve.pos.x - 50.0).abs() < EPS);
        assert!((twelve.pos.y - 14.0).abs() < EPS);

        let three = hour_numerals()[3].placement;
        assert!((three.pos.x - 86.0).abs() < EPS);
        assert!((three.pos.y - 50.0).abs() < EPS);
    }

    #[test]
    fn test_minute_ticks_skip_hours() {
        let ticks = minute_ticks();
        assert_eq!(ticks.len(), 48);
        for tick in &ticks {
            let steps = tick.rotation_deg / 6.0;
            assert_eq!(steps.fract(), 0.0);
            assert_ne!(steps as usize % 5, 0, "tick at {}° overlaps an hour", tick.rotation_deg);
        }
        assert_eq!(ticks[0].rotation_deg, 6.0);
        assert_eq!(ticks[47].rotation_deg, 354.0);
    }

    #[test]
    fn test_tick_radii() {
        for tick in hour_ticks() {
            let r = (tick.pos - DVec2::splat(50.0)).length();
            assert!((r - 41.0).abs() < EPS);
        }
        for tick in minute_ticks() {
            let r = (tick.pos - DVec2::splat(50.0)).length();
            assert!((r - 43.0).abs() < EPS);
        }
    }
}
