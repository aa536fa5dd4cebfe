//! Sunburst Clock - a responsive analog/digital wall clock
//!
//! Core modules:
//! - `time`: Timestamps and the time-to-angle transform
//! - `layout`: Viewport-driven geometry for face, ticks, hands and sunburst frame
//! - `composer`: Folds host events into a single frame descriptor
//! - `widget`: Mounts a composer on a host and owns its timer/listeners
//! - `platform`: Browser and headless host implementations
//! - `renderer`: SVG rendering of frame descriptors

pub mod composer;
pub mod config;
pub mod error;
pub mod host;
pub mod layout;
pub mod platform;
pub mod renderer;
pub mod time;
pub mod widget;

pub use composer::{ClockEvent, Composer, FrameDescriptor};
pub use config::ClockConfig;
pub use error::{ClockError, ClockResult};
pub use host::Host;
pub use layout::{LayoutGeometry, ViewportSize};
pub use time::{AngleSet, DigitalLabels, TickSample, Timestamp};
pub use widget::ClockWidget;

use glam::DVec2;

/// Clock configuration constants
pub mod consts {
    /// Default tick cadence
    pub const TICK_INTERVAL_MS: u32 = 1000;

    /// Degrees swept per second / minute / hour mark
    pub const DEG_PER_SECOND: f64 = 6.0;
    pub const DEG_PER_MINUTE: f64 = 6.0;
    pub const DEG_PER_HOUR: f64 = 30.0;

    /// Side length of the normalized dial; positions are percentages of it
    pub const DIAL_UNITS: f64 = 100.0;
    /// Dial center in percentage coordinates
    pub const DIAL_CENTER: f64 = DIAL_UNITS / 2.0;

    /// Offset that turns a clock angle (0 = 12 o'clock) into a math angle (0 = +x)
    pub const TWELVE_O_CLOCK_OFFSET_DEG: f64 = -90.0;
}

/// Convert polar (r, theta degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta_deg: f64) -> DVec2 {
    let theta = theta_deg.to_radians();
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Position of a dial mark in percentage coordinates.
///
/// `clock_deg` is measured clockwise from 12 o'clock; screen y grows downward,
/// so a plain math rotation of `clock_deg - 90` lands on the right spot.
#[inline]
pub fn dial_point(radius_pct: f64, clock_deg: f64) -> DVec2 {
    let center = DVec2::splat(consts::DIAL_CENTER);
    center + polar_to_cartesian(radius_pct, clock_deg + consts::TWELVE_O_CLOCK_OFFSET_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_dial_point_cardinals() {
        let top = dial_point(40.0, 0.0);
        assert!((top.x - 50.0).abs() < EPS);
        assert!((top.y - 10.0).abs() < EPS);

        let three = dial_point(40.0, 90.0);
        assert!((three.x - 90.0).abs() < EPS);
        assert!((three.y - 50.0).abs() < EPS);

        let six = dial_point(40.0, 180.0);
        assert!((six.x - 50.0).abs() < EPS);
        assert!((six.y - 90.0).abs() < EPS);

        let nine = dial_point(40.0, 270.0);
        assert!((nine.x - 10.0).abs() < EPS);
        assert!((nine.y - 50.0).abs() < EPS);
    }

    #[test]
    fn test_polar_to_cartesian_length() {
        let p = polar_to_cartesian(12.5, 33.0);
        assert!((p.length() - 12.5).abs() < EPS);
    }
}
