//! Wall-clock samples and the time-to-angle transform
//!
//! Everything here is pure: an `AngleSet` depends only on the `Timestamp`
//! it was computed from.

pub mod angles;
pub mod timestamp;

pub use angles::AngleSet;
pub use timestamp::{DigitalLabels, TickSample, Timestamp};
