//! Design proportions of the clock face
//!
//! Every dimension is a multiplier of `clock_size` (the dial diameter) unless
//! noted otherwise. The values were tuned together so hands, ticks and
//! numerals stay consistent across sizes; change them as a set.
//!
//! Relationships that must hold:
//! - `HOUR_HAND_LENGTH < MINUTE_HAND_LENGTH < SECOND_HAND_LENGTH` (checked below)
//! - `FRAME_SCALE > 1`, so the sunburst ring sits outside the face
//! - `NUMERAL_RADIUS_PCT < HOUR_TICK_RADIUS_PCT < MINUTE_TICK_RADIUS_PCT < 50`

/// Share of viewport width the face may take (the rest hosts the digital display)
pub const WIDTH_SHARE: f64 = 0.45;
/// Share of viewport height the face may take
pub const HEIGHT_SHARE: f64 = 0.8;
/// Frame diameter relative to face diameter
pub const FRAME_SCALE: f64 = 1.2;

// Hands
pub const HOUR_HAND_LENGTH: f64 = 0.2865;
pub const HOUR_HAND_WIDTH: f64 = 0.0208;
pub const MINUTE_HAND_LENGTH: f64 = 0.391;
pub const MINUTE_HAND_WIDTH: f64 = 0.013;
pub const SECOND_HAND_LENGTH: f64 = 0.417;
pub const SECOND_HAND_WIDTH: f64 = 0.0052;
/// Pivot position along a hand, measured from its tip (fraction of length)
pub const HAND_PIVOT: f64 = 0.85;

// Rims
pub const OUTER_RIM_PADDING: f64 = 0.03125;
pub const OUTER_RIM_BORDER: f64 = 0.0052;
pub const INNER_RIM_PADDING: f64 = 0.0208;
pub const INNER_RIM_BORDER: f64 = 0.0026;
pub const CENTER_DOT: f64 = 0.03125;

// Typography
pub const BRAND_FONT: f64 = 0.0365;
/// Brand label distance from the top of the dial (percent)
pub const BRAND_TOP_PCT: f64 = 25.0;
pub const NUMERAL_FONT: f64 = 0.0729;

// Tick marks
pub const HOUR_TICK_WIDTH: f64 = 0.0052;
pub const HOUR_TICK_LENGTH: f64 = 0.026;
pub const MINUTE_TICK_WIDTH: f64 = 0.0026;
pub const MINUTE_TICK_LENGTH: f64 = 0.0156;

// Radial placement on a 100-unit dial
pub const NUMERAL_RADIUS_PCT: f64 = 36.0;
pub const HOUR_TICK_RADIUS_PCT: f64 = 41.0;
pub const MINUTE_TICK_RADIUS_PCT: f64 = 43.0;

// Digital display box
pub const DIGITAL_PADDING_V: f64 = 0.03;
pub const DIGITAL_PADDING_H: f64 = 0.06;
pub const DIGITAL_FONT: f64 = 0.065;
pub const DIGITAL_DATE_FONT: f64 = 0.043;
pub const DIGITAL_MIN_WIDTH: f64 = 0.55;
pub const DIGITAL_MAX_WIDTH: f64 = 0.65;

// Sunburst rays, in units of the 540px reference frame unless noted
pub const RAY_COUNT: usize = 18;
pub const REFERENCE_FRAME_SIZE: f64 = 540.0;
/// Radius of the leaf base, as a fraction of frame size
pub const RAY_BASE_RADIUS: f64 = 0.44;
/// Radius of the leaf tip, as a fraction of frame size
pub const RAY_TIP_RADIUS: f64 = 0.49;
pub const RAY_LEAF_WIDTH: f64 = 30.0;
pub const RAY_LEAF_HEIGHT: f64 = 50.0;
/// How far the leaf's curved edge bulges past the tip
pub const RAY_CURVE_BULGE: f64 = 10.0;
pub const RAY_STROKE: f64 = 0.5;
pub const RAY_CORNER_RADIUS: f64 = 2.0;

const _: () = assert!(HOUR_HAND_LENGTH < MINUTE_HAND_LENGTH);
const _: () = assert!(MINUTE_HAND_LENGTH < SECOND_HAND_LENGTH);
const _: () = assert!(FRAME_SCALE > 1.0);
const _: () = assert!(NUMERAL_RADIUS_PCT < HOUR_TICK_RADIUS_PCT);
const _: () = assert!(HOUR_TICK_RADIUS_PCT < MINUTE_TICK_RADIUS_PCT);
const _: () = assert!(MINUTE_TICK_RADIUS_PCT < 50.0);
const _: () = assert!(RAY_BASE_RADIUS < RAY_TIP_RADIUS && RAY_TIP_RADIUS < 0.5);
const _: () = assert!(DIGITAL_MIN_WIDTH <= DIGITAL_MAX_WIDTH);
