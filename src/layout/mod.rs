//! Responsive layout engine
//!
//! `LayoutGeometry::compute` maps a viewport size to every dimension the clock
//! needs. It is a pure function of the viewport: same input, bit-identical
//! output. Pixel dimensions scale with `clock_size`; positions on the dial are
//! percentages (see `dial`).

pub mod dial;
pub mod frame;
pub mod proportions;

pub use dial::{Numeral, Placement};
pub use frame::LeafShape;

use serde::{Deserialize, Serialize};

use proportions::*;

/// Viewport in device-independent pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Length and width of one hand, with its pivot point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandGeometry {
    pub length: f64,
    pub width: f64,
    /// Pivot distance from the tip, as a fraction of `length`
    pub pivot: f64,
}

impl HandGeometry {
    fn scaled(clock_size: f64, length: f64, width: f64) -> Self {
        Self {
            length: clock_size * length,
            width: clock_size * width,
            pivot: HAND_PIVOT,
        }
    }

    /// Overhang past the pivot on the tail side
    pub fn tail(&self) -> f64 {
        self.length * (1.0 - self.pivot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hands {
    pub hour: HandGeometry,
    pub minute: HandGeometry,
    pub second: HandGeometry,
}

/// Size of a rectangular tick mark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkSize {
    pub width: f64,
    pub length: f64,
}

/// Rims, center dot and typography of the face
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceGeometry {
    pub outer_rim_padding: f64,
    pub outer_rim_border: f64,
    pub inner_rim_padding: f64,
    pub inner_rim_border: f64,
    pub center_dot: f64,
    pub brand_font: f64,
    pub brand_top_pct: f64,
    pub numeral_font: f64,
    pub hour_tick: MarkSize,
    pub minute_tick: MarkSize,
}

/// The digital time/date box shown beside the face
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitalBox {
    pub padding_v: f64,
    pub padding_h: f64,
    pub font_size: f64,
    pub date_font_size: f64,
    pub min_width: f64,
    pub max_width: f64,
}

/// Complete geometry for one viewport size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    /// Face diameter
    pub clock_size: f64,
    /// Sunburst ring outer diameter
    pub frame_size: f64,
    /// How far the frame's box extends past the face's box on each side
    pub frame_offset: f64,
    pub face: FaceGeometry,
    pub hands: Hands,
    pub digital: DigitalBox,
    /// Ray outline in frame pixels, shared by every ray
    pub leaf: LeafShape,
    /// Ray rotations about the frame center
    pub rays: Vec<Placement>,
    pub numerals: Vec<Numeral>,
    pub hour_ticks: Vec<Placement>,
    pub minute_ticks: Vec<Placement>,
}

impl LayoutGeometry {
    /// Compute the layout for a viewport.
    ///
    /// The face fits whichever dimension is tighter. Negative dimensions count
    /// as zero; there is no minimum size, so tiny viewports shrink the clock
    /// towards nothing.
    pub fn compute(viewport: ViewportSize) -> Self {
        let width = viewport.width.max(0.0);
        let height = viewport.height.max(0.0);
        let clock_size = (width * WIDTH_SHARE).min(height * HEIGHT_SHARE);
        let frame_size = clock_size * FRAME_SCALE;
        let frame_offset = (frame_size - clock_size) / 2.0;

        let s = clock_size;
        Self {
            clock_size,
            frame_size,
            frame_offset,
            face: FaceGeometry {
                outer_rim_padding: s * OUTER_RIM_PADDING,
                outer_rim_border: s * OUTER_RIM_BORDER,
                inner_rim_padding: s * INNER_RIM_PADDING,
                inner_rim_border: s * INNER_RIM_BORDER,
                center_dot: s * CENTER_DOT,
                brand_font: s * BRAND_FONT,
                brand_top_pct: BRAND_TOP_PCT,
                numeral_font: s * NUMERAL_FONT,
                hour_tick: MarkSize {
                    width: s * HOUR_TICK_WIDTH,
                    length: s * HOUR_TICK_LENGTH,
                },
                minute_tick: MarkSize {
                    width: s * MINUTE_TICK_WIDTH,
                    length: s * MINUTE_TICK_LENGTH,
                },
            },
            hands: Hands {
                hour: HandGeometry::scaled(s, HOUR_HAND_LENGTH, HOUR_HAND_WIDTH),
                minute: HandGeometry::scaled(s, MINUTE_HAND_LENGTH, MINUTE_HAND_WIDTH),
                second: HandGeometry::scaled(s, SECOND_HAND_LENGTH, SECOND_HAND_WIDTH),
            },
            digital: DigitalBox {
                padding_v: s * DIGITAL_PADDING_V,
                padding_h: s * DIGITAL_PADDING_H,
                font_size: s * DIGITAL_FONT,
                date_font_size: s * DIGITAL_DATE_FONT,
                min_width: s * DIGITAL_MIN_WIDTH,
                max_width: s * DIGITAL_MAX_WIDTH,
            },
            leaf: LeafShape::for_frame(frame_size),
            rays: frame::ray_placements(),
            numerals: dial::hour_numerals(),
            hour_ticks: dial::hour_ticks(),
            minute_ticks: dial::minute_ticks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_landscape_viewport() {
        let layout = LayoutGeometry::compute(ViewportSize::new(1000.0, 800.0));
        assert_eq!(layout.clock_size, 450.0);
        assert_eq!(layout.frame_size, 540.0);
        assert_eq!(layout.frame_offset, 45.0);
    }

    #[test]
    fn test_height_bound_viewport() {
        let layout = LayoutGeometry::compute(ViewportSize::new(2000.0, 500.0));
        assert_eq!(layout.clock_size, 400.0);
    }

    #[test]
    fn test_degenerate_viewports() {
        let zero = LayoutGeometry::compute(ViewportSize::new(0.0, 0.0));
        assert_eq!(zero.clock_size, 0.0);
        assert_eq!(zero.frame_offset, 0.0);
        assert_eq!(zero.rays.len(), 18);

        let negative = LayoutGeometry::compute(ViewportSize::new(-300.0, 600.0));
        assert_eq!(negative.clock_size, 0.0);
    }

    #[test]
    fn test_every_dimension_scales_with_clock_size() {
        let layout = LayoutGeometry::compute(ViewportSize::new(1000.0, 800.0));
        let face = layout.face;
        let hands = layout.hands;
        let digital = layout.digital;

        // (name, actual, expected at clock_size 450)
        let table = [
            ("outer_rim_padding", face.outer_rim_padding, 14.0625),
            ("outer_rim_border", face.outer_rim_border, 2.34),
            ("inner_rim_padding", face.inner_rim_padding, 9.36),
            ("inner_rim_border", face.inner_rim_border, 1.17),
            ("center_dot", face.center_dot, 14.0625),
            ("brand_font", face.brand_font, 16.425),
            ("numeral_font", face.numeral_font, 32.805),
            ("hour_tick.width", face.hour_tick.width, 2.34),
            ("hour_tick.length", face.hour_tick.length, 11.7),
            ("minute_tick.width", face.minute_tick.width, 1.17),
            ("minute_tick.length", face.minute_tick.length, 7.02),
            ("hour.length", hands.hour.length, 128.925),
            ("hour.width", hands.hour.width, 9.36),
            ("minute.length", hands.minute.length, 175.95),
            ("minute.width", hands.minute.width, 5.85),
            ("second.length", hands.second.length, 187.65),
            ("second.width", hands.second.width, 2.34),
            ("digital.padding_v", digital.padding_v, 13.5),
            ("digital.padding_h", digital.padding_h, 27.0),
            ("digital.font_size", digital.font_size, 29.25),
            ("digital.date_font_size", digital.date_font_size, 19.35),
            ("digital.min_width", digital.min_width, 247.5),
            ("digital.max_width", digital.max_width, 292.5),
        ];
        for (name, actual, expected) in table {
            assert!(
                (actual - expected).abs() < 1e-9,
                "{name}: got {actual}, expected {expected}"
            );
        }

        assert_eq!(face.brand_top_pct, 25.0);
        for hand in [hands.hour, hands.minute, hands.second] {
            assert_eq!(hand.pivot, 0.85);
        }
    }

    #[test]
    fn test_hand_pivot_tail() {
        let layout = LayoutGeometry::compute(ViewportSize::new(1000.0, 800.0));
        let hour = layout.hands.hour;
        assert!((hour.tail() - hour.length * 0.15).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_clock_size_fits_tighter_side(w in 1.0f64..8000.0, h in 1.0f64..8000.0) {
            let layout = LayoutGeometry::compute(ViewportSize::new(w, h));
            prop_assert_eq!(layout.clock_size, (w * 0.45).min(h * 0.8));
            prop_assert!(layout.frame_size > layout.clock_size);
            prop_assert!(layout.frame_offset > 0.0);
        }

        #[test]
        fn prop_hand_lengths_ordered(w in 1.0f64..8000.0, h in 1.0f64..8000.0) {
            let hands = LayoutGeometry::compute(ViewportSize::new(w, h)).hands;
            prop_assert!(hands.hour.length < hands.minute.length);
            prop_assert!(hands.minute.length < hands.second.length);
        }

        #[test]
        fn prop_layout_is_bit_identical(w in 0.0f64..8000.0, h in 0.0f64..8000.0) {
            let v = ViewportSize::new(w, h);
            let a = LayoutGeometry::compute(v);
            let b = LayoutGeometry::compute(v);
            prop_assert_eq!(a.clock_size.to_bits(), b.clock_size.to_bits());
            prop_assert_eq!(a.leaf.control.y.to_bits(), b.leaf.control.y.to_bits());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_catalogue_counts(w in 0.0f64..8000.0, h in 0.0f64..8000.0) {
            let layout = LayoutGeometry::compute(ViewportSize::new(w, h));
            prop_assert_eq!(layout.rays.len(), 18);
            prop_assert_eq!(layout.numerals.len(), 12);
            prop_assert_eq!(layout.hour_ticks.len(), 12);
            prop_assert_eq!(layout.minute_ticks.len(), 48);
        }
    }
}
