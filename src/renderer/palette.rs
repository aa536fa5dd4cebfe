//! Walnut color theme
//!
//! Colors are CSS color strings so they can go straight into SVG/HTML.

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub outer_rim: &'static str,
    pub outer_rim_border: &'static str,
    pub inner_rim: &'static str,
    pub inner_rim_border: &'static str,
    pub dial: &'static str,
    pub ray_fill: &'static str,
    pub ray_stroke: &'static str,
    pub numeral: &'static str,
    pub brand: &'static str,
    pub hour_tick: &'static str,
    pub minute_tick: &'static str,
    pub hand: &'static str,
    pub second_hand: &'static str,
    pub center_dot: &'static str,
    pub digital_text: &'static str,
    pub digital_background: &'static str,
    pub digital_border: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        WALNUT
    }
}

pub const WALNUT: Theme = Theme {
    outer_rim: "#654321",
    outer_rim_border: "#3E2723",
    inner_rim: "#A0522D",
    inner_rim_border: "#5D4E37",
    dial: "#f8f8f8",
    ray_fill: "#8B4513",
    ray_stroke: "#654321",
    numeral: "#1f2937",
    brand: "#374151",
    hour_tick: "#1f2937",
    minute_tick: "#374151",
    hand: "#2c2c2c",
    second_hand: "#DC143C",
    center_dot: "#333333",
    digital_text: "#374151",
    digital_background: "#ffffff",
    digital_border: "#8B4513",
};
