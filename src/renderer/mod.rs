//! Markup rendering
//!
//! Turns a `FrameDescriptor` into SVG (dial) and HTML (dial + digital box).

pub mod palette;
pub mod svg;

pub use palette::Theme;
pub use svg::{render_html, render_svg};
