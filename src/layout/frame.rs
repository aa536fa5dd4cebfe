//! Sunburst frame generation
//!
//! The frame is a ring of identical rays. Each ray is a leaf (curved triangle
//! whose point sits on the base radius and whose curved edge reaches past the
//! tip radius) with a rounded rectangle hanging inward from the base. One
//! shape is computed in frame pixels, pointing at 12 o'clock; every ray is
//! that shape rotated about the frame center.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::dial::Placement;
use super::proportions::*;
use crate::consts::DIAL_CENTER;

/// Ray outline in frame pixels, unrotated (pointing up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeafShape {
    /// Leaf point on the base radius
    pub base: DVec2,
    /// Left end of the curved edge
    pub tip_left: DVec2,
    /// Quadratic control point of the curved edge
    pub control: DVec2,
    /// Right end of the curved edge
    pub tip_right: DVec2,
    /// Top-left corner of the base rectangle
    pub rect_origin: DVec2,
    pub rect_size: DVec2,
    pub corner_radius: f64,
    pub stroke_width: f64,
}

impl LeafShape {
    /// Build the ray outline for a frame of the given diameter
    pub fn for_frame(frame_size: f64) -> Self {
        let scale = frame_size / REFERENCE_FRAME_SIZE;
        let center = frame_size / 2.0;
        let base_y = center - frame_size * RAY_BASE_RADIUS;
        let tip_y = center - frame_size * RAY_TIP_RADIUS;
        let half_width = RAY_LEAF_WIDTH * scale / 2.0;

        Self {
            base: DVec2::new(center, base_y),
            tip_left: DVec2::new(center - half_width, tip_y),
            control: DVec2::new(center, tip_y - RAY_CURVE_BULGE * scale),
            tip_right: DVec2::new(center + half_width, tip_y),
            rect_origin: DVec2::new(center - half_width, base_y),
            rect_size: DVec2::new(RAY_LEAF_WIDTH * scale, RAY_LEAF_HEIGHT * scale),
            corner_radius: RAY_CORNER_RADIUS * scale,
            stroke_width: RAY_STROKE * scale,
        }
    }
}

/// Ray rotations about the frame center, 360/RAY_COUNT degrees apart
pub fn ray_placements() -> Vec<Placement> {
    let step = 360.0 / RAY_COUNT as f64;
    (0..RAY_COUNT)
        .map(|i| Placement {
            pos: DVec2::splat(DIAL_CENTER),
            rotation_deg: i as f64 * step,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_ray_count_and_spacing() {
        let rays = ray_placements();
        assert_eq!(rays.len(), 18);
        for (i, ray) in rays.iter().enumerate() {
            assert_eq!(ray.rotation_deg, i as f64 * 20.0);
            assert_eq!(ray.pos, DVec2::splat(50.0));
        }
    }

    #[test]
    fn test_reference_leaf() {
        // At the reference size the leaf uses the raw design units
        let leaf = LeafShape::for_frame(540.0);
        assert!((leaf.base.y - (270.0 - 540.0 * 0.44)).abs() < EPS);
        assert!((leaf.tip_left.y - (270.0 - 540.0 * 0.49)).abs() < EPS);
        assert!((leaf.tip_right.x - leaf.tip_left.x - 30.0).abs() < EPS);
        assert!((leaf.control.y - (leaf.tip_left.y - 10.0)).abs() < EPS);
        assert_eq!(leaf.rect_size, DVec2::new(30.0, 50.0));
        assert_eq!(leaf.corner_radius, 2.0);
        assert_eq!(leaf.stroke_width, 0.5);
    }

    #[test]
    fn test_leaf_scales_linearly() {
        let small = LeafShape::for_frame(270.0);
        let large = LeafShape::for_frame(540.0);
        assert!((large.rect_size.x - 2.0 * small.rect_size.x).abs() < EPS);
        assert!((large.base.y - 2.0 * small.base.y).abs() < EPS);
        // Tip is always farther from center than the base
        assert!(small.tip_left.y < small.base.y);
    }
}
