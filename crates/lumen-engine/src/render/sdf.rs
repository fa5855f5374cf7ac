//! Rounded-rectangle signed distance and analytic edge coverage.

use crate::coords::Vec2;

/// Clamps to `[0, 1]`.
#[inline]
pub fn saturate(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Anti-aliased coverage for a signed distance: a one-pixel ramp centered on
/// the boundary (1 at `d <= -0.5`, 0 at `d >= 0.5`).
#[inline]
pub fn coverage(distance: f32) -> f32 {
    saturate(0.5 - distance)
}

/// Signed distance from a center-relative point to a rounded rectangle.
///
/// Negative inside, zero on the boundary, positive outside. Exact as long as
/// `corner_radius <= min(half_size.x, half_size.y)`.
#[inline]
pub fn rounded_rect_distance(center_to_point: Vec2, half_size: Vec2, corner_radius: f32) -> f32 {
    let rounded_edge_to_point = center_to_point.abs() - half_size + Vec2::splat(corner_radius);
    rounded_edge_to_point.max(Vec2::zero()).length() + rounded_edge_to_point.max_element().min(0.0)
        - corner_radius
}
