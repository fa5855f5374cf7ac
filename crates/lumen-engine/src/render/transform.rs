//! Logical-to-device transform and rectangular clip distances.

use crate::coords::{Bounds, Vec2};

/// Unit-square corner selectors in triangle-strip order.
pub const UNIT_VERTICES: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Homogeneous clip-space position (`x`, `y` in NDC, `z = 0`, `w = 1`).
pub type DevicePosition = [f32; 4];

/// Maps a unit-square corner of `bounds` to normalized device coordinates.
///
/// Logical space has +Y down, NDC has +Y up, hence the `(2, -2)` scale.
#[inline]
pub fn to_device_position(
    unit_vertex: Vec2,
    bounds: Bounds,
    viewport_size: Vec2,
) -> DevicePosition {
    let position = bounds.point_at(unit_vertex);
    let ndc = position / viewport_size * Vec2::new(2.0, -2.0) + Vec2::new(-1.0, 1.0);
    [ndc.x, ndc.y, 0.0, 1.0]
}

/// Inverse of the viewport mapping in [`to_device_position`], for `x`/`y` only.
#[inline]
pub fn device_to_logical(position: DevicePosition, viewport_size: Vec2) -> Vec2 {
    let ndc = Vec2::new(position[0], position[1]);
    (ndc - Vec2::new(-1.0, 1.0)) / Vec2::new(2.0, -2.0) * viewport_size
}

/// Signed distances from a point to the left, right, top and bottom clip edges.
///
/// Positive means inside. A sample is clipped when any distance is `<= 0`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipDistance(pub [f32; 4]);

impl ClipDistance {
    /// Distances from `position` to the edges of `clip_bounds`.
    #[inline]
    pub fn at(position: Vec2, clip_bounds: Bounds) -> Self {
        let max = clip_bounds.max();
        Self([
            position.x - clip_bounds.origin.x,
            max.x - position.x,
            position.y - clip_bounds.origin.y,
            max.y - position.y,
        ])
    }

    /// True when any distance is `<= 0` or NaN.
    #[inline]
    pub fn is_clipped(self) -> bool {
        !self.0.iter().all(|d| *d > 0.0)
    }

    /// Bilinear blend of per-vertex distances given in [`UNIT_VERTICES`] order.
    ///
    /// Clip distances are affine in position, so this is exact for any point
    /// of the primitive.
    #[inline]
    pub fn interpolate(corners: &[ClipDistance; 4], unit: Vec2) -> Self {
        let mut out = [0.0f32; 4];
        for (i, slot) in out.iter_mut().enumerate() {
            let top = corners[0].0[i] * (1.0 - unit.x) + corners[1].0[i] * unit.x;
            let bottom = corners[2].0[i] * (1.0 - unit.x) + corners[3].0[i] * unit.x;
            *slot = top * (1.0 - unit.y) + bottom * unit.y;
        }
        Self(out)
    }
}

/// Clip distances for the corner of `bounds` selected by `unit_vertex`.
#[inline]
pub fn distance_from_clip_rect(
    unit_vertex: Vec2,
    bounds: Bounds,
    clip_bounds: Bounds,
) -> ClipDistance {
    ClipDistance::at(bounds.point_at(unit_vertex), clip_bounds)
}
