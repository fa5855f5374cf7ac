use bytemuck::{Pod, Zeroable};

use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Used for instance geometry, for clip regions (`content_mask`) and for the
/// derived rectangles the stages build from them (the dilated shadow box).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Bounds {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Bounds {
    /// Clip region large enough that nothing inside a sane viewport is clipped.
    ///
    /// Kept well below `f32::MAX` so interpolated clip distances stay finite.
    pub const UNCLIPPED: Bounds = Bounds::new(-1.0e7, -1.0e7, 2.0e7, 2.0e7);

    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn half_size(self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.half_size()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Grows the rectangle by `amount` on every side.
    #[inline]
    pub fn dilate(self, amount: f32) -> Self {
        Self {
            origin: self.origin - Vec2::splat(amount),
            size: self.size + Vec2::splat(2.0 * amount),
        }
    }

    /// Shrinks the rectangle by `amount` on every side. May produce a negative size.
    #[inline]
    pub fn inset(self, amount: f32) -> Self {
        self.dilate(-amount)
    }

    /// Position of a unit-square selector (`0..=1` per axis) inside the rectangle.
    #[inline]
    pub fn point_at(self, unit: Vec2) -> Vec2 {
        self.origin + unit * self.size
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    #[inline]
    pub fn intersect(self, other: Bounds) -> Option<Bounds> {
        let lo = self.origin.max(other.origin);
        let hi = self.max().min(other.max());
        let size = hi - lo;

        if size.x <= 0.0 || size.y <= 0.0 {
            None
        } else {
            Some(Bounds::from_origin_size(lo, size))
        }
    }
}
