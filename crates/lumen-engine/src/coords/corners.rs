use bytemuck::{Pod, Zeroable};

use super::Vec2;

/// Which quarter of a rectangle a point falls in, relative to the center.
///
/// Encoded as two bits: bit 0 set = right half, bit 1 set = bottom half.
/// A coordinate of exactly `0.0` belongs to the right/bottom half.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    TopLeft = 0b00,
    TopRight = 0b01,
    BottomLeft = 0b10,
    BottomRight = 0b11,
}

impl Quadrant {
    /// Quadrant of a center-relative point.
    #[inline]
    pub fn of(center_to_point: Vec2) -> Self {
        let right = (center_to_point.x >= 0.0) as u8;
        let bottom = (center_to_point.y >= 0.0) as u8;
        Self::from_bits(right | (bottom << 1))
    }

    #[inline]
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Quadrant::TopLeft,
            0b01 => Quadrant::TopRight,
            0b10 => Quadrant::BottomLeft,
            _ => Quadrant::BottomRight,
        }
    }
}

/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Each radius must be `>= 0` and at most half of the smaller side of the
/// rectangle it rounds. Stages do not clamp; larger radii give wrong shapes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Corners {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl Corners {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn select(self, quadrant: Quadrant) -> f32 {
        match quadrant {
            Quadrant::TopLeft => self.top_left,
            Quadrant::TopRight => self.top_right,
            Quadrant::BottomLeft => self.bottom_left,
            Quadrant::BottomRight => self.bottom_right,
        }
    }

    /// Radius of the corner nearest to a center-relative point.
    #[inline]
    pub fn for_point(self, center_to_point: Vec2) -> f32 {
        self.select(Quadrant::of(center_to_point))
    }

    #[inline]
    pub fn max(self) -> f32 {
        self.top_left.max(self.top_right).max(self.bottom_right).max(self.bottom_left)
    }
}
