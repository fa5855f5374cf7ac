use bytemuck::{Pod, Zeroable};

/// Per-edge widths (logical pixels), e.g. border widths.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn all(w: f32) -> Self {
        Self { top: w, right: w, bottom: w, left: w }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Width of the left or right edge for a center-relative `x`.
    ///
    /// Points on the vertical center line take the left edge, unlike
    /// [`Quadrant::of`](super::Quadrant::of) which sends them right; quad
    /// borders have always resolved ties this way.
    #[inline]
    pub fn vertical_for(self, x: f32) -> f32 {
        if x <= 0.0 { self.left } else { self.right }
    }

    /// Width of the top or bottom edge for a center-relative `y`.
    ///
    /// Points on the horizontal center line take the top edge (the opposite
    /// of the corner-radius tie rule, as with [`Edges::vertical_for`]).
    #[inline]
    pub fn horizontal_for(self, y: f32) -> f32 {
        if y <= 0.0 { self.top } else { self.bottom }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_selection() {
        let e = Edges::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(e.vertical_for(-2.0), 4.0);
        assert_eq!(e.vertical_for(2.0), 2.0);
        assert_eq!(e.horizontal_for(-2.0), 1.0);
        assert_eq!(e.horizontal_for(2.0), 3.0);
    }

    #[test]
    fn center_lines_take_top_left() {
        let e = Edges::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(e.vertical_for(0.0), 4.0);
        assert_eq!(e.horizontal_for(0.0), 1.0);
    }

    #[test]
    fn zero_detection() {
        assert!(Edges::zero().is_zero());
        assert!(!Edges::new(0.0, 0.0, 0.5, 0.0).is_zero());
    }
}
