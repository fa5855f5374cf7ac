use bytemuck::{Pod, Zeroable};

use super::Vec2;

/// Per-pass constants shared by every stage invocation.
///
/// `viewport_size` is in the same logical units as instance bounds; it is the
/// basis for converting positions to NDC.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Globals {
    pub viewport_size: Vec2,
}

impl Globals {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { viewport_size: Vec2::new(width, height) }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        let Vec2 { x, y } = self.viewport_size;
        x > 0.0 && y > 0.0 && x.is_finite() && y.is_finite()
    }
}
