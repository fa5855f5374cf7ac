use anyhow::{Context, ensure};

use crate::coords::Globals;
use crate::paint::{Color, Rgba};

/// CPU render target: one premultiplied [`Color`] per pixel, row-major.
///
/// One pixel covers one logical unit; pixel `(x, y)` samples the logical point
/// `(x + 0.5, y + 0.5)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Creates a transparent target.
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        ensure!(width > 0 && height > 0, "framebuffer size must be non-zero, got {width}x{height}");
        let len = width
            .checked_mul(height)
            .with_context(|| format!("framebuffer size {width}x{height} overflows"))?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .with_context(|| format!("cannot allocate a {width}x{height} framebuffer"))?;
        pixels.resize(len, Color::transparent());

        Ok(Self { width, height, pixels })
    }

    /// Creates a target covering the whole viewport (rounded up to whole pixels).
    pub fn for_viewport(globals: Globals) -> anyhow::Result<Self> {
        ensure!(globals.is_valid(), "invalid viewport size {:?}", globals.viewport_size);
        let size = globals.viewport_size;
        Self::new(size.x.ceil() as usize, size.y.ceil() as usize)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(Color::from_straight(color));
    }

    /// Straight-alpha RGBA8 bytes, row-major, 4 bytes per pixel.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_rounds_up() {
        let fb = Framebuffer::for_viewport(Globals::new(10.5, 3.0)).unwrap();
        assert_eq!((fb.width(), fb.height()), (11, 3));
        assert_eq!(fb.pixels().len(), 33);
        assert_eq!(fb.pixel(10, 2), Some(Color::transparent()));
        assert_eq!(fb.pixel(11, 0), None);
    }

    #[test]
    fn rejects_empty_and_invalid_sizes() {
        assert!(Framebuffer::new(0, 4).is_err());
        assert!(Framebuffer::for_viewport(Globals::new(0.0, 10.0)).is_err());
        assert!(Framebuffer::for_viewport(Globals::new(f32::NAN, 10.0)).is_err());
    }

    #[test]
    fn oversized_target_is_an_error() {
        assert!(Framebuffer::for_viewport(Globals::new(4.0e9, 4.0e9)).is_err());
        assert!(Framebuffer::new(usize::MAX / 2, 2).is_err());
    }

    #[test]
    fn clear_and_export() {
        let mut fb = Framebuffer::new(2, 1).unwrap();
        fb.clear(Rgba::new(1.0, 0.0, 0.0, 0.5));
        assert_eq!(fb.to_rgba8(), vec![255, 0, 0, 128, 255, 0, 0, 128]);
    }
}
