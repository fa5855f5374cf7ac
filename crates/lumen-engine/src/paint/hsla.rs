use bytemuck::{Pod, Zeroable};

use super::Rgba;

/// Hue/saturation/lightness color with straight alpha.
///
/// `h` covers a full turn in `[0, 1)`; `s`, `l` and `a` are in `[0, 1]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl From<Hsla> for Rgba {
    #[inline]
    fn from(hsla: Hsla) -> Self {
        hsla_to_rgba(hsla)
    }
}

impl From<Rgba> for Hsla {
    #[inline]
    fn from(rgba: Rgba) -> Self {
        rgba_to_hsla(rgba)
    }
}

/// Converts HSLA to straight RGBA with the six-sector (60°) method.
pub fn hsla_to_rgba(hsla: Hsla) -> Rgba {
    let h = hsla.h * 6.0;
    let s = hsla.s;
    let l = hsla.l;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..1.0).contains(&h) {
        (c, x, 0.0)
    } else if (1.0..2.0).contains(&h) {
        (x, c, 0.0)
    } else if (2.0..3.0).contains(&h) {
        (0.0, c, x)
    } else if (3.0..4.0).contains(&h) {
        (0.0, x, c)
    } else if (4.0..5.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgba::new(r + m, g + m, b + m, hsla.a)
}

/// Inverse of [`hsla_to_rgba`].
///
/// Achromatic colors (all channels equal) report `h = 0` and `s = 0`.
pub fn rgba_to_hsla(rgba: Rgba) -> Hsla {
    let max = rgba.r.max(rgba.g).max(rgba.b);
    let min = rgba.r.min(rgba.g).min(rgba.b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta <= 0.0 {
        return Hsla::new(0.0, 0.0, l, rgba.a);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());

    let sector = if max == rgba.r {
        ((rgba.g - rgba.b) / delta).rem_euclid(6.0)
    } else if max == rgba.g {
        (rgba.b - rgba.r) / delta + 2.0
    } else {
        (rgba.r - rgba.g) / delta + 4.0
    };

    let mut h = sector / 6.0;
    if h >= 1.0 {
        h -= 1.0;
    }

    Hsla::new(h, s.min(1.0), l, rgba.a)
}
