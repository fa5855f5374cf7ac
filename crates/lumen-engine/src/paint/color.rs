use super::Rgba;

/// Linear premultiplied RGBA color, the storage format of a `Framebuffer`.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Stages emit straight `Rgba`; [`Color::blend`] converts while compositing, the
/// same way a `SrcAlpha, OneMinusSrcAlpha` color / `One, OneMinusSrcAlpha`
/// alpha blend state would.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from a straight-alpha color.
    #[inline]
    pub fn from_straight(c: Rgba) -> Self {
        let a = c.a.clamp(0.0, 1.0);
        Self {
            r: c.r.clamp(0.0, 1.0) * a,
            g: c.g.clamp(0.0, 1.0) * a,
            b: c.b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns the straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> Rgba {
        if self.a <= 0.0 {
            Rgba::transparent()
        } else {
            let inv = 1.0 / self.a;
            Rgba::new(self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Composites a straight-alpha source over this color (source-over).
    ///
    /// Sources with non-finite channels are ignored so a single bad sample
    /// cannot poison the target.
    #[inline]
    pub fn blend(&mut self, src: Rgba) {
        if !src.is_finite() {
            return;
        }
        let src = Self::from_straight(src);
        if src.a <= 0.0 {
            return;
        }
        let keep = 1.0 - src.a;
        self.r = src.r + self.r * keep;
        self.g = src.g + self.g * keep;
        self.b = src.b + self.b * keep;
        self.a = src.a + self.a * keep;
    }

    /// Quantizes to straight-alpha 8-bit RGBA (no transfer function applied).
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let s = self.to_straight();
        [quantize(s.r), quantize(s.g), quantize(s.b), quantize(s.a)]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[inline]
fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
