use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color, every channel in `[0, 1]`.
///
/// Stage outputs use this form; coverage only ever scales `a`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Same color with alpha multiplied by `factor`.
    #[inline]
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self { a: self.a * factor, ..self }
    }

    /// Linear interpolation `self * (1 - t) + other * t` on all four channels.
    #[inline]
    pub fn mix(self, other: Rgba, t: f32) -> Self {
        let s = 1.0 - t;
        Self::new(
            self.r * s + other.r * t,
            self.g * s + other.g * t,
            self.b * s + other.b * t,
            self.a * s + other.a * t,
        )
    }
}

/// Porter-Duff source-over of two straight-alpha colors.
///
/// Returns transparent black when both inputs are fully transparent, instead of
/// dividing by a zero alpha.
#[inline]
pub fn over(below: Rgba, above: Rgba) -> Rgba {
    let below_weight = below.a * (1.0 - above.a);
    let alpha = above.a + below_weight;
    if alpha <= 0.0 {
        return Rgba::transparent();
    }

    Rgba::new(
        (above.r * above.a + below.r * below_weight) / alpha,
        (above.g * above.a + below.g * below_weight) / alpha,
        (above.b * above.a + below.b * below_weight) / alpha,
        alpha,
    )
}
