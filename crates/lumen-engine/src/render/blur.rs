//! Analytic Gaussian blur of a rounded-rectangle silhouette.
//!
//! The horizontal integral has a closed form through `erf`; the vertical one
//! does not (corners couple the axes) and is approximated by midpoint
//! quadrature over the 3σ support.

use core::f32::consts::{FRAC_1_SQRT_2, PI};

use crate::coords::Vec2;

/// Quadrature steps used unless configured otherwise.
pub const DEFAULT_BLUR_SAMPLES: u32 = 4;

/// Blur radii below this render as a hard-edged shape instead.
///
/// At zero the Gaussian degenerates to a division by zero.
pub const MIN_BLUR_RADIUS: f32 = 1.0e-3;

/// Normal density with standard deviation `sigma`, centered at 0.
#[inline]
pub fn gaussian(x: f32, sigma: f32) -> f32 {
    (-(x * x) / (2.0 * sigma * sigma)).exp() / ((2.0 * PI).sqrt() * sigma)
}

/// Error function, rational approximation (Abramowitz & Stegun 7.1.27).
///
/// Absolute error stays below `5e-4`, plenty for a visual blur.
#[inline]
pub fn erf(x: f32) -> f32 {
    let s = x.signum();
    let a = x.abs();
    let t = 1.0 + (0.278_393 + (0.230_389 + (0.000_972 + 0.078_108 * a) * a) * a) * a;
    let t2 = t * t;
    s - s / (t2 * t2)
}

/// Horizontal blur of one row of a rounded rectangle.
///
/// At vertical offset `y` the shape is a slab of half-width `curved`, narrowed
/// inside the corner rows. Returns the Gaussian mass over
/// `[x - curved, x + curved]`.
#[inline]
pub fn blur_along_x(x: f32, y: f32, sigma: f32, corner: f32, half_size: Vec2) -> f32 {
    let delta = (half_size.y - corner - y.abs()).min(0.0);
    let curved = half_size.x - corner + (corner * corner - delta * delta).max(0.0).sqrt();
    let scale = FRAC_1_SQRT_2 / sigma;
    let low = 0.5 + 0.5 * erf((x - curved) * scale);
    let high = 0.5 + 0.5 * erf((x + curved) * scale);
    high - low
}

/// Blurred coverage of a rounded rectangle at a center-relative point.
///
/// Integrates `blur_along_x * gaussian` over `y` with `samples` midpoint steps,
/// restricted to `[-3σ, 3σ]` intersected with the rows where the slab exists.
pub fn blurred_rounded_rect(
    point: Vec2,
    half_size: Vec2,
    corner: f32,
    sigma: f32,
    samples: u32,
) -> f32 {
    let samples = samples.max(1);
    let low = point.y - half_size.y;
    let high = point.y + half_size.y;

    // `max().min()` rather than `clamp()`: the latter panics on NaN bounds.
    let start = (-3.0 * sigma).max(low).min(high);
    let end = (3.0 * sigma).max(low).min(high);

    let step = (end - start) / samples as f32;
    let mut y = start + step * 0.5;
    let mut alpha = 0.0;
    for _ in 0..samples {
        let row = blur_along_x(point.x, point.y - y, sigma, corner, half_size);
        alpha += row * gaussian(y, sigma) * step;
        y += step;
    }
    alpha
}
