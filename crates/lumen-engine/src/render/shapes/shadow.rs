//! Shadow stages: Gaussian-blurred rounded rectangle.

use crate::coords::{Globals, Vec2};
use crate::paint::{Rgba, hsla_to_rgba};
use crate::render::blur::{MIN_BLUR_RADIUS, blurred_rounded_rect};
use crate::render::sdf::{coverage, rounded_rect_distance};
use crate::render::transform::{
    ClipDistance, DevicePosition, distance_from_clip_rect, to_device_position,
};
use crate::scene::{InstanceId, Shadow};

use super::VertexOutput;

/// Output of [`shadow_vertex`] for one strip vertex.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadowVertexOutput {
    pub position: DevicePosition,
    pub color: Rgba,
    pub shadow_id: InstanceId,
    pub clip_distance: ClipDistance,
}

impl VertexOutput for ShadowVertexOutput {
    #[inline]
    fn position(&self) -> DevicePosition {
        self.position
    }

    #[inline]
    fn clip_distance(&self) -> ClipDistance {
        self.clip_distance
    }
}

/// Input of [`shadow_fragment`] for one sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadowFragmentInput {
    /// Sample position in logical pixels.
    pub position: Vec2,
    pub color: Rgba,
    pub shadow_id: InstanceId,
    pub clip_distance: ClipDistance,
}

impl ShadowFragmentInput {
    #[inline]
    pub fn new(flat: &ShadowVertexOutput, position: Vec2, clip_distance: ClipDistance) -> Self {
        Self {
            position,
            color: flat.color,
            shadow_id: flat.shadow_id,
            clip_distance,
        }
    }
}

/// Vertex stage: places one corner of the blur-dilated shadow box.
///
/// # Panics
/// If `shadow_id` is out of range for `shadows`.
pub fn shadow_vertex(
    unit_vertex: Vec2,
    shadow_id: InstanceId,
    shadows: &[Shadow],
    globals: &Globals,
) -> ShadowVertexOutput {
    let shadow = &shadows[shadow_id.index()];
    let bounds = shadow.blurred_bounds();
    ShadowVertexOutput {
        position: to_device_position(unit_vertex, bounds, globals.viewport_size),
        color: hsla_to_rgba(shadow.color),
        shadow_id,
        clip_distance: distance_from_clip_rect(unit_vertex, bounds, shadow.content_mask),
    }
}

/// Sample stage: shadow color with alpha scaled by the blurred coverage.
///
/// `samples` is the number of quadrature steps along `y`. Blur radii below
/// [`MIN_BLUR_RADIUS`] (including zero and NaN) fall back to the hard-edged
/// anti-aliased silhouette.
///
/// # Panics
/// If `input.shadow_id` is out of range for `shadows`.
pub fn shadow_fragment(input: &ShadowFragmentInput, shadows: &[Shadow], samples: u32) -> Rgba {
    if input.clip_distance.is_clipped() {
        return Rgba::transparent();
    }

    let shadow = &shadows[input.shadow_id.index()];
    let half_size = shadow.bounds.half_size();
    let point = input.position - shadow.bounds.center();
    let corner_radius = shadow.corner_radii.for_point(point);
    let sigma = shadow.blur_radius;

    let alpha = if sigma >= MIN_BLUR_RADIUS {
        blurred_rounded_rect(point, half_size, corner_radius, sigma, samples)
    } else {
        coverage(rounded_rect_distance(point, half_size, corner_radius))
    };

    input.color.scale_alpha(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Bounds, Corners};
    use crate::paint::Hsla;
    use crate::render::blur::DEFAULT_BLUR_SAMPLES;
    use crate::render::shapes::run_vertex_strip;

    const GLOBALS: Globals = Globals::new(400.0, 400.0);

    fn shade(shadows: &[Shadow], point: Vec2) -> Rgba {
        let id = InstanceId(0);
        let strip = run_vertex_strip(|unit| shadow_vertex(unit, id, shadows, &GLOBALS));
        let drawn = shadows[0].blurred_bounds();
        let unit = (point - drawn.origin) / drawn.size;
        let corners = strip.map(|v| v.clip_distance);
        let clip = ClipDistance::interpolate(&corners, unit);
        let input = ShadowFragmentInput::new(&strip[0], point, clip);
        shadow_fragment(&input, shadows, DEFAULT_BLUR_SAMPLES)
    }

    fn large_flat(alpha: f32, sigma: f32) -> Shadow {
        Shadow::new(Bounds::new(100.0, 100.0, 200.0, 200.0), Hsla::black().alpha(alpha), sigma)
    }

    // ── vertex ────────────────────────────────────────────────────────────

    #[test]
    fn vertex_expands_by_three_sigma() {
        let shadows = [large_flat(1.0, 10.0)];
        let top_left = shadow_vertex(Vec2::zero(), InstanceId(0), &shadows, &GLOBALS);
        // (70, 70) in a 400x400 viewport.
        let [x, y, z, w] = top_left.position;
        assert!((x + 0.65).abs() < 1e-6 && (y - 0.65).abs() < 1e-6, "{x} {y}");
        assert_eq!((z, w), (0.0, 1.0));
        assert_eq!(top_left.color, Rgba::black());
    }

    // ── blur profile ──────────────────────────────────────────────────────

    #[test]
    fn center_reaches_shadow_alpha() {
        let shadows = [large_flat(0.6, 4.0)];
        let c = shade(&shadows, Vec2::new(200.0, 200.0));
        assert!((c.a - 0.6).abs() < 0.01, "{c:?}");
        assert_eq!((c.r, c.g, c.b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn edge_is_half_alpha() {
        let shadows = [large_flat(1.0, 4.0)];
        let c = shade(&shadows, Vec2::new(100.0, 200.0));
        assert!((c.a - 0.5).abs() < 0.01, "{c:?}");
    }

    #[test]
    fn decays_to_zero_at_expanded_bounds() {
        let sigma = 4.0;
        let shadows = [large_flat(1.0, sigma)];

        let mut prev = f32::INFINITY;
        let mut x = 200.0;
        while x <= 300.0 + 3.0 * sigma {
            let a = shade(&shadows, Vec2::new(x, 200.0)).a;
            assert!(a <= prev + 1e-4, "alpha rose at x = {x}: {prev} -> {a}");
            prev = a;
            x += 0.5;
        }
        assert!(prev < 0.01, "{prev}");

        let below = shade(&shadows, Vec2::new(200.0, 300.0 + 3.0 * sigma + 0.25));
        assert_eq!(below.a, 0.0);
    }

    #[test]
    fn rounded_corners_soften_corner_alpha() {
        let square = [large_flat(1.0, 4.0)];
        let rounded = [large_flat(1.0, 4.0).with_corner_radii(Corners::all(40.0))];
        let corner = Vec2::new(104.0, 104.0);
        assert!(shade(&rounded, corner).a < shade(&square, corner).a);
    }

    // ── fallbacks and clipping ────────────────────────────────────────────

    #[test]
    fn zero_blur_renders_hard_edge() {
        let shadows = [large_flat(1.0, 0.0)];
        assert_eq!(shade(&shadows, Vec2::new(200.0, 200.0)).a, 1.0);
        assert_eq!(shade(&shadows, Vec2::new(100.0, 200.0)).a, 0.5);
        assert_eq!(shade(&shadows, Vec2::new(98.0, 200.0)).a, 0.0);
    }

    #[test]
    fn clipped_sample_is_transparent() {
        let shadows = [large_flat(1.0, 4.0).with_content_mask(Bounds::new(0.0, 0.0, 150.0, 400.0))];
        assert_eq!(shade(&shadows, Vec2::new(200.0, 200.0)), Rgba::transparent());
        assert!(shade(&shadows, Vec2::new(140.0, 200.0)).a > 0.9);
    }
}
