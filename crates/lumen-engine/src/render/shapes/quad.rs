//! Quad stages: rounded rectangle with background, per-edge border widths and
//! a single border color.

use crate::coords::{Globals, Vec2};
use crate::paint::{Rgba, hsla_to_rgba, over};
use crate::render::sdf::{coverage, rounded_rect_distance, saturate};
use crate::render::transform::{
    ClipDistance, DevicePosition, distance_from_clip_rect, to_device_position,
};
use crate::scene::{InstanceId, Quad};

use super::VertexOutput;

/// Output of [`quad_vertex`] for one strip vertex.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadVertexOutput {
    pub position: DevicePosition,
    pub background_color: Rgba,
    pub border_color: Rgba,
    pub quad_id: InstanceId,
    pub clip_distance: ClipDistance,
}

impl VertexOutput for QuadVertexOutput {
    #[inline]
    fn position(&self) -> DevicePosition {
        self.position
    }

    #[inline]
    fn clip_distance(&self) -> ClipDistance {
        self.clip_distance
    }
}

/// Input of [`quad_fragment`] for one sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadFragmentInput {
    /// Sample position in logical pixels.
    pub position: Vec2,
    pub background_color: Rgba,
    pub border_color: Rgba,
    pub quad_id: InstanceId,
    pub clip_distance: ClipDistance,
}

impl QuadFragmentInput {
    /// Pairs the flat attributes of a vertex output with one sample.
    #[inline]
    pub fn new(flat: &QuadVertexOutput, position: Vec2, clip_distance: ClipDistance) -> Self {
        Self {
            position,
            background_color: flat.background_color,
            border_color: flat.border_color,
            quad_id: flat.quad_id,
            clip_distance,
        }
    }
}

/// Vertex stage: places one corner of `quads[quad_id]` and converts its colors.
///
/// # Panics
/// If `quad_id` is out of range for `quads`.
pub fn quad_vertex(
    unit_vertex: Vec2,
    quad_id: InstanceId,
    quads: &[Quad],
    globals: &Globals,
) -> QuadVertexOutput {
    let quad = &quads[quad_id.index()];
    QuadVertexOutput {
        position: to_device_position(unit_vertex, quad.bounds, globals.viewport_size),
        background_color: hsla_to_rgba(quad.background),
        border_color: hsla_to_rgba(quad.border_color),
        quad_id,
        clip_distance: distance_from_clip_rect(unit_vertex, quad.bounds, quad.content_mask),
    }
}

/// Sample stage: straight RGBA for one sample of a quad.
///
/// RGB is the background, or the border blended over it near the border line;
/// alpha carries the anti-aliased edge coverage.
///
/// # Panics
/// If `input.quad_id` is out of range for `quads`.
pub fn quad_fragment(input: &QuadFragmentInput, quads: &[Quad]) -> Rgba {
    if input.clip_distance.is_clipped() {
        return Rgba::transparent();
    }

    let quad = &quads[input.quad_id.index()];
    let half_size = quad.bounds.half_size();
    let center_to_point = input.position - quad.bounds.center();

    let corner_radius = quad.corner_radii.for_point(center_to_point);
    let distance = rounded_rect_distance(center_to_point, half_size, corner_radius);

    let border_width = border_width_at(quad, center_to_point, half_size, corner_radius);

    let color = if border_width == 0.0 {
        input.background_color
    } else {
        let inset_distance = distance + border_width;
        // Border over background at the outer edge, sliding to plain
        // background once the sample is `border_width` inside.
        let blended_border = over(input.background_color, input.border_color);
        blended_border.mix(input.background_color, saturate(0.5 - inset_distance))
    };

    color.scale_alpha(coverage(distance))
}

/// Border width governing a sample, or 0 when it lies inside the inset box.
///
/// In the corner regions, the edge whose inset boundary is farther from the
/// sample wins.
fn border_width_at(
    quad: &Quad,
    center_to_point: Vec2,
    half_size: Vec2,
    corner_radius: f32,
) -> f32 {
    let vertical_border = quad.border_widths.vertical_for(center_to_point.x);
    let horizontal_border = quad.border_widths.horizontal_for(center_to_point.y);

    let border = Vec2::new(vertical_border, horizontal_border);
    let inset_size = half_size - Vec2::splat(corner_radius) - border;
    let point_to_inset_corner = center_to_point.abs() - inset_size;

    if point_to_inset_corner.x < 0.0 && point_to_inset_corner.y < 0.0 {
        0.0
    } else if point_to_inset_corner.y > point_to_inset_corner.x {
        horizontal_border
    } else {
        vertical_border
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Bounds, Corners, Edges};
    use crate::paint::Hsla;
    use crate::render::shapes::run_vertex_strip;
    use crate::render::transform::ClipDistance;

    const GLOBALS: Globals = Globals::new(200.0, 100.0);

    fn close(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-5
            && (a.g - b.g).abs() < 1e-5
            && (a.b - b.b).abs() < 1e-5
            && (a.a - b.a).abs() < 1e-5
    }

    /// Evaluates the sample stage at a logical point the way the scan
    /// converter would: flat attributes from the first vertex, clip distance
    /// interpolated from all four.
    fn shade(quads: &[Quad], id: u32, point: Vec2) -> Rgba {
        let quad_id = InstanceId(id);
        let strip = run_vertex_strip(|unit| quad_vertex(unit, quad_id, quads, &GLOBALS));
        let bounds = quads[quad_id.index()].bounds;
        let unit = (point - bounds.origin) / bounds.size;
        let corners = strip.map(|v| v.clip_distance);
        let clip = ClipDistance::interpolate(&corners, unit);
        let input = QuadFragmentInput::new(&strip[0], point, clip);
        quad_fragment(&input, quads)
    }

    fn white_card() -> Quad {
        Quad::new(Bounds::new(0.0, 0.0, 100.0, 50.0), Hsla::white())
            .with_content_mask(Bounds::new(0.0, 0.0, 200.0, 100.0))
    }

    // ── vertex ────────────────────────────────────────────────────────────

    #[test]
    fn vertex_converts_colors_and_positions() {
        let quads = [white_card().with_border(Edges::all(2.0), Hsla::new(0.0, 1.0, 0.5, 1.0))];
        let out = quad_vertex(Vec2::new(1.0, 1.0), InstanceId(0), &quads, &GLOBALS);
        assert_eq!(out.position, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(out.background_color, Rgba::white());
        assert_eq!(out.border_color, Rgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(out.clip_distance.0, [100.0, 100.0, 50.0, 50.0]);
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn white_card_center_is_opaque_white() {
        let quads = [white_card()];
        assert!(close(shade(&quads, 0, Vec2::new(50.0, 25.0)), Rgba::white()));
    }

    #[test]
    fn point_outside_bounds_is_transparent() {
        let quads = [white_card()];
        assert_eq!(shade(&quads, 0, Vec2::new(150.0, 25.0)).a, 0.0);
    }

    #[test]
    fn edge_pixel_is_half_covered() {
        let quads = [white_card()];
        let c = shade(&quads, 0, Vec2::new(50.0, 50.0));
        assert!((c.a - 0.5).abs() < 1e-5);
        // Coverage never touches RGB.
        assert_eq!((c.r, c.g, c.b), (1.0, 1.0, 1.0));
    }

    #[test]
    fn rounded_corner_is_cut_away() {
        let quads = [white_card().with_corner_radii(Corners::new(20.0, 0.0, 0.0, 0.0))];
        assert_eq!(shade(&quads, 0, Vec2::new(1.0, 1.0)).a, 0.0);
        // The square top-right corner still covers its corner pixel.
        assert!(shade(&quads, 0, Vec2::new(98.0, 2.0)).a >= 1.0);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn clipped_sample_is_transparent_regardless_of_fields() {
        let quads = [white_card()
            .with_border(Edges::all(5.0), Hsla::black())
            .with_content_mask(Bounds::new(0.0, 0.0, 40.0, 100.0))];
        assert_eq!(shade(&quads, 0, Vec2::new(60.0, 25.0)), Rgba::transparent());
        assert!(close(shade(&quads, 0, Vec2::new(20.0, 25.0)), Rgba::white()));

        let direct = QuadFragmentInput {
            position: Vec2::new(50.0, 25.0),
            background_color: Rgba::white(),
            border_color: Rgba::black(),
            quad_id: InstanceId(0),
            clip_distance: ClipDistance([10.0, 10.0, 0.0, 10.0]),
        };
        assert_eq!(quad_fragment(&direct, &quads), Rgba::transparent());
    }

    // ── borders ───────────────────────────────────────────────────────────

    fn bordered() -> Quad {
        // Red border: top 2, right 4, bottom 6, left 8.
        white_card().with_border(Edges::new(2.0, 4.0, 6.0, 8.0), Hsla::new(0.0, 1.0, 0.5, 1.0))
    }

    #[test]
    fn border_color_at_each_edge() {
        let quads = [bordered()];
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        // Half a pixel inside each edge, well within the border band.
        assert!(close(shade(&quads, 0, Vec2::new(0.5, 25.0)), red));
        assert!(close(shade(&quads, 0, Vec2::new(99.5, 25.0)), red));
        assert!(close(shade(&quads, 0, Vec2::new(50.0, 0.5)), red));
        assert!(close(shade(&quads, 0, Vec2::new(50.0, 49.5)), red));
    }

    #[test]
    fn each_edge_uses_its_own_width() {
        let quads = [bordered()];
        // 3px inside: still border on the 4px right edge, background on the 2px top edge.
        let right = shade(&quads, 0, Vec2::new(97.0, 25.0));
        let top = shade(&quads, 0, Vec2::new(50.0, 3.0));
        assert!(right.g < 0.01, "{right:?}");
        assert!(close(top, Rgba::white()), "{top:?}");
        // 7px inside the 8px left edge is still border.
        assert!(shade(&quads, 0, Vec2::new(7.0, 25.0)).g < 0.01);
    }

    #[test]
    fn interior_is_background() {
        let quads = [bordered()];
        assert!(close(shade(&quads, 0, Vec2::new(50.0, 25.0)), Rgba::white()));
    }

    #[test]
    fn translucent_border_blends_over_background() {
        let quads = [white_card().with_border(Edges::all(4.0), Hsla::new(0.0, 0.0, 0.0, 0.5))];
        let c = shade(&quads, 0, Vec2::new(1.0, 25.0));
        assert!(close(c, Rgba::new(0.5, 0.5, 0.5, 1.0)), "{c:?}");
    }

    #[test]
    fn corner_region_picks_farther_inset_edge() {
        let quad = bordered();
        let half = quad.bounds.half_size();
        // Top-left region: left border 8, top border 2, square corners.
        // Inset corner sits at (|x|, |y|) = (42, 23).
        let below_band = Vec2::new(-45.0, -21.0); // only x is past the inset
        assert_eq!(border_width_at(&quad, below_band, half, 0.0), 8.0);
        let above_band = Vec2::new(-43.0, -24.5); // y is farther past than x
        assert_eq!(border_width_at(&quad, above_band, half, 0.0), 2.0);
        let inside = Vec2::new(-10.0, -10.0);
        assert_eq!(border_width_at(&quad, inside, half, 0.0), 0.0);
    }

    #[test]
    fn oversized_border_degrades_without_panicking() {
        let quads = [white_card().with_border(Edges::all(80.0), Hsla::black())];
        let c = shade(&quads, 0, Vec2::new(50.0, 25.0));
        assert!(c.is_finite());
        assert!(close(c, Rgba::black()));
    }
}
