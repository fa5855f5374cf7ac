//! Scan conversion: turns vertex-stage strips into pixel spans and runs a
//! sample stage over them, one framebuffer row per task.

use core::ops::Range;

use rayon::prelude::*;

use crate::coords::{Bounds, Vec2};
use crate::paint::Rgba;
use crate::scene::InstanceId;

use super::ctx::RenderCtx;
use super::shapes::{VertexOutput, run_vertex_strip};
use super::target::Framebuffer;
use super::transform::{ClipDistance, device_to_logical};

/// One axis-aligned primitive ready for the row pass.
#[derive(Debug, Clone)]
pub(crate) struct Primitive<V> {
    /// Flat attributes (first strip vertex).
    flat: V,
    /// Primitive rectangle in logical pixels, recovered from device positions.
    bounds: Bounds,
    clip_corners: [ClipDistance; 4],
    rows: Range<usize>,
    columns: Range<usize>,
}

impl<V: VertexOutput> Primitive<V> {
    /// Builds a primitive from the four outputs of one strip.
    ///
    /// Returns `None` for non-finite or empty primitives and for primitives
    /// that cover no pixel center of a `width` x `height` target.
    pub fn from_strip(
        strip: [V; 4],
        viewport_size: Vec2,
        width: usize,
        height: usize,
    ) -> Option<Self> {
        let min = device_to_logical(strip[0].position(), viewport_size);
        let max = device_to_logical(strip[3].position(), viewport_size);
        let bounds = Bounds::from_origin_size(min, max - min);
        if !bounds.is_finite() || bounds.is_empty() {
            return None;
        }

        let rows = pixel_span(min.y, max.y, height);
        let columns = pixel_span(min.x, max.x, width);
        if rows.is_empty() || columns.is_empty() {
            return None;
        }

        Some(Self {
            flat: strip[0],
            bounds,
            clip_corners: strip.map(|v| v.clip_distance()),
            rows,
            columns,
        })
    }

    #[inline]
    fn clip_distance_at(&self, point: Vec2) -> ClipDistance {
        let unit = (point - self.bounds.origin) / self.bounds.size;
        ClipDistance::interpolate(&self.clip_corners, unit)
    }
}

/// Pixel indices whose centers fall in `[lo, hi)`, clamped to `0..limit`.
fn pixel_span(lo: f32, hi: f32, limit: usize) -> Range<usize> {
    // Center `i + 0.5` is covered when `lo <= i + 0.5 < hi`.
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().min(limit as f32);
    if !(end > start) {
        return 0..0;
    }
    start as usize..end as usize
}

/// Vertex pass: runs `vertex` for every instance and keeps the drawable
/// primitives, in instance order.
pub(crate) fn setup<V, F>(ctx: &RenderCtx<'_>, count: usize, vertex: F) -> Vec<Primitive<V>>
where
    V: VertexOutput,
    F: Fn(Vec2, InstanceId) -> V + Sync,
{
    let viewport_size = ctx.viewport_size();
    let (width, height) = (ctx.target_width, ctx.target_height);

    ctx.pool.install(|| {
        (0..count)
            .into_par_iter()
            .filter_map(|index| {
                let id = InstanceId(u32::try_from(index).ok()?);
                let strip = run_vertex_strip(|unit| vertex(unit, id));
                let primitive = Primitive::from_strip(strip, viewport_size, width, height);
                if primitive.is_none() {
                    log::trace!("instance {index} skipped: empty, non-finite or off-target");
                }
                primitive
            })
            .collect()
    })
}

/// Row pass: evaluates `shade` at every covered pixel center and blends the
/// result into `target`.
///
/// Within a row, primitives are blended in slice order, so the image does not
/// depend on the thread count.
pub(crate) fn rasterize<V, F>(
    ctx: &RenderCtx<'_>,
    target: &mut Framebuffer,
    primitives: &[Primitive<V>],
    shade: F,
) where
    V: VertexOutput,
    F: Fn(&V, Vec2, ClipDistance) -> Rgba + Sync,
{
    if primitives.is_empty() {
        return;
    }
    let width = target.width();

    ctx.pool.install(|| {
        target
            .pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, pixels)| {
                let y = row as f32 + 0.5;
                for primitive in primitives {
                    if !primitive.rows.contains(&row) {
                        continue;
                    }
                    for column in primitive.columns.clone() {
                        let point = Vec2::new(column as f32 + 0.5, y);
                        let clip = primitive.clip_distance_at(point);
                        pixels[column].blend(shade(&primitive.flat, point, clip));
                    }
                }
            });
    });
}
