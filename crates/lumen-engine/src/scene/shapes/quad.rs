use bytemuck::{Pod, Zeroable};

use crate::coords::{Bounds, Corners, Edges};
use crate::paint::Hsla;
use crate::scene::{InstanceId, Scene, ViewId};

/// One filled, optionally bordered rounded rectangle.
///
/// `view_id`, `layer_id` and `order` are ordering metadata owned by the
/// batching system; the stages only read geometry, clip and colors.
/// A single `border_color` applies to all four edges.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Quad {
    pub view_id: ViewId,
    pub layer_id: u32,
    pub order: u32,
    pub bounds: Bounds,
    /// Clip rectangle in the same space as `bounds`.
    pub content_mask: Bounds,
    pub background: Hsla,
    pub border_color: Hsla,
    pub corner_radii: Corners,
    pub border_widths: Edges,
}

impl Quad {
    /// Square-cornered, borderless, unclipped quad.
    pub fn new(bounds: Bounds, background: Hsla) -> Self {
        Self {
            view_id: ViewId::default(),
            layer_id: 0,
            order: 0,
            bounds,
            content_mask: Bounds::UNCLIPPED,
            background,
            border_color: Hsla::transparent(),
            corner_radii: Corners::zero(),
            border_widths: Edges::zero(),
        }
    }

    #[inline]
    pub fn with_corner_radii(mut self, corner_radii: Corners) -> Self {
        self.corner_radii = corner_radii;
        self
    }

    #[inline]
    pub fn with_border(mut self, widths: Edges, color: Hsla) -> Self {
        self.border_widths = widths;
        self.border_color = color;
        self
    }

    #[inline]
    pub fn with_content_mask(mut self, content_mask: Bounds) -> Self {
        self.content_mask = content_mask;
        self
    }

    #[inline]
    pub fn with_tags(mut self, view_id: ViewId, layer_id: u32, order: u32) -> Self {
        self.view_id = view_id;
        self.layer_id = layer_id;
        self.order = order;
        self
    }
}

impl Scene {
    /// Records a quad instance.
    #[inline]
    pub fn push_quad(&mut self, quad: Quad) -> InstanceId {
        self.quads.push(quad)
    }

    /// Records an unbordered rounded rectangle with a uniform corner radius.
    #[inline]
    pub fn push_solid_quad(
        &mut self,
        bounds: Bounds,
        radius: f32,
        background: Hsla,
    ) -> InstanceId {
        self.push_quad(Quad::new(bounds, background).with_corner_radii(Corners::all(radius)))
    }
}
