use bytemuck::{Pod, Zeroable};

use crate::coords::{Bounds, Corners};
use crate::paint::Hsla;
use crate::scene::{InstanceId, Scene, ViewId};

/// One soft drop shadow cast by a rounded rectangle.
///
/// `bounds` is the silhouette before blurring; the drawn area extends
/// `3 * blur_radius` past it on every side.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Shadow {
    pub view_id: ViewId,
    pub layer_id: u32,
    pub order: u32,
    pub bounds: Bounds,
    pub corner_radii: Corners,
    pub content_mask: Bounds,
    pub color: Hsla,
    /// Gaussian standard deviation, logical pixels.
    pub blur_radius: f32,
    pub pad: u32,
}

impl Shadow {
    /// Square-cornered, unclipped shadow.
    pub fn new(bounds: Bounds, color: Hsla, blur_radius: f32) -> Self {
        Self {
            view_id: ViewId::default(),
            layer_id: 0,
            order: 0,
            bounds,
            corner_radii: Corners::zero(),
            content_mask: Bounds::UNCLIPPED,
            color,
            blur_radius,
            pad: 0,
        }
    }

    #[inline]
    pub fn with_corner_radii(mut self, corner_radii: Corners) -> Self {
        self.corner_radii = corner_radii;
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

    /// Area covered by the blurred silhouette (Gaussian support cut at 3σ).
    ///
    /// Negative and NaN radii do not dilate.
    #[inline]
    pub fn blurred_bounds(&self) -> Bounds {
        self.bounds.dilate(3.0 * self.blur_radius.max(0.0))
    }
}

impl Scene {
    /// Records a shadow instance.
    #[inline]
    pub fn push_shadow(&mut self, shadow: Shadow) -> InstanceId {
        self.shadows.push(shadow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blurred_bounds_extend_three_sigma() {
        let s = Shadow::new(Bounds::new(10.0, 10.0, 20.0, 20.0), Hsla::black(), 2.0);
        assert_eq!(s.blurred_bounds(), Bounds::new(4.0, 4.0, 32.0, 32.0));
    }

    #[test]
    fn invalid_blur_radius_does_not_shrink() {
        let bounds = Bounds::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(Shadow::new(bounds, Hsla::black(), -3.0).blurred_bounds(), bounds);
        assert_eq!(Shadow::new(bounds, Hsla::black(), f32::NAN).blurred_bounds(), bounds);
    }
}
