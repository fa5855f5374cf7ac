//! Pieces shared by the quad and shadow stages.

use crate::coords::Vec2;
use crate::render::transform::{ClipDistance, DevicePosition, UNIT_VERTICES};

/// What the scan converter needs from any vertex stage output.
///
/// Everything else in an output is flat (taken from the first strip vertex);
/// clip distances are interpolated across the primitive.
pub trait VertexOutput: Copy + Send + Sync {
    fn position(&self) -> DevicePosition;
    fn clip_distance(&self) -> ClipDistance;
}

/// Runs a vertex stage for the four strip vertices of one instance.
#[inline]
pub fn run_vertex_strip<V>(stage: impl FnMut(Vec2) -> V) -> [V; 4] {
    UNIT_VERTICES.map(stage)
}
