use super::{InstanceBuffer, Quad, Shadow};

/// The two instance arrays of one draw call.
///
/// Producers append fully resolved records; the renderer only reads them.
/// Push helpers live next to each record type under `scene::shapes`.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    pub quads: InstanceBuffer<Quad>,
    pub shadows: InstanceBuffer<Shadow>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both arrays. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.quads.clear();
        self.shadows.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty() && self.shadows.is_empty()
    }

    /// Total number of instances across both arrays.
    #[inline]
    pub fn len(&self) -> usize {
        self.quads.len() + self.shadows.len()
    }
}
