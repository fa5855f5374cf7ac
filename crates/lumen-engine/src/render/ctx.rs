use crate::coords::{Globals, Vec2};

/// Per-pass context handed to the raster helpers (pool + globals + target size).
pub(crate) struct RenderCtx<'a> {
    pub pool: &'a rayon::ThreadPool,
    pub globals: Globals,
    pub target_width: usize,
    pub target_height: usize,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        pool: &'a rayon::ThreadPool,
        globals: Globals,
        target_width: usize,
        target_height: usize,
    ) -> Self {
        Self {
            pool,
            globals,
            target_width,
            target_height,
        }
    }

    #[inline]
    pub fn viewport_size(&self) -> Vec2 {
        self.globals.viewport_size
    }
}
