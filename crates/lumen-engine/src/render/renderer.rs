use anyhow::{Context, ensure};

use crate::coords::Globals;
use crate::scene::{Quad, Scene, Shadow};

use super::config::RasterConfig;
use super::ctx::RenderCtx;
use super::raster::{rasterize, setup};
use super::shapes::quad::{QuadFragmentInput, quad_fragment, quad_vertex};
use super::shapes::shadow::{ShadowFragmentInput, shadow_fragment, shadow_vertex};
use super::target::Framebuffer;

/// Data-parallel evaluator for quad and shadow instances.
///
/// Owns its worker pool; a single renderer can draw any number of frames.
pub struct Renderer {
    config: RasterConfig,
    pool: rayon::ThreadPool,
}

impl Renderer {
    pub fn new(config: RasterConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = config.threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build().context("failed to build raster thread pool")?;

        log::debug!(
            "renderer ready: threads={}, blur_samples={}",
            pool.current_num_threads(),
            config.blur_samples
        );
        Ok(Self { config, pool })
    }

    #[inline]
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Draws all shadows, then all quads, blending into `target`.
    pub fn render(
        &self,
        scene: &Scene,
        globals: Globals,
        target: &mut Framebuffer,
    ) -> anyhow::Result<()> {
        self.draw_shadows(scene.shadows.as_slice(), globals, target)?;
        self.draw_quads(scene.quads.as_slice(), globals, target)?;
        Ok(())
    }

    /// Draws `quads` in array order.
    pub fn draw_quads(
        &self,
        quads: &[Quad],
        globals: Globals,
        target: &mut Framebuffer,
    ) -> anyhow::Result<()> {
        let ctx = self.ctx(globals, target)?;

        let primitives = setup(&ctx, quads.len(), |unit, id| {
            quad_vertex(unit, id, quads, &globals)
        });
        rasterize(&ctx, target, &primitives, |flat, position, clip| {
            quad_fragment(&QuadFragmentInput::new(flat, position, clip), quads)
        });

        log::debug!("drew {} of {} quads", primitives.len(), quads.len());
        Ok(())
    }

    /// Draws `shadows` in array order.
    pub fn draw_shadows(
        &self,
        shadows: &[Shadow],
        globals: Globals,
        target: &mut Framebuffer,
    ) -> anyhow::Result<()> {
        let ctx = self.ctx(globals, target)?;
        let samples = self.config.blur_samples;

        let primitives = setup(&ctx, shadows.len(), |unit, id| {
            shadow_vertex(unit, id, shadows, &globals)
        });
        rasterize(&ctx, target, &primitives, |flat, position, clip| {
            shadow_fragment(&ShadowFragmentInput::new(flat, position, clip), shadows, samples)
        });

        log::debug!("drew {} of {} shadows", primitives.len(), shadows.len());
        Ok(())
    }

    fn ctx(&self, globals: Globals, target: &Framebuffer) -> anyhow::Result<RenderCtx<'_>> {
        ensure!(globals.is_valid(), "invalid viewport size {:?}", globals.viewport_size);
        Ok(RenderCtx::new(&self.pool, globals, target.width(), target.height()))
    }
}
