//! Stage evaluation and the CPU evaluator that drives it.
//!
//! Convention:
//! - Instance geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex stages convert to NDC using `Globals::viewport_size`.
//! - Sample stages return straight RGBA; the framebuffer stores premultiplied.

mod config;
mod ctx;
mod raster;
mod renderer;
mod target;

pub mod blur;
pub mod sdf;
pub mod shapes;
pub mod transform;

pub use config::RasterConfig;
pub use renderer::Renderer;
pub use target::Framebuffer;
