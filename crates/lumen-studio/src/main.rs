use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lumen_engine::coords::Globals;
use lumen_engine::logging::{LoggingConfig, init_logging};
use lumen_engine::paint::Rgba;
use lumen_engine::render::{Framebuffer, RasterConfig, Renderer};

mod demo;

/// Renders the built-in card demo to a PNG file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output PNG path
    #[arg(short, long, default_value = "lumen.png")]
    output: PathBuf,

    /// Viewport width in logical pixels
    #[arg(short, long, default_value_t = 820)]
    width: u32,

    /// Viewport height in logical pixels
    #[arg(long, default_value_t = 560)]
    height: u32,

    /// Raster worker threads (defaults to one per CPU)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Quadrature steps per shadow sample
    #[arg(long, default_value_t = RasterConfig::default().blur_samples)]
    blur_samples: u32,

    /// Log filter in env_logger syntax (falls back to RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.as_str());
    }
    init_logging(logging);

    let renderer = Renderer::new(RasterConfig {
        threads: args.threads,
        blur_samples: args.blur_samples,
    })?;

    let globals = Globals::new(args.width as f32, args.height as f32);
    let scene = demo::build(globals);
    log::info!(
        "rendering {} quads and {} shadows at {}x{}",
        scene.quads.len(),
        scene.shadows.len(),
        args.width,
        args.height
    );

    let mut target = Framebuffer::for_viewport(globals)?;
    target.clear(Rgba::new(0.94, 0.95, 0.97, 1.0));
    renderer.render(&scene, globals, &mut target)?;

    save_png(&target, &args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn save_png(target: &Framebuffer, path: &Path) -> Result<()> {
    let width = u32::try_from(target.width()).context("framebuffer too wide for PNG")?;
    let height = u32::try_from(target.height()).context("framebuffer too tall for PNG")?;
    let image = image::RgbaImage::from_raw(width, height, target.to_rgba8())
        .context("framebuffer size does not match its pixel data")?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))
}
