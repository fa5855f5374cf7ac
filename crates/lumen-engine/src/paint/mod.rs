//! Color model shared by the stages and the framebuffer.
//!
//! Scope:
//! - `Hsla`: the color format instance records carry
//! - `Rgba`: straight (non-premultiplied) color produced by the stages
//! - `Color`: premultiplied color stored in the framebuffer
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod hsla;
pub mod rgba;

pub use color::Color;
pub use hsla::{Hsla, hsla_to_rgba, rgba_to_hsla};
pub use rgba::{Rgba, over};
