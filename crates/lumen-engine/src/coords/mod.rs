//! Coordinate and geometry types shared by the vertex and sample stages.
//!
//! Canonical space:
//! - Logical pixels, the same units as `Globals::viewport_size`
//! - Origin top-left
//! - +X right, +Y down
//!
//! Only `render::transform::to_device_position` leaves this space (for NDC).

mod bounds;
mod corners;
mod edges;
mod globals;
mod vec2;

pub use bounds::Bounds;
pub use corners::{Corners, Quadrant};
pub use edges::Edges;
pub use globals::Globals;
pub use vec2::Vec2;
