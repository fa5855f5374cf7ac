//! Per-primitive vertex and sample stages.

mod common;

pub mod quad;
pub mod shadow;

pub use common::{VertexOutput, run_vertex_strip};
