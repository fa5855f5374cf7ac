//! Lumen engine crate.
//!
//! Analytic rendering of rounded rectangles and drop shadows: per-sample
//! signed-distance coverage, borders, rectangular clipping and an erf-based
//! Gaussian blur, plus a data-parallel CPU evaluator that drives the stages.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
