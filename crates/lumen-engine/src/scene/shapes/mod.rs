mod quad;
mod shadow;

pub use quad::Quad;
pub use shadow::Shadow;
