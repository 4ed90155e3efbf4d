//! Pixel art rendering orchestration.
//!
//! [`PixelArtRenderer`] ties the pipeline together: build a palette from the
//! source, then walk the image in blocks, averaging, quantizing, optionally
//! diffusing error, and painting solid blocks into the output.

pub mod block;
mod error;
mod options;
mod renderer;

pub use error::RenderError;
pub use options::RenderOptions;
pub use renderer::PixelArtRenderer;
