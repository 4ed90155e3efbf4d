//! Color types for the quantization pipeline.
//!
//! Two types with distinct roles:
//!
//! - [`Rgb`]: an opaque color. Palette entries and distance calculations.
//! - [`Rgba`]: a buffer pixel. Alpha rides along through averaging but is
//!   never quantized or dithered.

mod rgb;
mod rgba;

pub use rgb::Rgb;
pub use rgba::Rgba;
