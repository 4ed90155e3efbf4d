//! Palette construction and nearest-color matching.
//!
//! A [`Palette`] is built once per conversion by [`PaletteBuilder`] using
//! recursive median-cut over the source image's sampled colors, then read
//! (never mutated) for the rest of the conversion.

mod builder;
#[allow(clippy::module_inception)]
mod palette;

pub use builder::PaletteBuilder;
pub use palette::Palette;
