//! Buffer pixel type with alpha
//!
//! `Rgba` is what [`PixelBuffer`](crate::PixelBuffer) stores and what block
//! averaging produces. Alpha is averaged like the color channels but is
//! never matched against the palette and never receives diffused error.

use super::rgb::Rgb;

/// A pixel with 8-bit red, green, blue, and alpha channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0..=255), carried through unmodified by quantization
    pub a: u8,
}

impl Rgba {
    /// Create a new Rgba pixel.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Drop the alpha channel.
    ///
    /// Used when handing a pixel to palette matching, which operates on
    /// opaque colors only.
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}
