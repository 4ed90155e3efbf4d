//! Median-cut palette construction.
//!
//! The builder samples the source image at a fixed stride, then recursively
//! splits the sampled color set along the channel with the widest range
//! until the requested number of boxes is reached. Each leaf box contributes
//! its channel-wise mean color.

use super::palette::Palette;
use crate::buffer::PixelBuffer;
use crate::color::Rgb;

/// Sampling stride for palette construction: every Nth pixel of the
/// row-major scan. Sampling only affects which colors the palette is built
/// from, never which pixels get quantized.
const SAMPLE_STRIDE: usize = 4;

/// The channel a box is split along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    #[inline]
    fn value(self, color: Rgb) -> u8 {
        match self {
            Channel::Red => color.r,
            Channel::Green => color.g,
            Channel::Blue => color.b,
        }
    }
}

/// Builds a [`Palette`] from a source image via recursive median cut.
///
/// The builder is configured with a target size and is reusable across
/// images. The produced palette holds at most `target_size` colors --
/// possibly fewer, when the sampled color set runs out of pixels to split
/// -- and is empty only for a zero-area image.
///
/// # Example
///
/// ```
/// use pixel_quant::{PaletteBuilder, PixelBuffer, Rgba};
///
/// let mut image = PixelBuffer::new(4, 4);
/// image.fill_rect(0, 0, 4, 4, Rgba::new(200, 100, 50, 255));
///
/// let palette = PaletteBuilder::new(8).build(&image);
/// assert!(palette.len() <= 8);
/// assert!(!palette.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PaletteBuilder {
    target_size: usize,
}

impl PaletteBuilder {
    /// Create a builder that produces palettes of at most `target_size`
    /// colors.
    pub fn new(target_size: usize) -> Self {
        Self { target_size }
    }

    /// Build a palette from the source image's sampled colors.
    ///
    /// Returns an empty palette for a zero-area image; any non-empty image
    /// always samples at least its first pixel.
    pub fn build(&self, source: &PixelBuffer) -> Palette {
        let sampled: Vec<Rgb> = source
            .pixels()
            .step_by(SAMPLE_STRIDE)
            .map(|p| p.rgb())
            .collect();

        Palette::new(median_cut(sampled, self.target_size))
    }
}

/// Recursive median cut over an owned box of colors.
///
/// Each call consumes its box and partitions it into two children by
/// ownership transfer; sibling boxes never share data. Splitting happens at
/// `floor(len / 2)`, with `ceil(k / 2)` colors requested from the lower
/// half and `floor(k / 2)` from the upper. Empty sub-boxes contribute
/// nothing, which is how the result can fall short of `k`.
fn median_cut(mut pixels: Vec<Rgb>, k: usize) -> Vec<Rgb> {
    if pixels.is_empty() || k == 0 {
        return Vec::new();
    }

    if k == 1 {
        return vec![mean_color(&pixels)];
    }

    let channel = widest_channel(&pixels);
    pixels.sort_by_key(|c| channel.value(*c));

    let upper = pixels.split_off(pixels.len() / 2);
    let lower = pixels;

    let mut colors = median_cut(lower, (k + 1) / 2);
    colors.extend(median_cut(upper, k / 2));
    colors
}

/// Channel-wise arithmetic mean of a box, rounded to nearest.
fn mean_color(pixels: &[Rgb]) -> Rgb {
    let mut sum_r = 0u64;
    let mut sum_g = 0u64;
    let mut sum_b = 0u64;
    for p in pixels {
        sum_r += p.r as u64;
        sum_g += p.g as u64;
        sum_b += p.b as u64;
    }
    let n = pixels.len() as f64;
    Rgb::new(
        (sum_r as f64 / n).round() as u8,
        (sum_g as f64 / n).round() as u8,
        (sum_b as f64 / n).round() as u8,
    )
}

/// The channel with the largest value range across the box.
///
/// Ties resolve red over green over blue. This precedence is part of the
/// palette's deterministic ordering contract.
fn widest_channel(pixels: &[Rgb]) -> Channel {
    let mut min = [u8::MAX; 3];
    let mut max = [u8::MIN; 3];
    for p in pixels {
        for (i, v) in [p.r, p.g, p.b].into_iter().enumerate() {
            min[i] = min[i].min(v);
            max[i] = max[i].max(v);
        }
    }
    let range_r = max[0] - min[0];
    let range_g = max[1] - min[1];
    let range_b = max[2] - min[2];

    if range_r >= range_g && range_r >= range_b {
        Channel::Red
    } else if range_g >= range_b {
        Channel::Green
    } else {
        Channel::Blue
    }
}
