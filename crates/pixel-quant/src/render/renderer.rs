//! PixelArtRenderer -- the primary entry point for the crate.

use super::block;
use super::error::RenderError;
use super::options::RenderOptions;
use crate::buffer::PixelBuffer;
use crate::dither;
use crate::palette::PaletteBuilder;

/// Converts a source image into palette-quantized pixel art.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - [`render()`](Self::render) takes `&self`, so the renderer is
///   **reusable** across images; every call builds a fresh palette and
///   working buffer, and no state survives between conversions
/// - The source buffer is never mutated; error diffusion happens in a
///   private working copy
///
/// # Example
///
/// ```
/// use pixel_quant::{PixelArtRenderer, PixelBuffer, Rgba};
///
/// let mut source = PixelBuffer::new(8, 8);
/// source.fill_rect(0, 0, 8, 8, Rgba::new(200, 100, 50, 255));
///
/// let renderer = PixelArtRenderer::new()
///     .pixel_size(2)
///     .palette_size(4)
///     .dither(true);
///
/// let art = renderer.render(&source).unwrap();
/// assert_eq!(art.width(), 8);
/// assert_eq!(art.height(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PixelArtRenderer {
    options: RenderOptions,
}

impl PixelArtRenderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Create a renderer from prepared options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Set the block edge length in source pixels.
    #[inline]
    pub fn pixel_size(mut self, size: usize) -> Self {
        self.options = self.options.pixel_size(size);
        self
    }

    /// Set the number of palette colors to generate.
    #[inline]
    pub fn palette_size(mut self, size: usize) -> Self {
        self.options = self.options.palette_size(size);
        self
    }

    /// Enable or disable Floyd-Steinberg error diffusion.
    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.options = self.options.dither(enabled);
        self
    }

    /// Borrow the renderer's configuration.
    #[inline]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Convert `source` into pixel art.
    ///
    /// The pipeline, in order:
    ///
    /// 1. Validate configuration (`pixel_size >= 1`, `palette_size >= 1`);
    ///    on failure nothing is computed and no buffer is allocated.
    /// 2. A zero-area source short-circuits to an equal-dimension empty
    ///    buffer -- the palette is never consulted.
    /// 3. Build the palette once from the pristine source.
    /// 4. Copy the source into a working buffer and scan it in row-major
    ///    block order (y outer, x inner), stepping by `pixel_size`. The
    ///    order is load-bearing: diffusion writes from one block must be
    ///    visible to the averages of every later block.
    /// 5. Per block: average from the working buffer, snap to the nearest
    ///    palette color, optionally diffuse the error, and paint the chosen
    ///    color (with the block's averaged alpha) as a clipped solid
    ///    rectangle into the output.
    ///
    /// The full output buffer materializes only after the whole scan
    /// completes.
    pub fn render(&self, source: &PixelBuffer) -> Result<PixelBuffer, RenderError> {
        self.options.validate()?;

        let width = source.width();
        let height = source.height();
        if source.is_empty() {
            return Ok(PixelBuffer::new(width, height));
        }

        let palette = PaletteBuilder::new(self.options.palette_size).build(source);

        let mut working = source.clone();
        let mut output = PixelBuffer::new(width, height);
        let pixel_size = self.options.pixel_size;

        for y in (0..height).step_by(pixel_size) {
            for x in (0..width).step_by(pixel_size) {
                let avg = block::average(&working, x, y, pixel_size);
                let chosen = palette.nearest(avg.rgb());

                if self.options.dither {
                    let error = [
                        avg.r as f32 - chosen.r as f32,
                        avg.g as f32 - chosen.g as f32,
                        avg.b as f32 - chosen.b as f32,
                    ];
                    dither::diffuse(&mut working, x, y, pixel_size, error);
                }

                output.fill_rect(x, y, pixel_size, pixel_size, chosen.with_alpha(avg.a));
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    /// 4x4 two-tone test image: left half dark, right half light.
    fn two_tone_4x4() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.fill_rect(0, 0, 2, 4, Rgba::new(20, 20, 20, 255));
        buffer.fill_rect(2, 0, 2, 4, Rgba::new(220, 220, 220, 255));
        buffer
    }

    #[test]
    fn test_output_dimensions_match_source() {
        let source = two_tone_4x4();
        let art = PixelArtRenderer::new()
            .pixel_size(3)
            .palette_size(2)
            .render(&source)
            .unwrap();
        assert_eq!(art.width(), 4);
        assert_eq!(art.height(), 4);
    }

    #[test]
    fn test_renderer_is_reusable() {
        let source = two_tone_4x4();
        let renderer = PixelArtRenderer::new().pixel_size(2).palette_size(2);

        let first = renderer.render(&source).unwrap();
        let second = renderer.render(&source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_source_never_mutated() {
        let source = two_tone_4x4();
        let pristine = source.clone();
        let renderer = PixelArtRenderer::new()
            .pixel_size(2)
            .palette_size(2)
            .dither(true);

        renderer.render(&source).unwrap();
        assert_eq!(source, pristine);
    }

    #[test]
    fn test_invalid_pixel_size_is_signaled_noop() {
        let source = two_tone_4x4();
        let result = PixelArtRenderer::new().pixel_size(0).render(&source);
        assert_eq!(result, Err(RenderError::InvalidPixelSize { size: 0 }));
    }

    #[test]
    fn test_invalid_palette_size_is_signaled_noop() {
        let source = two_tone_4x4();
        let result = PixelArtRenderer::new().palette_size(0).render(&source);
        assert_eq!(result, Err(RenderError::InvalidPaletteSize { size: 0 }));
    }

    #[test]
    fn test_empty_source_returns_empty_output() {
        let source = PixelBuffer::new(0, 7);
        let art = PixelArtRenderer::new().render(&source).unwrap();
        assert_eq!(art.width(), 0);
        assert_eq!(art.height(), 7);
        assert!(art.is_empty());
    }

    #[test]
    fn test_blocks_are_solid() {
        let source = two_tone_4x4();
        let art = PixelArtRenderer::new()
            .pixel_size(2)
            .palette_size(4)
            .render(&source)
            .unwrap();

        // Every 2x2 block in the output is a single color
        for by in [0, 2] {
            for bx in [0, 2] {
                let first = art.get(bx, by);
                for dy in 0..2 {
                    for dx in 0..2 {
                        assert_eq!(art.get(bx + dx, by + dy), first);
                    }
                }
            }
        }
    }

    #[test]
    fn test_output_colors_come_from_palette() {
        let source = two_tone_4x4();
        let palette = PaletteBuilder::new(2).build(&source);
        let art = PixelArtRenderer::new()
            .pixel_size(2)
            .palette_size(2)
            .render(&source)
            .unwrap();

        for pixel in art.pixels() {
            assert!(
                palette.colors().contains(&pixel.rgb()),
                "output color {:?} not in palette",
                pixel.rgb()
            );
        }
    }

    #[test]
    fn test_oversized_block_covers_whole_image() {
        let source = two_tone_4x4();
        let art = PixelArtRenderer::new()
            .pixel_size(100)
            .palette_size(4)
            .render(&source)
            .unwrap();

        // One block spanning the image: output is a single solid color
        let first = art.get(0, 0);
        assert!(art.pixels().all(|p| p == first));
    }
}
