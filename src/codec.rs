//! PNG decoding and encoding.
//!
//! The pipeline itself is format-agnostic: it consumes and produces RGBA
//! [`PixelBuffer`]s. This module is the boundary where image files become
//! buffers and back. Decoding normalizes every supported PNG flavor
//! (grayscale, grayscale+alpha, RGB, indexed, 16-bit) to 8-bit RGBA;
//! encoding always writes 8-bit RGBA.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use pixel_quant::PixelBuffer;

use crate::error::CodecError;

/// Decode a PNG file into an RGBA pixel buffer.
///
/// Sub-8-bit and 16-bit channels are normalized to 8 bits and palette
/// images are expanded, so the buffer layout is always `width * height * 4`
/// bytes regardless of how the file was stored. Color types without an
/// alpha channel decode as fully opaque.
pub fn read_png(path: &Path) -> Result<PixelBuffer, CodecError> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::normalize_to_color8());

    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let width = info.width as usize;
    let height = info.height as usize;

    let data = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => rgb_to_rgba(&buf),
        png::ColorType::Grayscale => gray_to_rgba(&buf),
        png::ColorType::GrayscaleAlpha => gray_alpha_to_rgba(&buf),
        // normalize_to_color8 expands palettes to RGB(A) before we get here
        other => return Err(CodecError::UnsupportedColorType(other)),
    };

    tracing::debug!(width, height, color_type = ?info.color_type, "Decoded PNG");
    Ok(PixelBuffer::from_raw(data, width, height))
}

/// Encode a pixel buffer as an 8-bit RGBA PNG file.
///
/// PNG cannot represent zero-area images; encoding an empty buffer fails
/// with [`CodecError::EmptyImage`].
pub fn write_png(path: &Path, buffer: &PixelBuffer) -> Result<(), CodecError> {
    if buffer.is_empty() {
        return Err(CodecError::EmptyImage {
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        buffer.width() as u32,
        buffer.height() as u32,
    );
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(buffer.data())?;
    writer.finish()?;

    tracing::debug!(width = buffer.width(), height = buffer.height(), "Encoded PNG");
    Ok(())
}

fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .flat_map(|c| [c[0], c[1], c[2], 255])
        .collect()
}

fn gray_to_rgba(gray: &[u8]) -> Vec<u8> {
    gray.iter().flat_map(|&v| [v, v, v, 255]).collect()
}

fn gray_alpha_to_rgba(ga: &[u8]) -> Vec<u8> {
    ga.chunks_exact(2)
        .flat_map(|c| [c[0], c[0], c[0], c[1]])
        .collect()
}
