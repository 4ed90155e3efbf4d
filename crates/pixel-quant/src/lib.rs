//! pixel-quant: palette quantization and dithering for pixel art conversion
//!
//! This library turns an arbitrary raster image into stylized pixel art by
//! reducing spatial resolution (block averaging), reducing color resolution
//! (median-cut palette generation plus nearest-color search), and optionally
//! applying Floyd-Steinberg error diffusion to preserve perceived detail
//! despite the reduced palette.
//!
//! # Quick Start
//!
//! The [`PixelArtRenderer`] builder is the primary entry point:
//!
//! ```
//! use pixel_quant::{PixelArtRenderer, PixelBuffer, Rgba};
//!
//! let mut source = PixelBuffer::new(16, 16);
//! source.fill_rect(0, 0, 16, 8, Rgba::new(200, 60, 30, 255));
//! source.fill_rect(0, 8, 16, 8, Rgba::new(30, 60, 200, 255));
//!
//! let art = PixelArtRenderer::new()
//!     .pixel_size(4)
//!     .palette_size(8)
//!     .dither(true)
//!     .render(&source)
//!     .unwrap();
//!
//! assert_eq!(art.width(), 16);
//! assert_eq!(art.height(), 16);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! source buffer            (pristine decoded RGBA image, never mutated)
//!     |
//!     +---> PaletteBuilder  (median cut over sampled colors, once per call)
//!     |         |
//!     |      Palette        (ordered, read-only, at most target_size colors)
//!     |
//!     v
//! working buffer           (source copy, mutated in place by diffusion)
//!     |
//!     v
//! ╔═══════════════════════════════════════════╗
//! ║  Block scan (row-major, y outer, x inner) ║
//! ║                                           ║
//! ║  average block          (working buffer)  ║
//! ║      |                                    ║
//! ║  Palette::nearest       (Euclidean RGB)   ║
//! ║      |                                    ║
//! ║  error = average - chosen                 ║
//! ║      |                                    ║
//! ║  diffuse into working buffer (if enabled) ║
//! ║      |                                    ║
//! ║  paint solid block into output buffer     ║
//! ╚═══════════════════════════════════════════╝
//! ```
//!
//! # Why Two Buffers
//!
//! Error diffusion both reads and writes pixel data that later blocks
//! average. The working buffer is an explicitly owned copy of the source,
//! passed by exclusive reference into averaging and diffusion for the
//! duration of one [`render()`](PixelArtRenderer::render) call; the source
//! stays pristine so a conversion is repeatable and the caller's image
//! survives untouched. Because diffusion writes land east and south of the
//! current block -- regions the row-major scan has not consumed yet -- the
//! scan order is part of the algorithm's contract, and the dithering pass
//! is inherently sequential. Only the quantization-only path is
//! order-independent.
//!
//! # Why Integer RGB
//!
//! All color math happens on 8-bit integer channels with plain Euclidean
//! distance. Pixel art deliberately trades color fidelity for a stylized
//! look, and the palette is built from the very image being quantized, so
//! matches stay close in absolute channel terms; a perceptually uniform
//! space would complicate the pipeline without changing the aesthetic.
//! Channel arithmetic saturates: any value leaving `[0, 255]` during
//! diffusion is clamped, never an error.

pub mod buffer;
pub mod color;
pub mod dither;
pub mod palette;
pub mod render;


pub use buffer::PixelBuffer;
pub use color::{Rgb, Rgba};
pub use dither::{Kernel, FLOYD_STEINBERG};
pub use palette::{Palette, PaletteBuilder};
pub use render::{PixelArtRenderer, RenderError, RenderOptions};
