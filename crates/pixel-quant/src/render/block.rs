//! Block averaging.

use crate::buffer::PixelBuffer;
use crate::color::Rgba;

/// Mean color of the block anchored at `(x, y)`, clipped to buffer bounds.
///
/// Blocks at the right and bottom edges may be partial; the sums are divided
/// by the actual clipped pixel count, not the nominal `block_size` squared
/// area. Each channel -- alpha included -- is averaged independently and
/// rounded to nearest.
///
/// The buffer handed in here is the *working* buffer: when dithering is
/// active, earlier blocks' diffused error is part of what gets averaged.
///
/// # Panics (debug only)
///
/// Debug-asserts that the block origin lies inside the buffer.
pub fn average(buffer: &PixelBuffer, x: usize, y: usize, block_size: usize) -> Rgba {
    let x_end = (x + block_size).min(buffer.width());
    let y_end = (y + block_size).min(buffer.height());
    debug_assert!(
        x < buffer.width() && y < buffer.height(),
        "block origin ({x}, {y}) out of bounds"
    );

    let mut sum_r = 0u64;
    let mut sum_g = 0u64;
    let mut sum_b = 0u64;
    let mut sum_a = 0u64;
    let mut count = 0u64;

    for py in y..y_end {
        for px in x..x_end {
            let p = buffer.get(px, py);
            sum_r += p.r as u64;
            sum_g += p.g as u64;
            sum_b += p.b as u64;
            sum_a += p.a as u64;
            count += 1;
        }
    }

    let n = count as f64;
    Rgba::new(
        (sum_r as f64 / n).round() as u8,
        (sum_g as f64 / n).round() as u8,
        (sum_b as f64 / n).round() as u8,
        (sum_a as f64 / n).round() as u8,
    )
}
