//! Floyd-Steinberg error diffusion.
//!
//! When a block's averaged color is snapped to a palette entry, the
//! per-channel difference is not discarded: [`diffuse()`] spreads it into
//! the working buffer at the kernel offsets of every source pixel in the
//! block's footprint. Later blocks read those mutated pixels when they
//! average, so the lost detail re-emerges as variation between neighboring
//! blocks.
//!
//! Diffusion writes and block averaging share one buffer, which makes the
//! scan order load-bearing: a block's writes land east and south of it,
//! exactly the regions the row-major scan has not consumed yet.

mod kernel;

pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::buffer::PixelBuffer;

/// Diffuse a block's quantization error into the working buffer.
///
/// `error` is the signed per-channel difference between the block's
/// averaged color and its chosen palette color (`average - chosen`). For
/// every source pixel in the block (clipped to buffer bounds), each
/// in-bounds [`FLOYD_STEINBERG`] neighbor receives `error * weight / 16`
/// added to its red, green, and blue channels, stored clamped to
/// `[0, 255]`. Alpha is never touched. Neighbors outside the buffer are
/// skipped -- no wraparound.
///
/// Writes are applied one neighbor at a time in kernel order, so a pixel
/// targeted by several source pixels accumulates its shares through
/// repeated clamped 8-bit stores, matching the in-place behavior the rest
/// of the pipeline depends on.
pub fn diffuse(
    buffer: &mut PixelBuffer,
    x: usize,
    y: usize,
    block_size: usize,
    error: [f32; 3],
) {
    let width = buffer.width();
    let height = buffer.height();
    let divisor = FLOYD_STEINBERG.divisor as f32;

    let x_end = (x + block_size).min(width);
    let y_end = (y + block_size).min(height);

    for py in y..y_end {
        for px in x..x_end {
            for &(dx, dy, weight) in FLOYD_STEINBERG.entries {
                let nx = px as i64 + dx as i64;
                let ny = py as i64 + dy as i64;
                if nx < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);

                let scale = weight as f32 / divisor;
                let mut target = buffer.get(nx, ny);
                target.r = add_clamped(target.r, error[0] * scale);
                target.g = add_clamped(target.g, error[1] * scale);
                target.b = add_clamped(target.b, error[2] * scale);
                buffer.put(nx, ny, target);
            }
        }
    }
}

/// Add a signed error share to a channel, clamped to the 8-bit range.
#[inline]
fn add_clamped(channel: u8, delta: f32) -> u8 {
    (channel as f32 + delta).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    /// 4x4 buffer of a uniform opaque color.
    fn uniform_buffer(value: u8) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.fill_rect(0, 0, 4, 4, Rgba::new(value, value, value, 255));
        buffer
    }

    #[test]
    fn test_single_pixel_block_neighbor_shares() {
        let mut buffer = uniform_buffer(100);
        // Interior source pixel so all four neighbors are in bounds
        diffuse(&mut buffer, 1, 1, 1, [16.0, 32.0, -16.0]);

        // east: 7/16
        assert_eq!(buffer.get(2, 1), Rgba::new(107, 114, 93, 255));
        // southwest: 3/16
        assert_eq!(buffer.get(0, 2), Rgba::new(103, 106, 97, 255));
        // south: 5/16
        assert_eq!(buffer.get(1, 2), Rgba::new(105, 110, 95, 255));
        // southeast: 1/16
        assert_eq!(buffer.get(2, 2), Rgba::new(101, 102, 99, 255));

        // Source pixel itself is untouched
        assert_eq!(buffer.get(1, 1), Rgba::new(100, 100, 100, 255));
    }

    #[test]
    fn test_alpha_never_receives_error() {
        let mut buffer = PixelBuffer::new(3, 3);
        buffer.fill_rect(0, 0, 3, 3, Rgba::new(100, 100, 100, 42));
        diffuse(&mut buffer, 0, 0, 3, [80.0, 80.0, 80.0]);
        assert!(buffer.pixels().all(|p| p.a == 42));
    }

    #[test]
    fn test_clamps_at_channel_ceiling() {
        let mut buffer = uniform_buffer(250);
        diffuse(&mut buffer, 1, 1, 1, [200.0, 200.0, 200.0]);
        // 250 + 200 * 7/16 would be 337.5; stored value clamps to 255
        assert_eq!(buffer.get(2, 1).r, 255);
    }

    #[test]
    fn test_clamps_at_channel_floor() {
        let mut buffer = uniform_buffer(5);
        diffuse(&mut buffer, 1, 1, 1, [-200.0, -200.0, -200.0]);
        assert_eq!(buffer.get(2, 1).r, 0);
    }

    #[test]
    fn test_out_of_bounds_neighbors_skipped() {
        // Source pixel in the bottom-right corner: every neighbor is
        // outside the buffer, so nothing changes anywhere.
        let mut buffer = uniform_buffer(100);
        let before = buffer.clone();
        diffuse(&mut buffer, 3, 3, 1, [64.0, 64.0, 64.0]);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_southwest_skipped_at_left_edge() {
        let mut buffer = uniform_buffer(100);
        diffuse(&mut buffer, 0, 0, 1, [16.0, 16.0, 16.0]);
        // Southwest of (0, 0) would be (-1, 1): skipped. South gets 5/16.
        assert_eq!(buffer.get(0, 1), Rgba::new(105, 105, 105, 255));
        // East gets 7/16
        assert_eq!(buffer.get(1, 0), Rgba::new(107, 107, 107, 255));
    }

    #[test]
    fn test_block_footprint_diffuses_per_pixel() {
        // A 2x2 block at the origin has four source pixels; the pixel just
        // east of the block, (2, 0), is hit twice: as the east neighbor of
        // (1, 0) and the southeast neighbor of (1, -1)... which does not
        // exist, so exactly once. (2, 1) however is east of (1, 1) and
        // southeast of (1, 0): two accumulated shares of 7/16 and 1/16.
        let mut buffer = uniform_buffer(100);
        diffuse(&mut buffer, 0, 0, 2, [16.0, 16.0, 16.0]);

        assert_eq!(buffer.get(2, 0).r, 107); // 100 + 7
        assert_eq!(buffer.get(2, 1).r, 108); // 100 + 7 + 1
    }

    #[test]
    fn test_interior_pixel_total_share_equals_error() {
        // With every neighbor in bounds and no clamping, the four shares
        // sum to the full error: (7 + 3 + 5 + 1) / 16 = 1.
        let mut buffer = uniform_buffer(100);
        let before = buffer.clone();
        diffuse(&mut buffer, 1, 1, 1, [32.0, 32.0, 32.0]);

        let injected: i64 = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .map(|(x, y)| buffer.get(x, y).r as i64 - before.get(x, y).r as i64)
            .sum();
        assert_eq!(injected, 32);
    }
}
