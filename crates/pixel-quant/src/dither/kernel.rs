//! Error diffusion kernel definition.

/// An error diffusion kernel.
///
/// Each entry specifies a neighbor offset `(dx, dy)` relative to the source
/// pixel and the weight of the error share that neighbor receives. A
/// neighbor's share is `error * weight / divisor`.
///
/// `dy` is never negative: error only flows to pixels the scan has not yet
/// consumed (east, and the row below).
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16):
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 east, 3/16 southwest, 5/16 south, 1/16 southeast.
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // east
        (-1, 1, 3), // southwest
        (0, 1, 5),  // south
        (1, 1, 1),  // southeast
    ],
    divisor: 16,
};
