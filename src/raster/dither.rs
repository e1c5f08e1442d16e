//! # Monochrome Conversion
//!
//! Thermal printers print black or nothing. Grayscale pixels are turned
//! into dots either by a fixed threshold or by ordered (Bayer 8x8)
//! dithering, then packed eight to a byte.
//!
//! ## Ordered Dithering
//!
//! For each pixel position (x, y):
//!
//! 1. Look up a threshold from the matrix using (x mod 8, y mod 8)
//! 2. Compare the pixel's darkness to the threshold
//! 3. If darkness > threshold, print black; otherwise leave white
//!
//! Matrix values 0-63 are normalized to `(value + 0.5) / 64.0`, so full
//! black always prints and full white never does.

/// How grayscale pixels become dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dither {
    /// Luma strictly below the value prints black.
    Threshold(u8),
    /// Bayer 8x8 ordered dithering.
    Bayer,
}

impl Default for Dither {
    fn default() -> Self {
        Dither::Threshold(128)
    }
}

/// Bayer 8x8 dithering matrix
pub const BAYER8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Dithering threshold for a pixel position, in (0, 1).
#[inline]
pub fn threshold(x: usize, y: usize) -> f32 {
    let matrix_value = BAYER8[y & 7][x & 7];
    (matrix_value as f32 + 0.5) / 64.0
}

impl Dither {
    /// Decide whether the pixel at (x, y) with 8-bit luma prints a dot.
    ///
    /// Luma 0 is black, 255 is white.
    #[inline]
    pub fn is_black(self, x: usize, y: usize, luma: u8) -> bool {
        match self {
            Dither::Threshold(level) => luma < level,
            Dither::Bayer => {
                let darkness = 1.0 - luma as f32 / 255.0;
                darkness > threshold(x, y)
            }
        }
    }
}

/// Pack a row of pixels (true = black) MSB-first, padding the last byte
/// with white.
///
/// ```
/// use recibo::raster::dither::pack_row;
///
/// assert_eq!(pack_row(&[true, true, false, false, true, false, true, false]), vec![0xCA]);
/// assert_eq!(pack_row(&[true; 12]), vec![0xFF, 0xF0]);
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; pixels.len().div_ceil(8)];
    for (i, _) in pixels.iter().enumerate().filter(|(_, black)| **black) {
        bytes[i / 8] |= 0x80 >> (i % 8);
    }
    bytes
}
