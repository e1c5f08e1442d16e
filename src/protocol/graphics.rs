//! # ESC/POS Raster Graphics
//!
//! ## Bit Packing
//!
//! Graphics data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```

use super::commands::GS;
use crate::buffer::ByteBuffer;

/// Raster scaling mode (`m` in `GS v 0 m`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RasterMode {
    #[default]
    Normal = 0,
    DoubleWidth = 1,
    DoubleHeight = 2,
    Quadruple = 3,
}

/// Header bytes `GS v 0 m`.
#[inline]
pub const fn raster_header(mode: RasterMode) -> [u8; 4] {
    [GS, b'v', b'0', mode as u8]
}

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `m`: [`RasterMode`]
/// - `xL, xH`: Width in **bytes**, little-endian
/// - `yL, yH`: Height in dots, little-endian
/// - `d1...dk`: Row-major packed bits, k = width_bytes × height
///
/// Data is written verbatim; a length that does not match the header is the
/// caller's problem and shows up on paper, not here.
pub fn raster(buf: &mut ByteBuffer, width_bytes: u16, height: u16, mode: RasterMode, data: &[u8]) {
    buf.write_bytes(&raster_header(mode));
    buf.write_u16_le(width_bytes);
    buf.write_u16_le(height);
    buf.write_bytes(data);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_layout() {
        let mut buf = ByteBuffer::new();
        let data = vec![0xAA; 72 * 3];
        raster(&mut buf, 72, 3, RasterMode::DoubleHeight, &data);
        let cmd = buf.drain();

        assert_eq!(&cmd[0..4], &[0x1D, 0x76, 0x30, 2]);
        assert_eq!(&cmd[4..6], &[72, 0]);
        assert_eq!(&cmd[6..8], &[3, 0]);
        assert_eq!(&cmd[8..], &data[..]);
        assert_eq!(cmd.len(), 8 + data.len());
    }

    #[test]
    fn test_raster_tall_image_height_bytes() {
        let mut buf = ByteBuffer::new();
        raster(&mut buf, 1, 500, RasterMode::Normal, &[0; 500]);
        let cmd = buf.drain();
        // 500 = 0x01F4
        assert_eq!(&cmd[6..8], &[0xF4, 0x01]);
    }
}
