//! # ESC/POS Barcode Commands
//!
//! This module implements the byte layouts for 1D barcodes and the two 2D
//! symbols (QR Code and PDF417). Each submodule writes a complete command
//! sequence into a [`ByteBuffer`].
//!
//! ## Symbol Storage Blocks
//!
//! QR and PDF417 are configured through the `GS ( k` "symbol storage"
//! sub-protocol. Every block has the same framing:
//!
//! ```text
//! GS ( k  pL pH  cn fn [m]  payload...
//! └──┬──┘ └─┬─┘  └───┬───┘
//!  prefix  count   header
//!
//! count = len(header) + len(payload), little-endian u16
//! ```
//!
//! The count covers everything after the count field. For the data store
//! block the header is three bytes (`cn 50 30`), so the count is the data
//! length plus 3, never the data length alone.
//!
//! ## Usage
//!
//! ```
//! use recibo::buffer::ByteBuffer;
//! use recibo::protocol::barcode::{qr, QrOptions, QrErrorLevel};
//!
//! let mut buf = ByteBuffer::new();
//! qr::write(&mut buf, b"https://example.com", QrOptions::new().error_level(QrErrorLevel::M));
//! let bytes = buf.drain();
//! assert_eq!(&bytes[0..3], &[0x1D, 0x28, 0x6B]);
//! ```

use super::commands::{GS, NUL};
use super::text::Font;
use crate::buffer::ByteBuffer;

/// Prefix shared by every symbol storage block: `GS ( k`
pub const SYMBOL_PREFIX: [u8; 3] = [GS, b'(', b'k'];

/// Write one symbol storage block.
///
/// The count field is `header.len() + payload.len()`.
pub fn symbol_block(buf: &mut ByteBuffer, header: &[u8], payload: &[u8]) {
    let count = header.len() + payload.len();
    debug_assert!(
        count <= u16::MAX as usize,
        "Symbol block of {} bytes does not fit a 16-bit count",
        count
    );

    buf.write_bytes(&SYMBOL_PREFIX);
    buf.write_u16_le(count as u16);
    buf.write_bytes(header);
    buf.write_bytes(payload);
}

// ============================================================================
// 1D BARCODES (GS k)
// ============================================================================

/// 1D barcode symbology (`GS k m d1...dk NUL`)
///
/// Values are the NUL-terminated function A codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Barcode {
    /// UPC-A (11-12 digits)
    UpcA = 0,
    /// UPC-E (6-8 digits)
    UpcE = 1,
    /// EAN-13 / JAN-13 (12-13 digits)
    Ean13 = 2,
    /// EAN-8 / JAN-8 (7-8 digits)
    Ean8 = 3,
    /// Code39 (A-Z, 0-9, space, -.$/%+)
    Code39 = 4,
    /// ITF (Interleaved 2 of 5, numeric pairs)
    Itf = 5,
    /// NW-7 / Codabar
    Codabar = 6,
}

/// HRI (Human Readable Interpretation) position (`GS H n`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Position {
    #[default]
    None = 0,
    Above = 1,
    Below = 2,
    Both = 3,
}

/// Settings sent ahead of a 1D barcode.
///
/// Defaults are the printer's power-on values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeOptions {
    /// Bar height in dots (`GS h n`)
    pub height: u8,
    /// Module width, 2-6 on most printers (`GS w n`)
    pub width: u8,
    /// HRI font (`GS f n`)
    pub font: Font,
    /// HRI position (`GS H n`)
    pub position: Position,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            height: 162,
            width: 3,
            font: Font::A,
            position: Position::None,
        }
    }
}

/// 1D barcode command sequence.
pub mod barcode1d {
    use super::*;

    /// # Print 1D Barcode
    ///
    /// Writes four set-up commands and then the barcode itself:
    ///
    /// | Step | Bytes |
    /// |------|-------|
    /// | HRI position | `GS H n` |
    /// | HRI font | `GS f n` |
    /// | Height | `GS h n` |
    /// | Module width | `GS w n` |
    /// | Print | `GS k m data NUL` |
    ///
    /// `data` is sent verbatim; the printer rejects content that does not
    /// suit the symbology.
    pub fn write(buf: &mut ByteBuffer, data: &[u8], kind: Barcode, options: BarcodeOptions) {
        buf.write_bytes(&[GS, b'H', options.position as u8]);
        buf.write_bytes(&[GS, b'f', options.font as u8]);
        buf.write_bytes(&[GS, b'h', options.height]);
        buf.write_bytes(&[GS, b'w', options.width]);

        buf.write_bytes(&[GS, b'k', kind as u8]);
        buf.write_bytes(data);
        buf.write_u8(NUL);
    }
}

// ============================================================================
// QR CODE (GS ( k, cn = 49)
// ============================================================================

/// QR Code model (function 165)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum QrModel {
    /// Original QR Code
    #[default]
    Model1 = 0x31,
    /// Enhanced QR Code with alignment patterns
    Model2 = 0x32,
    /// Micro QR Code
    Micro = 0x33,
}

/// QR Code error correction level (function 169)
///
/// | Level | Recovery |
/// |-------|----------|
/// | L | ~7% |
/// | M | ~15% |
/// | Q | ~25% |
/// | H | ~30% |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum QrErrorLevel {
    #[default]
    L = 0x30,
    M = 0x31,
    Q = 0x32,
    H = 0x33,
}

/// Optional QR settings. Unset fields fall back to model 1, level L and
/// module size 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QrOptions {
    pub model: Option<QrModel>,
    pub error_level: Option<QrErrorLevel>,
    /// Module size in dots, 1-16
    pub size: Option<u8>,
}

impl QrOptions {
    pub const DEFAULT_SIZE: u8 = 4;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: QrModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn error_level(mut self, level: QrErrorLevel) -> Self {
        self.error_level = Some(level);
        self
    }

    pub fn size(mut self, size: u8) -> Self {
        self.size = Some(size);
        self
    }

    fn resolve(self) -> (QrModel, QrErrorLevel, u8) {
        (
            self.model.unwrap_or_default(),
            self.error_level.unwrap_or_default(),
            self.size.unwrap_or(Self::DEFAULT_SIZE),
        )
    }
}

/// QR Code command sequence.
pub mod qr {
    use super::*;

    /// Symbol type byte for QR in the `cn` position
    pub const CN: u8 = 0x31;

    /// # Store and Print a QR Code
    ///
    /// | Block | Header | Payload |
    /// |-------|--------|---------|
    /// | Select model | `31 41` | `model 00` |
    /// | Store data | `31 50 30` | data |
    /// | Error correction | `31 45` | level |
    /// | Module size | `31 43` | size |
    /// | Print | `31 51` | `30` |
    pub fn write(buf: &mut ByteBuffer, data: &[u8], options: QrOptions) {
        let (model, level, size) = options.resolve();

        symbol_block(buf, &[CN, 0x41], &[model as u8, 0x00]);
        symbol_block(buf, &[CN, 0x50, 0x30], data);
        symbol_block(buf, &[CN, 0x45], &[level as u8]);
        symbol_block(buf, &[CN, 0x43], &[size]);
        symbol_block(buf, &[CN, 0x51], &[0x30]);
    }
}

// ============================================================================
// PDF417 (GS ( k, cn = 48)
// ============================================================================

/// PDF417 variant (function 070)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Pdf417Type {
    #[default]
    Standard = 0,
    Truncated = 1,
}

/// PDF417 error correction level (function 069, level mode `m = 48`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Pdf417ErrorLevel {
    Level0 = 0x30,
    #[default]
    Level1 = 0x31,
    Level2 = 0x32,
    Level3 = 0x33,
    Level4 = 0x34,
    Level5 = 0x35,
    Level6 = 0x36,
    Level7 = 0x37,
    Level8 = 0x38,
}

/// PDF417 settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pdf417Options {
    pub kind: Pdf417Type,
    /// Row height as a multiple of the module width
    pub height: u8,
    /// Module width in dots
    pub width: u8,
    /// Data columns, 0 = automatic
    pub columns: u8,
    /// Rows, 0 = automatic
    pub rows: u8,
    pub error_level: Pdf417ErrorLevel,
}

impl Default for Pdf417Options {
    fn default() -> Self {
        Self {
            kind: Pdf417Type::Standard,
            height: 1,
            width: 20,
            columns: 0,
            rows: 0,
            error_level: Pdf417ErrorLevel::Level1,
        }
    }
}

/// PDF417 command sequence.
pub mod pdf417 {
    use super::*;

    /// Symbol type byte for PDF417 in the `cn` position
    pub const CN: u8 = 0x30;

    /// # Store and Print a PDF417 Symbol
    ///
    /// | Block | Header | Payload |
    /// |-------|--------|---------|
    /// | Store data | `30 50 30` | data |
    /// | Columns | `30 41` | columns |
    /// | Rows | `30 42` | rows |
    /// | Module width | `30 43` | width |
    /// | Row height | `30 44` | height |
    /// | Error level | `30 45` | `30 level` |
    /// | Type | `30 46` | type |
    /// | Print | `30 51` | `30` |
    pub fn write(buf: &mut ByteBuffer, data: &[u8], options: Pdf417Options) {
        symbol_block(buf, &[CN, 0x50, 0x30], data);
        symbol_block(buf, &[CN, 0x41], &[options.columns]);
        symbol_block(buf, &[CN, 0x42], &[options.rows]);
        symbol_block(buf, &[CN, 0x43], &[options.width]);
        symbol_block(buf, &[CN, 0x44], &[options.height]);
        symbol_block(buf, &[CN, 0x45], &[0x30, options.error_level as u8]);
        symbol_block(buf, &[CN, 0x46], &[options.kind as u8]);
        symbol_block(buf, &[CN, 0x51], &[0x30]);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn encode(f: impl FnOnce(&mut ByteBuffer)) -> Vec<u8> {
        let mut buf = ByteBuffer::new();
        f(&mut buf);
        buf.drain()
    }

    #[test]
    fn test_symbol_block_counts_header_and_payload() {
        let cmd = encode(|b| symbol_block(b, &[0x31, 0x50, 0x30], b"ABCDE"));
        assert_eq!(&cmd[0..3], &SYMBOL_PREFIX);
        assert_eq!(cmd[3], 8); // 5 data + 3 header
        assert_eq!(cmd[4], 0);
        assert_eq!(&cmd[5..8], &[0x31, 0x50, 0x30]);
        assert_eq!(&cmd[8..], b"ABCDE");
    }

    #[test]
    fn test_symbol_block_count_high_byte() {
        let data = vec![b'x'; 300];
        let cmd = encode(|b| symbol_block(b, &[0x31, 0x50, 0x30], &data));
        // 303 = 0x012F
        assert_eq!(&cmd[3..5], &[0x2F, 0x01]);
        assert_eq!(cmd.len(), 3 + 2 + 303);
    }

    mod barcode1d_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_setup_then_print() {
            let options = BarcodeOptions {
                height: 80,
                width: 2,
                font: Font::B,
                position: Position::Below,
            };
            let cmd = encode(|b| barcode1d::write(b, b"12345678", Barcode::Ean8, options));
            let mut expected = vec![
                0x1D, b'H', 2, //
                0x1D, b'f', 1, //
                0x1D, b'h', 80, //
                0x1D, b'w', 2, //
                0x1D, b'k', 3,
            ];
            expected.extend_from_slice(b"12345678");
            expected.push(0x00);
            assert_eq!(cmd, expected);
        }

        #[test]
        fn test_default_options() {
            let cmd = encode(|b| {
                barcode1d::write(b, b"CODE", Barcode::Code39, BarcodeOptions::default())
            });
            assert_eq!(&cmd[0..12], &[0x1D, b'H', 0, 0x1D, b'f', 0, 0x1D, b'h', 162, 0x1D, b'w', 3]);
            assert_eq!(*cmd.last().unwrap(), 0x00);
        }
    }

    mod qr_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_sequence() {
            let cmd = encode(|b| qr::write(b, b"Hi", QrOptions::default()));
            let expected = vec![
                // Select model 1
                0x1D, 0x28, 0x6B, 0x04, 0x00, 0x31, 0x41, 0x31, 0x00,
                // Store "Hi"
                0x1D, 0x28, 0x6B, 0x05, 0x00, 0x31, 0x50, 0x30, b'H', b'i',
                // Error correction L
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x45, 0x30,
                // Module size 4
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x43, 0x04,
                // Print
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x51, 0x30,
            ];
            assert_eq!(cmd, expected);
        }

        #[test]
        fn test_options_override_defaults() {
            let options = QrOptions::new()
                .model(QrModel::Model2)
                .error_level(QrErrorLevel::H)
                .size(8);
            let cmd = encode(|b| qr::write(b, b"", options));
            assert_eq!(cmd[7], 0x32); // model 2
            // Empty data still carries the 3-byte header
            assert_eq!(&cmd[9..17], &[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x50, 0x30]);
            assert_eq!(cmd[24], 0x33); // level H
            assert_eq!(cmd[32], 8); // size
        }
    }

    mod pdf417_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_sequence() {
            let cmd = encode(|b| pdf417::write(b, b"PDF", Pdf417Options::default()));
            let expected = vec![
                0x1D, 0x28, 0x6B, 0x06, 0x00, 0x30, 0x50, 0x30, b'P', b'D', b'F',
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x30, 0x41, 0, // columns
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x30, 0x42, 0, // rows
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x30, 0x43, 20, // width
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x30, 0x44, 1, // height
                0x1D, 0x28, 0x6B, 0x04, 0x00, 0x30, 0x45, 0x30, 0x31, // error level 1
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x30, 0x46, 0, // standard
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x30, 0x51, 0x30, // print
            ];
            assert_eq!(cmd, expected);
        }

        #[test]
        fn test_truncated_with_fixed_grid() {
            let options = Pdf417Options {
                kind: Pdf417Type::Truncated,
                columns: 4,
                rows: 10,
                error_level: Pdf417ErrorLevel::Level8,
                ..Default::default()
            };
            let cmd = encode(|b| pdf417::write(b, b"", options));
            // data block is 8 bytes for empty data
            assert_eq!(cmd[8 + 7], 4);
            assert_eq!(cmd[8 + 8 + 7], 10);
            assert!(cmd.ends_with(&[
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x30, 0x46, 1, //
                0x1D, 0x28, 0x6B, 0x03, 0x00, 0x30, 0x51, 0x30,
            ]));
            assert!(cmd.windows(2).any(|w| w == [0x30, 0x38]));
        }
    }
}
