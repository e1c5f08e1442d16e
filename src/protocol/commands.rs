//! # ESC/POS Control Bytes
//!
//! ESC/POS commands are byte sequences introduced by a control byte. The
//! printer treats everything else as text to print.
//!
//! ## Escape Sequence Structure
//!
//! - Two bytes: `ESC @`
//! - With one parameter: `ESC E n`, `ESC d n`, `GS B n`
//! - Length-prefixed: `GS ( k pL pH cn fn ...` (see [`super::barcode`])
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

/// ESC (Escape) - Command prefix byte
///
/// Hex: 0x1B, Decimal: 27
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for graphics, barcodes, cutter and symbol storage commands.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// NUL - Terminates 1D barcode data
pub const NUL: u8 = 0x00;

/// Fixed on/off pulse timing for the cash drawer kick (`ESC p m t1 t2`).
///
/// Units are 2ms, so 10 means 20ms on and 20ms off.
pub const DRAWER_PULSE: [u8; 2] = [10, 10];

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(72), [0x48, 0x00]); // 576 dots = 72 bytes
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}
