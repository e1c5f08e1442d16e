//! # Text Styling Parameters
//!
//! Parameter values for the single-byte style commands. Each enum maps
//! directly to the `n` byte of its command; the encoder sends `value as u8`
//! without range checks.
//!
//! | Command | Bytes | Parameter |
//! |---------|-------|-----------|
//! | Underline | `ESC - n` | [`Underline`] |
//! | Justification | `ESC a n` | [`Justification`] |
//! | Font | `ESC M n` | [`Font`] |
//! | Print mode | `ESC ! n` | [`TextMode`] |
//! | Code table | `ESC t n` | [`CodeTable`] |
//! | Color | `ESC r n` | [`Color`] |
//! | Drawer kick | `ESC p m t1 t2` | [`DrawerPin`] |

/// Underline thickness (`ESC - n`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Underline {
    #[default]
    NoUnderline = 0,
    /// 1-dot thick underline
    Single = 1,
    /// 2-dot thick underline
    Double = 2,
}

/// Line justification (`ESC a n`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Justification {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// Character font (`ESC M n`, also used for barcode HRI text via `GS f n`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Font {
    /// Font A (12×24 dots)
    #[default]
    A = 0,
    /// Font B (9×17 dots)
    B = 1,
    /// Font C (available on some models)
    C = 2,
}

/// Print mode bits (`ESC ! n`)
///
/// Bit 4 doubles the height, bit 5 doubles the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextMode {
    #[default]
    Normal = 0x00,
    DualHeight = 0x10,
    DualWidth = 0x20,
    DualWidthAndHeight = 0x30,
}

/// Character code table (`ESC t n`)
///
/// The table selected here must match the text encoding used for writes,
/// otherwise the printer renders the wrong glyphs for bytes above 0x7F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CodeTable {
    /// PC437 (USA, standard Europe)
    #[default]
    Pc437 = 0,
    /// Katakana
    Katakana = 1,
    /// PC850 (Multilingual)
    Pc850 = 2,
    /// PC860 (Portuguese)
    Pc860 = 3,
    /// PC863 (Canadian-French)
    Pc863 = 4,
    /// PC865 (Nordic)
    Pc865 = 5,
    /// WPC1252 (Windows Latin-1)
    Wpc1252 = 16,
    /// PC866 (Cyrillic #2)
    Pc866 = 17,
    /// PC852 (Latin 2)
    Pc852 = 18,
    /// PC858 (Euro)
    Pc858 = 19,
}

/// Print color on two-color printers (`ESC r n`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Color {
    /// Black (first color)
    #[default]
    Color1 = 0,
    /// Red (second color)
    Color2 = 1,
}

/// Cash drawer kick-out connector pin (`ESC p m t1 t2`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DrawerPin {
    #[default]
    Pin2 = 0,
    Pin5 = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_bytes() {
        assert_eq!(Underline::Double as u8, 2);
        assert_eq!(Justification::Center as u8, 1);
        assert_eq!(Font::B as u8, 1);
        assert_eq!(TextMode::DualWidthAndHeight as u8, 0x30);
        assert_eq!(CodeTable::Wpc1252 as u8, 16);
        assert_eq!(Color::Color2 as u8, 1);
        assert_eq!(DrawerPin::Pin5 as u8, 1);
    }

    #[test]
    fn test_dual_modes_combine_bits() {
        assert_eq!(
            TextMode::DualHeight as u8 | TextMode::DualWidth as u8,
            TextMode::DualWidthAndHeight as u8
        );
    }
}
