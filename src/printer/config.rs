//! # Printer Configuration
//!
//! Hardware profiles for common receipt printer classes.
//!
//! | Profile | Paper | Width (dots) | Resolution | Code table |
//! |---------|-------|--------------|------------|------------|
//! | 80mm | 80mm | 576 | 203 DPI | PC437 |
//! | 58mm | 58mm | 384 | 203 DPI | PC437 |
//!
//! ## Usage
//!
//! ```
//! use recibo::printer::PrinterConfig;
//!
//! let config = PrinterConfig::by_name("80mm").unwrap();
//! println!("Print width: {} dots ({} bytes)",
//!          config.width_dots,
//!          config.width_bytes());
//! ```

use crate::protocol::text::CodeTable;

/// # Printer Configuration
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
/// width_mm = width_dots / dots_per_mm
///
/// For an 80mm printer:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   width_mm = 576 / 8 = 72mm
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Profile name
    pub name: &'static str,

    /// Maximum print width in dots (pixels)
    pub width_dots: u16,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Text encoding a session starts with
    pub default_encoding: &'static str,

    /// Code table matching `default_encoding`
    pub code_table: CodeTable,
}

impl PrinterConfig {
    /// 80mm paper, 72mm (576 dot) print area. Epson TM-T20/TM-T88 class.
    pub const GENERIC_80MM: Self = Self {
        name: "80mm",
        width_dots: 576,
        dpi: 203,
        default_encoding: "cp437",
        code_table: CodeTable::Pc437,
    };

    /// 58mm paper, 48mm (384 dot) print area.
    pub const GENERIC_58MM: Self = Self {
        name: "58mm",
        width_dots: 384,
        dpi: 203,
        default_encoding: "cp437",
        code_table: CodeTable::Pc437,
    };

    pub const ALL: [Self; 2] = [Self::GENERIC_80MM, Self::GENERIC_58MM];

    /// Look up a profile by name, ignoring case.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|config| config.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Print width in bytes (8 dots per byte)
    #[inline]
    pub fn width_bytes(&self) -> u16 {
        self.width_dots.div_ceil(8)
    }

    /// Calculate dots per millimeter
    ///
    /// ```
    /// use recibo::printer::PrinterConfig;
    ///
    /// let config = PrinterConfig::GENERIC_80MM;
    /// assert!((config.dots_per_mm() - 8.0).abs() < 0.1);
    /// ```
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Calculate print width in millimeters
    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.width_dots as f32 / self.dots_per_mm()
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::GENERIC_80MM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(PrinterConfig::by_name("80MM"), Some(PrinterConfig::GENERIC_80MM));
        assert_eq!(PrinterConfig::by_name(" 58mm "), Some(PrinterConfig::GENERIC_58MM));
        assert_eq!(PrinterConfig::by_name("110mm"), None);
    }

    #[test]
    fn test_dimensions() {
        let config = PrinterConfig::GENERIC_80MM;
        assert_eq!(config.width_bytes(), 72);
        assert!((config.width_mm() - 72.0).abs() < 0.5);
        assert_eq!(PrinterConfig::GENERIC_58MM.width_bytes(), 48);
    }
}
