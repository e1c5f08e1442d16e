//! # Text Encoding
//!
//! Printers do not understand Unicode. Text has to be mapped to the bytes of
//! whatever code table the printer currently has selected (`ESC t n`).
//!
//! [`TextEncoder`] is the seam the [`Printer`](crate::printer::Printer)
//! uses for that mapping. [`CodePages`] is the built-in implementation:
//!
//! | Name(s) | Output |
//! |---------|--------|
//! | `ascii`, `us-ascii` | 7-bit ASCII |
//! | `cp437`, `ibm437`, `pc437` | IBM Code Page 437 |
//! | `latin1`, `iso-8859-1` | ISO 8859-1 |
//! | `utf8`, `utf-8` | UTF-8 bytes, unchanged |
//!
//! Names are case-insensitive. Characters a code page cannot represent are
//! replaced with `?` and logged; an unknown name is an error.
//!
//! ```
//! use recibo::encoding::{CodePages, TextEncoder};
//!
//! let bytes = CodePages.encode("Año", "CP437")?;
//! assert_eq!(bytes, vec![0x41, 0xA4, 0x6F]);
//! # Ok::<(), recibo::ReciboError>(())
//! ```

pub mod cp437;

use crate::error::ReciboError;

/// Encoding used when none is configured.
pub const DEFAULT_ENCODING: &str = "ascii";

/// Byte written in place of characters the target encoding lacks.
const REPLACEMENT: u8 = b'?';

/// Maps a string and a named character encoding to printer bytes.
pub trait TextEncoder: Send + Sync {
    /// Encode `text` using the encoding called `encoding`.
    ///
    /// Fails with [`ReciboError::UnknownEncoding`] for names the encoder
    /// does not support.
    fn encode(&self, text: &str, encoding: &str) -> Result<Vec<u8>, ReciboError>;
}

/// The encodings this crate knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Ascii,
    Cp437,
    Latin1,
    Utf8,
}

impl Charset {
    /// Look up a charset by any of its accepted names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ascii" | "us-ascii" => Some(Charset::Ascii),
            "cp437" | "ibm437" | "pc437" => Some(Charset::Cp437),
            "latin1" | "iso-8859-1" | "iso8859-1" => Some(Charset::Latin1),
            "utf8" | "utf-8" => Some(Charset::Utf8),
            _ => None,
        }
    }

    fn encode_char(self, ch: char) -> Option<u8> {
        match self {
            Charset::Ascii => ch.is_ascii().then_some(ch as u8),
            Charset::Cp437 => cp437::encode_char(ch),
            Charset::Latin1 => u8::try_from(u32::from(ch)).ok(),
            Charset::Utf8 => None,
        }
    }
}

/// Built-in [`TextEncoder`] covering [`Charset`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePages;

impl TextEncoder for CodePages {
    fn encode(&self, text: &str, encoding: &str) -> Result<Vec<u8>, ReciboError> {
        let charset = Charset::from_name(encoding)
            .ok_or_else(|| ReciboError::UnknownEncoding(encoding.to_string()))?;

        if charset == Charset::Utf8 {
            return Ok(text.as_bytes().to_vec());
        }

        let mut out = Vec::with_capacity(text.len());
        for ch in text.chars() {
            match charset.encode_char(ch) {
                Some(byte) => out.push(byte),
                None => {
                    tracing::warn!(
                        "{}: unmapped character '{}' (U+{:04X}), replacing with '?'",
                        encoding,
                        ch,
                        ch as u32
                    );
                    out.push(REPLACEMENT);
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        assert_eq!(CodePages.encode("Total: 9.99", "ascii").unwrap(), b"Total: 9.99");
        assert_eq!(CodePages.encode("café", "ascii").unwrap(), b"caf?");
    }

    #[test]
    fn test_names_are_case_insensitive() {
        assert_eq!(CodePages.encode("é", "CP437").unwrap(), vec![0x82]);
        assert_eq!(CodePages.encode("é", "IBM437").unwrap(), vec![0x82]);
        assert_eq!(CodePages.encode("é", "ISO-8859-1").unwrap(), vec![0xE9]);
    }

    #[test]
    fn test_latin1_range() {
        assert_eq!(CodePages.encode("ÿ€", "latin1").unwrap(), vec![0xFF, b'?']);
    }

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(CodePages.encode("★", "utf-8").unwrap(), "★".as_bytes());
    }

    #[test]
    fn test_unknown_encoding() {
        let err = CodePages.encode("hello", "klingon").unwrap_err();
        assert!(matches!(err, ReciboError::UnknownEncoding(ref name) if name == "klingon"));
    }

    #[test]
    fn test_empty_text() {
        assert!(CodePages.encode("", "cp437").unwrap().is_empty());
    }
}
