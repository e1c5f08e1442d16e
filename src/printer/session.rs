//! # Printer Session
//!
//! [`Printer`] turns printing intents into ESC/POS bytes. Every method
//! appends a command to an internal [`ByteBuffer`] and returns the printer
//! again so calls chain:
//!
//! ```
//! use recibo::printer::Printer;
//! use recibo::protocol::text::Justification;
//! use recibo::transport::MemoryTransport;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), recibo::ReciboError> {
//! let mut transport = MemoryTransport::new();
//! let mut printer = Printer::new(&mut transport);
//!
//! printer.open().await?;
//! printer
//!     .init()
//!     .set_justification(Justification::Center)
//!     .set_bold(true)
//!     .write_line("RECEIPT", None)?
//!     .set_bold(false)
//!     .feed(2)
//!     .cut(false);
//! printer.close().await?;
//!
//! assert_eq!(&transport.bytes()[0..2], &[0x1B, 0x40]);
//! # Ok(())
//! # }
//! ```
//!
//! Nothing reaches the transport until [`Printer::flush`] (or
//! [`Printer::close`], which flushes first). Dropping a printer discards
//! unflushed bytes.
//!
//! ## No Validation
//!
//! Parameters are encoded exactly as given. A barcode width the printer
//! does not support, or raster data shorter than its header claims, is
//! sent anyway and the printer decides what to do with it.
//!
//! ## Exclusive Use
//!
//! A session borrows its transport mutably and every method takes
//! `&mut self`, so one printer is driven by one sequence of calls at a
//! time. Interleaving two jobs on one transport is not expressible.

use std::fmt;

use crate::buffer::ByteBuffer;
use crate::encoding::{CodePages, DEFAULT_ENCODING, TextEncoder};
use crate::error::ReciboError;
use crate::protocol::barcode::{
    Barcode, BarcodeOptions, Pdf417Options, QrOptions, barcode1d, pdf417, qr,
};
use crate::protocol::commands::{DRAWER_PULSE, ESC, GS, LF};
use crate::protocol::graphics::{self, RasterMode};
use crate::protocol::text::{
    CodeTable, Color, DrawerPin, Font, Justification, TextMode, Underline,
};
use crate::raster::Raster;
use crate::transport::Transport;

use super::config::PrinterConfig;

/// Something to append verbatim or after text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    /// Text, encoded with `encoding` or the session default
    Text {
        text: &'a str,
        encoding: Option<&'a str>,
    },
    /// Raw bytes
    Bytes(&'a [u8]),
    /// One raw byte
    Byte(u8),
}

impl<'a> Payload<'a> {
    /// Text with an explicit encoding.
    pub fn text_in(text: &'a str, encoding: &'a str) -> Self {
        Payload::Text {
            text,
            encoding: Some(encoding),
        }
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(text: &'a str) -> Self {
        Payload::Text {
            text,
            encoding: None,
        }
    }
}

impl<'a> From<&'a String> for Payload<'a> {
    fn from(text: &'a String) -> Self {
        Payload::from(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Payload<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Payload::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Payload<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Payload::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Payload<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<u8> for Payload<'_> {
    fn from(byte: u8) -> Self {
        Payload::Byte(byte)
    }
}

/// Buzzer settings (`ESC B n t`).
///
/// `None` or zero falls back to 3 beeps of 10 × 100ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BeepOptions {
    pub count: Option<u8>,
    /// Length of each beep in units of 100ms
    pub duration: Option<u8>,
}

impl BeepOptions {
    pub const DEFAULT_COUNT: u8 = 3;
    pub const DEFAULT_DURATION: u8 = 10;

    pub fn new(count: u8, duration: u8) -> Self {
        Self {
            count: Some(count),
            duration: Some(duration),
        }
    }

    fn resolve(self) -> (u8, u8) {
        let or_default = |value: Option<u8>, default| value.filter(|&n| n != 0).unwrap_or(default);
        (
            or_default(self.count, Self::DEFAULT_COUNT),
            or_default(self.duration, Self::DEFAULT_DURATION),
        )
    }
}

/// ESC/POS command encoder bound to a transport.
pub struct Printer<'t, T: Transport + ?Sized> {
    buffer: ByteBuffer,
    encoding: String,
    text_encoder: Box<dyn TextEncoder>,
    transport: &'t mut T,
}

impl<T: Transport + ?Sized> fmt::Debug for Printer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("pending", &self.buffer.len())
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

impl<'t, T: Transport + ?Sized> Printer<'t, T> {
    /// Start a session that encodes text as ASCII.
    pub fn new(transport: &'t mut T) -> Self {
        Self::with_encoding(transport, DEFAULT_ENCODING)
    }

    /// Start a session with a default text encoding, e.g. `"cp437"`.
    pub fn with_encoding(transport: &'t mut T, encoding: impl Into<String>) -> Self {
        Self {
            buffer: ByteBuffer::new(),
            encoding: encoding.into(),
            text_encoder: Box::new(CodePages),
            transport,
        }
    }

    /// Start a session using a profile's default encoding.
    ///
    /// No bytes are written; select the matching code table with
    /// [`Printer::set_code_table`] after [`Printer::init`].
    pub fn with_config(transport: &'t mut T, config: &PrinterConfig) -> Self {
        Self::with_encoding(transport, config.default_encoding)
    }

    /// Replace the text encoder (defaults to [`CodePages`]).
    pub fn with_text_encoder(mut self, encoder: impl TextEncoder + 'static) -> Self {
        self.text_encoder = Box::new(encoder);
        self
    }

    /// Current default text encoding.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Bytes encoded but not yet flushed.
    pub fn pending(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Change the default encoding for later text writes.
    pub fn set_encoding(&mut self, encoding: impl Into<String>) -> &mut Self {
        self.encoding = encoding.into();
        self
    }

    // ========================================================================
    // TRANSPORT
    // ========================================================================

    /// Connect the transport.
    pub async fn open(&mut self) -> Result<&mut Self, ReciboError> {
        self.transport.open().await?;
        Ok(self)
    }

    /// Send everything encoded so far.
    ///
    /// The buffer is drained before the write, so on failure the bytes are
    /// gone; they are not queued again.
    pub async fn flush(&mut self) -> Result<&mut Self, ReciboError> {
        let data = self.buffer.drain();
        tracing::debug!(bytes = data.len(), "flushing print buffer");
        self.transport.write(&data).await?;
        Ok(self)
    }

    /// Flush, then disconnect the transport.
    pub async fn close(&mut self) -> Result<(), ReciboError> {
        self.flush().await?;
        self.transport.close().await
    }

    /// Discard bytes that have not been flushed.
    pub fn clear_buffer(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    // ========================================================================
    // RAW AND TEXT OUTPUT
    // ========================================================================

    /// Append a payload.
    ///
    /// Text is encoded with its own encoding if it has one, else with the
    /// session default. Bytes are appended verbatim.
    pub fn write<'p>(&mut self, payload: impl Into<Payload<'p>>) -> Result<&mut Self, ReciboError> {
        match payload.into() {
            Payload::Text { text, encoding } => {
                let encoding = encoding.unwrap_or(self.encoding.as_str());
                let bytes = self.text_encoder.encode(text, encoding)?;
                self.buffer.write_bytes(&bytes);
            }
            Payload::Bytes(bytes) => self.buffer.write_bytes(bytes),
            Payload::Byte(byte) => self.buffer.write_u8(byte),
        }
        Ok(self)
    }

    /// Append text followed by a line feed.
    pub fn write_line(&mut self, text: &str, encoding: Option<&str>) -> Result<&mut Self, ReciboError> {
        self.write(Payload::Text { text, encoding })?;
        self.buffer.write_u8(LF);
        Ok(self)
    }

    /// [`Printer::write_line`] once per item, in order.
    pub fn write_list<I, S>(&mut self, lines: I, encoding: Option<&str>) -> Result<&mut Self, ReciboError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref(), encoding)?;
        }
        Ok(self)
    }

    // ========================================================================
    // PRINTER CONTROL
    // ========================================================================

    /// Reset the printer (`ESC @`).
    pub fn init(&mut self) -> &mut Self {
        self.command(&[ESC, b'@'])
    }

    /// Return text styling to defaults: inverse off, bold off, no
    /// underline, left aligned, normal size, font A.
    pub fn reset_styles(&mut self) -> &mut Self {
        self.set_inverse(false)
            .set_bold(false)
            .set_underline(Underline::NoUnderline)
            .set_justification(Justification::Left)
            .set_text_mode(TextMode::Normal)
            .set_font(Font::A)
    }

    /// Print and feed `lines` lines (`ESC d n`).
    pub fn feed(&mut self, lines: u8) -> &mut Self {
        self.command(&[ESC, b'd', lines])
    }

    /// Print and feed `lines` lines backwards (`ESC e n`).
    pub fn reverse_feed(&mut self, lines: u8) -> &mut Self {
        self.command(&[ESC, b'e', lines])
    }

    /// Cut the paper (`GS V A n`). Partial cuts leave a hinge.
    pub fn cut(&mut self, partial: bool) -> &mut Self {
        self.command(&[GS, b'V', b'A', partial as u8])
    }

    /// Pulse a cash drawer pin (`ESC p m t1 t2`).
    pub fn open_drawer(&mut self, pin: DrawerPin) -> &mut Self {
        self.command(&[ESC, b'p', pin as u8])
            .command(&DRAWER_PULSE)
    }

    /// Sound the buzzer (`ESC B n t`).
    pub fn beep(&mut self, options: BeepOptions) -> &mut Self {
        let (count, duration) = options.resolve();
        self.command(&[ESC, b'B', count, duration])
    }

    // ========================================================================
    // TEXT STYLE
    // ========================================================================

    /// `ESC E n`
    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.command(&[ESC, b'E', bold as u8])
    }

    /// `ESC G n`
    pub fn set_double_strike(&mut self, double: bool) -> &mut Self {
        self.command(&[ESC, b'G', if double { 0xFF } else { 0 }])
    }

    /// White on black (`GS B n`)
    pub fn set_inverse(&mut self, inverse: bool) -> &mut Self {
        self.command(&[GS, b'B', inverse as u8])
    }

    /// `ESC - n`
    pub fn set_underline(&mut self, underline: Underline) -> &mut Self {
        self.command(&[ESC, b'-', underline as u8])
    }

    /// `ESC a n`
    pub fn set_justification(&mut self, justification: Justification) -> &mut Self {
        self.command(&[ESC, b'a', justification as u8])
    }

    /// `ESC M n`
    pub fn set_font(&mut self, font: Font) -> &mut Self {
        self.command(&[ESC, b'M', font as u8])
    }

    /// `ESC ! n`
    pub fn set_text_mode(&mut self, mode: TextMode) -> &mut Self {
        self.command(&[ESC, b'!', mode as u8])
    }

    /// `ESC t n`
    pub fn set_code_table(&mut self, table: CodeTable) -> &mut Self {
        self.command(&[ESC, b't', table as u8])
    }

    /// `ESC r n`
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.command(&[ESC, b'r', color as u8])
    }

    /// `ESC 3 n` for a custom spacing in dots, `ESC 2` to restore the
    /// default. Zero counts as "default".
    pub fn set_line_spacing(&mut self, spacing: Option<u8>) -> &mut Self {
        match spacing.filter(|&n| n != 0) {
            Some(n) => self.command(&[ESC, b'3', n]),
            None => self.command(&[ESC, b'2']),
        }
    }

    // ========================================================================
    // BARCODES AND GRAPHICS
    // ========================================================================

    /// Print a 1D barcode. `data` is sent verbatim.
    pub fn barcode(&mut self, data: impl AsRef<[u8]>, kind: Barcode, options: BarcodeOptions) -> &mut Self {
        barcode1d::write(&mut self.buffer, data.as_ref(), kind, options);
        self
    }

    /// Store and print a QR Code. `data` is sent verbatim.
    pub fn qr(&mut self, data: impl AsRef<[u8]>, options: QrOptions) -> &mut Self {
        qr::write(&mut self.buffer, data.as_ref(), options);
        self
    }

    /// Store and print a PDF417 symbol. `data` is sent verbatim.
    pub fn pdf417(&mut self, data: impl AsRef<[u8]>, options: Pdf417Options) -> &mut Self {
        pdf417::write(&mut self.buffer, data.as_ref(), options);
        self
    }

    /// Print a raster bitmap (`GS v 0`).
    pub fn raster<R: Raster + ?Sized>(&mut self, image: &R, mode: RasterMode) -> &mut Self {
        graphics::raster(
            &mut self.buffer,
            image.width_bytes(),
            image.height(),
            mode,
            image.data(),
        );
        self
    }

    #[inline]
    fn command(&mut self, bytes: &[u8]) -> &mut Self {
        self.buffer.write_bytes(bytes);
        self
    }
}
