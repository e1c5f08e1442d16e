//! # Recibo - ESC/POS Receipt Printer Library
//!
//! Recibo encodes printing intents (styled text, feeds, cuts, barcodes,
//! 2D symbols and bitmaps) into ESC/POS command bytes and sends them to a
//! receipt printer. It provides:
//!
//! - **Command encoder**: a chainable [`Printer`] that buffers bytes
//! - **Protocol**: byte layouts for text, 1D barcodes, QR Code, PDF417 and raster graphics
//! - **Text encoding**: ASCII, CP437, Latin-1 and UTF-8 code pages
//! - **Raster conversion**: threshold and Bayer dithering from any `image` input
//! - **Transport**: device files, raw TCP (port 9100) and in-memory capture
//!
//! ## Quick Start
//!
//! ```no_run
//! use recibo::{
//!     printer::{Printer, PrinterConfig},
//!     protocol::barcode::QrOptions,
//!     protocol::text::{Justification, TextMode},
//!     transport::NetworkTransport,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), recibo::ReciboError> {
//! let config = PrinterConfig::GENERIC_80MM;
//! let mut transport = NetworkTransport::new("192.168.1.50");
//! let mut printer = Printer::with_config(&mut transport, &config);
//!
//! printer.open().await?;
//! printer
//!     .init()
//!     .set_code_table(config.code_table)
//!     .set_justification(Justification::Center)
//!     .set_text_mode(TextMode::DualWidthAndHeight)
//!     .write_line("CAFÉ DEL SOL", None)?
//!     .reset_styles()
//!     .qr("https://example.com/r/1042", QrOptions::new().size(6))
//!     .feed(3)
//!     .cut(true);
//! printer.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`printer`] | Command encoder and printer profiles |
//! | [`protocol`] | ESC/POS byte layouts |
//! | [`encoding`] | Text to code page conversion |
//! | [`raster`] | Monochrome bitmaps and dithering |
//! | [`transport`] | Communication backends |
//! | [`buffer`] | Growable byte accumulator |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Anything that speaks Epson ESC/POS: Epson TM series, and the many
//! 58mm/80mm clones that follow it. Commands a model does not implement
//! are usually ignored by its firmware.

pub mod buffer;
pub mod encoding;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod raster;
pub mod transport;

// Re-exports for convenience
pub use error::ReciboError;
pub use printer::{Printer, PrinterConfig};
pub use transport::{DeviceTransport, MemoryTransport, NetworkTransport, Transport};
