//! # ESC/POS Protocol Implementation
//!
//! This module holds the byte-level vocabulary of the ESC/POS command set
//! used by most thermal receipt printers (Epson TM series and compatibles).
//!
//! ## Module Structure
//!
//! - [`commands`]: Control bytes and integer encoding helpers
//! - [`text`]: Parameter values for text styling commands
//! - [`barcode`]: 1D barcodes, QR Code and PDF417
//! - [`graphics`]: Raster bit images
//!
//! Most callers go through [`Printer`](crate::printer::Printer), which
//! writes these sequences into its buffer. The submodules are public so the
//! layouts can be reused and tested on their own.

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod text;
