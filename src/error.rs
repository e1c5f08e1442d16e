//! # Error Types
//!
//! This module defines error types used throughout the recibo library.

use thiserror::Error;

/// Main error type for recibo operations
///
/// The command encoder itself never validates parameters, so only two
/// families of failure reach callers: transport I/O and unknown text
/// encodings. Both are passed through unchanged.
#[derive(Debug, Error)]
pub enum ReciboError {
    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Write attempted on a transport that is not open
    #[error("Transport is not connected")]
    NotConnected,

    /// The text encoder does not know the requested encoding name
    #[error("Encoding not found: {0}")]
    UnknownEncoding(String),

    /// Image loading or conversion error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
