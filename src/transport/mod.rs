//! # Printer Transport Layer
//!
//! The [`Printer`](crate::printer::Printer) only accumulates bytes. Getting
//! them to the device is the job of a [`Transport`].
//!
//! ## Available Transports
//!
//! - [`device`]: Serial/USB/Bluetooth device nodes or plain files
//! - [`network`]: Raw TCP printing (port 9100)
//! - [`memory`]: In-memory capture for tests and dry runs
//!
//! Transports are opened and closed explicitly. A write on a transport
//! that is not open fails with [`ReciboError::NotConnected`]. Nothing here
//! retries; a failed write is reported to the caller as-is.

pub mod device;
pub mod memory;
pub mod network;

use async_trait::async_trait;

use crate::error::ReciboError;

pub use device::DeviceTransport;
pub use memory::MemoryTransport;
pub use network::NetworkTransport;

/// Byte sink for a printer session.
#[async_trait]
pub trait Transport: Send {
    /// Establish the connection.
    async fn open(&mut self) -> Result<(), ReciboError>;

    /// Send `data` and wait until it has been handed to the OS.
    async fn write(&mut self, data: &[u8]) -> Result<(), ReciboError>;

    /// Tear the connection down.
    async fn close(&mut self) -> Result<(), ReciboError>;
}
