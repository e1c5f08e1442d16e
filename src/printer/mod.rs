//! # Printer Module
//!
//! - [`session`]: the [`Printer`] command encoder
//! - [`config`]: Printer hardware profiles

pub mod config;
pub mod session;

pub use config::PrinterConfig;
pub use session::{BeepOptions, Payload, Printer};
