//! # Network Transport
//!
//! Raw TCP printing, the "port 9100" / JetDirect interface found on
//! Ethernet and Wi-Fi receipt printers. Bytes are written to the socket
//! unmodified.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use super::Transport;
use crate::error::ReciboError;

/// Raw printing port used when the address has none.
pub const DEFAULT_PORT: u16 = 9100;

/// Default connect timeout (seconds)
const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug)]
pub struct NetworkTransport {
    addr: String,
    stream: Option<TcpStream>,
    connect_timeout: Duration,
}

impl NetworkTransport {
    /// `addr` is `host` or `host:port`; a bare host uses [`DEFAULT_PORT`].
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: with_default_port(addr.into()),
            stream: None,
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn set_connect_timeout(&mut self, timeout: Duration) {
        self.connect_timeout = timeout;
    }
}

fn with_default_port(addr: String) -> String {
    if addr.starts_with('[') {
        if addr.contains("]:") {
            addr
        } else {
            format!("{}:{}", addr, DEFAULT_PORT)
        }
    } else {
        match addr.matches(':').count() {
            0 => format!("{}:{}", addr, DEFAULT_PORT),
            1 => addr,
            // Bare IPv6 literal
            _ => format!("[{}]:{}", addr, DEFAULT_PORT),
        }
    }
}

#[async_trait]
impl Transport for NetworkTransport {
    async fn open(&mut self) -> Result<(), ReciboError> {
        let connect = TcpStream::connect(self.addr.as_str());
        let stream = tokio::time::timeout(self.connect_timeout, connect)
            .await
            .map_err(|_| {
                ReciboError::Transport(format!("Connect to {} timed out", self.addr))
            })?
            .map_err(|e| ReciboError::Transport(format!("Connect to {} failed: {}", self.addr, e)))?;

        stream.set_nodelay(true)?;
        tracing::debug!(addr = %self.addr, "network transport connected");
        self.stream = Some(stream);
        Ok(())
    }

    async fn write(&mut self, data: &[u8]) -> Result<(), ReciboError> {
        let stream = self.stream.as_mut().ok_or(ReciboError::NotConnected)?;
        stream
            .write_all(data)
            .await
            .map_err(|e| ReciboError::Transport(format!("Write to {} failed: {}", self.addr, e)))?;
        tracing::debug!(bytes = data.len(), "network transport wrote");
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ReciboError> {
        if let Some(mut stream) = self.stream.take() {
            stream.shutdown().await.map_err(|e| {
                ReciboError::Transport(format!("Shutdown of {} failed: {}", self.addr, e))
            })?;
            tracing::debug!(addr = %self.addr, "network transport closed");
        }
        Ok(())
    }
}
