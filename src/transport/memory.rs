//! # Memory Transport
//!
//! Keeps every write in memory. Used by the test suite and by the CLI's
//! `--dump` mode to inspect a job without a printer attached.

use async_trait::async_trait;

use super::Transport;
use crate::error::ReciboError;

#[derive(Debug, Default)]
pub struct MemoryTransport {
    writes: Vec<Vec<u8>>,
    is_open: bool,
    opens: usize,
    closes: usize,
    fail_opens: bool,
    fail_writes: bool,
    fail_closes: bool,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// All bytes received so far, concatenated in order.
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }

    /// Each write call's payload, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of successful `open` calls.
    pub fn opens(&self) -> usize {
        self.opens
    }

    /// Number of successful `close` calls.
    pub fn closes(&self) -> usize {
        self.closes
    }

    /// Make subsequent opens fail.
    pub fn set_fail_opens(&mut self, fail: bool) {
        self.fail_opens = fail;
    }

    /// Make subsequent writes fail, to exercise error paths.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make subsequent closes fail. The transport stays open.
    pub fn set_fail_closes(&mut self, fail: bool) {
        self.fail_closes = fail;
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn open(&mut self) -> Result<(), ReciboError> {
        if self.fail_opens {
            return Err(ReciboError::Transport("simulated open failure".to_string()));
        }
        self.is_open = true;
        self.opens += 1;
        Ok(())
    }

    async fn write(&mut self, data: &[u8]) -> Result<(), ReciboError> {
        if !self.is_open {
            return Err(ReciboError::NotConnected);
        }
        if self.fail_writes {
            return Err(ReciboError::Transport("simulated write failure".to_string()));
        }
        self.writes.push(data.to_vec());
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ReciboError> {
        if self.fail_closes {
            return Err(ReciboError::Transport("simulated close failure".to_string()));
        }
        self.is_open = false;
        self.closes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_writes_in_order() {
        let mut transport = MemoryTransport::new();
        transport.open().await.unwrap();
        transport.write(b"ab").await.unwrap();
        transport.write(b"").await.unwrap();
        transport.write(b"c").await.unwrap();

        assert_eq!(transport.writes().len(), 3);
        assert_eq!(transport.bytes(), b"abc");
    }

    #[tokio::test]
    async fn test_requires_open() {
        let mut transport = MemoryTransport::new();
        assert!(matches!(transport.write(b"x").await, Err(ReciboError::NotConnected)));

        transport.open().await.unwrap();
        transport.close().await.unwrap();
        assert!(!transport.is_open());
        assert!(matches!(transport.write(b"x").await, Err(ReciboError::NotConnected)));
        assert_eq!((transport.opens(), transport.closes()), (1, 1));
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let mut transport = MemoryTransport::new();
        transport.open().await.unwrap();
        transport.set_fail_writes(true);
        assert!(matches!(transport.write(b"x").await, Err(ReciboError::Transport(_))));
        assert!(transport.bytes().is_empty());
    }

    #[tokio::test]
    async fn test_simulated_open_and_close_failures() {
        let mut transport = MemoryTransport::new();
        transport.set_fail_opens(true);
        assert!(matches!(transport.open().await, Err(ReciboError::Transport(_))));
        assert!(!transport.is_open());
        assert_eq!(transport.opens(), 0);

        transport.set_fail_opens(false);
        transport.open().await.unwrap();
        transport.set_fail_closes(true);
        assert!(matches!(transport.close().await, Err(ReciboError::Transport(_))));
        assert!(transport.is_open());
        assert_eq!(transport.closes(), 0);
    }
}
