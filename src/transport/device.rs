//! # Device Transport
//!
//! Writes to a device node (`/dev/usb/lp0`, `/dev/ttyUSB0`, `/dev/rfcomm0`)
//! or an ordinary file.
//!
//! ## TTY Configuration
//!
//! When the path is a terminal device it is switched to raw mode so binary
//! data is transmitted without modification:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//!
//! ## Chunked Writes
//!
//! Large writes are split into chunks with a short pause between them so
//! slow links (Bluetooth SPP, 9600 baud serial) do not overflow.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use super::Transport;
use crate::error::ReciboError;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Device Printer Transport
///
/// ## Example
///
/// ```no_run
/// use recibo::printer::Printer;
/// use recibo::transport::DeviceTransport;
///
/// # async fn example() -> Result<(), recibo::ReciboError> {
/// let mut transport = DeviceTransport::new("/dev/usb/lp0");
/// let mut printer = Printer::new(&mut transport);
///
/// printer.open().await?;
/// printer.init().write_line("Hello", None)?.cut(false);
/// printer.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeviceTransport {
    path: PathBuf,
    file: Option<File>,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Describe a transport for `path`. Nothing is opened until
    /// [`Transport::open`].
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            file: None,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set the chunk size for large writes. Default is 4096 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    fn transport_error(&self, action: &str, e: io::Error) -> ReciboError {
        ReciboError::Transport(format!("{} {} failed: {}", action, self.path.display(), e))
    }
}

#[async_trait]
impl Transport for DeviceTransport {
    async fn open(&mut self) -> Result<(), ReciboError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .await
            .map_err(|e| self.transport_error("Open", e))?;

        configure_if_tty(&file)?;

        tracing::debug!(path = %self.path.display(), "device transport opened");
        self.file = Some(file);
        Ok(())
    }

    async fn write(&mut self, data: &[u8]) -> Result<(), ReciboError> {
        let chunk_size = self.chunk_size;
        let chunk_delay = self.chunk_delay;
        let file = self.file.as_mut().ok_or(ReciboError::NotConnected)?;

        let mut result = Ok(());
        for (i, chunk) in data.chunks(chunk_size).enumerate() {
            if i > 0 && !chunk_delay.is_zero() {
                tokio::time::sleep(chunk_delay).await;
            }
            result = file.write_all(chunk).await;
            if result.is_err() {
                break;
            }
        }
        if result.is_ok() {
            result = file.flush().await;
        }
        result.map_err(|e| self.transport_error("Write to", e))?;

        tracing::debug!(bytes = data.len(), "device transport wrote");
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ReciboError> {
        if let Some(mut file) = self.file.take() {
            file.flush()
                .await
                .map_err(|e| self.transport_error("Flush", e))?;
            tracing::debug!(path = %self.path.display(), "device transport closed");
        }
        Ok(())
    }
}

#[cfg(unix)]
fn configure_if_tty(file: &File) -> Result<(), ReciboError> {
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    // SAFETY: fd is a valid open descriptor owned by `file`
    if unsafe { libc::isatty(fd) } == 1 {
        configure_tty_raw(fd)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn configure_if_tty(_file: &File) -> Result<(), ReciboError> {
    Ok(())
}

/// Configure a file descriptor for raw TTY mode.
///
/// IXON/IXOFF/IXANY are cleared: 0x11 (XON) and 0x13 (XOFF) occur in
/// raster data and symbol payloads and must reach the printer.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<(), ReciboError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    // SAFETY: tcgetattr fills the struct on success, checked below
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(ReciboError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    // SAFETY: termios was initialized by tcgetattr
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(ReciboError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("recibo-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_write_before_open_fails() {
        let mut transport = DeviceTransport::new(temp_path("unopened"));
        let err = transport.write(b"x").await.unwrap_err();
        assert!(matches!(err, ReciboError::NotConnected));
    }

    #[tokio::test]
    async fn test_writes_land_in_file() {
        let path = temp_path("file-output");
        let mut transport = DeviceTransport::new(&path);
        transport.set_chunk_size(3);
        transport.set_chunk_delay(Duration::ZERO);

        transport.open().await.unwrap();
        transport.write(&[0x1B, 0x40, b'h', b'i', 0x0A]).await.unwrap();
        transport.write(&[0x1D, 0x56, 0x41, 0x00]).await.unwrap();
        transport.close().await.unwrap();

        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(written, vec![0x1B, 0x40, b'h', b'i', 0x0A, 0x1D, 0x56, 0x41, 0x00]);
    }

    #[tokio::test]
    async fn test_open_missing_directory_fails() {
        let mut transport = DeviceTransport::new("/nonexistent-recibo-dir/printer");
        let err = transport.open().await.unwrap_err();
        assert!(matches!(err, ReciboError::Transport(_)));
    }

    #[tokio::test]
    async fn test_close_without_open_is_noop() {
        let mut transport = DeviceTransport::new(temp_path("never-opened"));
        assert!(transport.close().await.is_ok());
    }
}
