//! # Growable Byte Buffer
//!
//! An append-only accumulator for printer command bytes. Every encoding call
//! on [`Printer`](crate::printer::Printer) lands here; a flush drains it and
//! hands the bytes to the transport.
//!
//! ## Growth
//!
//! When a write does not fit, capacity doubles (or grows by the required
//! increment if that is larger). Capacity is never given back: draining and
//! clearing only reset the used length, so a session that prints receipts
//! of similar size stops allocating after the first one.
//!
//! ```
//! use recibo::buffer::ByteBuffer;
//!
//! let mut buf = ByteBuffer::new();
//! buf.write_u8(0x1B);
//! buf.write_bytes(b"@");
//! buf.write_u16_le(576);
//!
//! assert_eq!(buf.drain(), vec![0x1B, 0x40, 0x40, 0x02]);
//! assert!(buf.drain().is_empty());
//! ```

use crate::protocol::commands::u16_le;

/// Capacity reserved on the first write.
const INITIAL_CAPACITY: usize = 1024;

/// Append-only byte accumulator with drain/clear semantics.
#[derive(Debug, Default, Clone)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Create an empty buffer. No allocation happens until the first write.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written since the last drain or clear.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// View the pending bytes without draining them.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Append one byte.
    #[inline]
    pub fn write_u8(&mut self, byte: u8) {
        self.grow_for(1);
        self.data.push(byte);
    }

    /// Append a sequence of bytes in order.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.grow_for(bytes.len());
        self.data.extend_from_slice(bytes);
    }

    /// Append `value` as two little-endian bytes `[low, high]`.
    #[inline]
    pub fn write_u16_le(&mut self, value: u16) {
        self.write_bytes(&u16_le(value));
    }

    /// Take every byte written since construction or the last drain.
    ///
    /// The used length resets to zero; capacity is kept for reuse.
    pub fn drain(&mut self) -> Vec<u8> {
        self.data.drain(..).collect()
    }

    /// Discard pending bytes without returning them.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Ensure room for `additional` more bytes using the doubling policy.
    fn grow_for(&mut self, additional: usize) {
        let required = self.data.len() + additional;
        let capacity = self.data.capacity();
        if required <= capacity {
            return;
        }
        let target = (capacity * 2).max(required).max(INITIAL_CAPACITY);
        self.data.reserve_exact(target - self.data.len());
    }
}
