//! Data Memory Buffer.
//!
//! This module provides the flat byte-addressable memory of the virtual machine. It is a
//! single contiguous, zero-initialized, owned allocation sized at construction. All access
//! goes through bounds-checked methods; addresses are signed so that negative lane values
//! used as addresses fault instead of wrapping.

use crate::common::error::Fault;

/// Flat byte-addressable memory.
#[derive(Clone)]
pub struct MemoryBuffer {
    bytes: Box<[u8]>,
}

impl MemoryBuffer {
    /// Creates a zeroed buffer of `size` bytes.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the buffer in bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0u8; size].into_boxed_slice(),
        }
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer has no addressable bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Converts `addr` to an offset, failing unless it lies in `[0, len)`.
    #[inline]
    fn offset(&self, addr: i64) -> Result<usize, Fault> {
        usize::try_from(addr)
            .ok()
            .filter(|&off| off < self.bytes.len())
            .ok_or(Fault::OutOfBoundsAccess(addr))
    }

    /// Fails with [`Fault::OutOfBoundsAccess`] unless `addr` lies in `[0, len)`.
    pub fn check(&self, addr: i64) -> Result<(), Fault> {
        self.offset(addr).map(|_| ())
    }

    /// Loads the byte at `addr`, sign-extended to a lane value.
    pub fn load_byte(&self, addr: i64) -> Result<i32, Fault> {
        let off = self.offset(addr)?;
        Ok(i32::from(self.bytes[off] as i8))
    }

    /// Stores the low byte of `val` at `addr`.
    pub fn store_byte(&mut self, addr: i64, val: i32) -> Result<(), Fault> {
        let off = self.offset(addr)?;
        self.bytes[off] = val as u8;
        Ok(())
    }

    /// Reads `len` raw bytes starting at `addr`.
    pub fn read_slice(&self, addr: i64, len: usize) -> Result<&[u8], Fault> {
        let start = self.span(addr, len)?;
        Ok(&self.bytes[start..start + len])
    }

    /// Copies `data` into memory starting at `addr`.
    pub fn write_slice(&mut self, addr: i64, data: &[u8]) -> Result<(), Fault> {
        let start = self.span(addr, data.len())?;
        self.bytes[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Validates that `[addr, addr + len)` lies inside the buffer and returns its start offset.
    ///
    /// On failure the reported address is the first byte outside the buffer.
    fn span(&self, addr: i64, len: usize) -> Result<usize, Fault> {
        let start = usize::try_from(addr).map_err(|_| Fault::OutOfBoundsAccess(addr))?;
        if start.checked_add(len).is_some_and(|end| end <= self.bytes.len()) {
            Ok(start)
        } else {
            let first_bad = start.max(self.bytes.len());
            Err(Fault::OutOfBoundsAccess(
                i64::try_from(first_bad).unwrap_or(i64::MAX),
            ))
        }
    }
}

impl std::fmt::Debug for MemoryBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBuffer")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
