//! Chunk reader for parsing byte slices.
//!
//! This module provides [`ChunkReader`], a cursor-like type that reads
//! little-endian fields from a byte slice and skips over chunk payloads
//! without copying.

use zerocopy::FromBytes;

use crate::{Error, Result};

/// A sequential reader over a byte slice.
///
/// Every read either consumes exactly the requested number of bytes or fails
/// with [`Error::TruncatedInput`] and leaves the position untouched.
///
/// # Example
///
/// ```
/// use pso2_common::ChunkReader;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// let mut reader = ChunkReader::new(&data);
///
/// assert_eq!(reader.read_u32().unwrap(), 0x04030201);
/// reader.seek_relative(4).unwrap();
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ChunkReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ChunkReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Get the current absolute offset from the start of the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the total length of the underlying buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    #[inline]
    fn ensure(&self, count: usize) -> Result<()> {
        if self.remaining() < count {
            return Err(Error::TruncatedInput {
                needed: count,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Move the cursor forward by `offset` bytes.
    ///
    /// Landing exactly on the end of the buffer is allowed.
    #[inline]
    pub fn seek_relative(&mut self, offset: usize) -> Result<()> {
        self.ensure(offset)?;
        self.position += offset;
        Ok(())
    }

    /// Peek at bytes without advancing the position.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        self.ensure(count)?;
        Ok(&self.data[self.position..self.position + count])
    }

    /// Read exactly `count` bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.position += count;
        Ok(bytes)
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a struct using zerocopy.
    ///
    /// The struct must implement `FromBytes` from the zerocopy crate.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::TruncatedInput {
            needed: size,
            available: bytes.len(),
        })
    }

    /// Expect specific magic bytes.
    pub fn expect_magic(&mut self, expected: &[u8]) -> Result<()> {
        let actual = self.read_bytes(expected.len())?;
        if actual != expected {
            return Err(Error::InvalidMagic {
                expected: expected.to_vec(),
                actual: actual.to_vec(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let data = [
            0x01u8, 0x02, 0x03, 0x04, // u32: 0x04030201
            0xFF, 0xFF, 0xFF, 0xFF, // u32: 0xFFFFFFFF
        ];
        let mut reader = ChunkReader::new(&data);

        assert_eq!(reader.read_u32().unwrap(), 0x04030201);
        assert_eq!(reader.read_u32().unwrap(), 0xFFFFFFFF);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_seek_relative() {
        let data = [0u8; 8];
        let mut reader = ChunkReader::new(&data);

        reader.seek_relative(0).unwrap();
        assert_eq!(reader.position(), 0);
        reader.seek_relative(3).unwrap();
        assert_eq!(reader.position(), 3);
        reader.seek_relative(5).unwrap();
        assert_eq!(reader.position(), 8);
        assert!(reader.seek_relative(1).unwrap_err().is_truncated());
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn test_read_bytes() {
        let data = b"NIFLREL0";
        let mut reader = ChunkReader::new(data);

        assert_eq!(reader.read_bytes(4).unwrap(), b"NIFL");
        assert_eq!(reader.peek_bytes(4).unwrap(), b"REL0");
        assert_eq!(reader.position(), 4);
        assert!(matches!(
            reader.read_bytes(5),
            Err(Error::TruncatedInput {
                needed: 5,
                available: 4
            })
        ));
    }

    #[test]
    fn test_truncated_u32() {
        let data = [0x01, 0x02];
        let mut reader = ChunkReader::new(&data);

        assert!(reader.read_u32().unwrap_err().is_truncated());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_expect_magic() {
        let mut reader = ChunkReader::new(b"XXXX");
        assert!(matches!(
            reader.expect_magic(b"NIFL"),
            Err(Error::InvalidMagic { .. })
        ));
    }
}
