//! Fixed-length bit sequence with bounds-checked ranged access.

use crate::BitBufferError;
use crate::bit_ops;

/// A zero-initialized, fixed-length sequence of bits.
///
/// The length is fixed at construction; all access goes through [`read`] and
/// [`write`], which address an arbitrary bit range as an unsigned integer,
/// most-significant bit first.
///
/// [`read`]: BitBuffer::read
/// [`write`]: BitBuffer::write
///
/// # Examples
///
/// ```
/// use bit_buffer::BitBuffer;
///
/// let mut buf = BitBuffer::new(2);
/// buf.write(0, 16, 0xBEEF).unwrap();
/// assert_eq!(buf.read(8, 8).unwrap(), 0xEF);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
}

impl BitBuffer {
    /// Creates an all-zero buffer of `len_bytes` bytes.
    pub fn new(len_bytes: usize) -> Self {
        Self {
            bytes: vec![0u8; len_bytes],
        }
    }

    /// Creates a buffer holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn len_bits(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn check_range(&self, offset: usize, width: usize) -> Result<(), BitBufferError> {
        if !(1..=64).contains(&width) {
            return Err(BitBufferError::InvalidBitWidth(width));
        }
        if offset + width > self.len_bits() {
            return Err(BitBufferError::RangeOutOfBounds {
                offset,
                width,
                len: self.len_bits(),
            });
        }
        Ok(())
    }

    /// Reads `width` bits starting at bit `offset` as an unsigned integer,
    /// most-significant bit first.
    pub fn read(&self, offset: usize, width: usize) -> Result<u64, BitBufferError> {
        self.check_range(offset, width)?;
        Ok(bit_ops::get_bits(&self.bytes, offset, width))
    }

    /// Overwrites exactly `width` bits starting at bit `offset` with the low
    /// `width` bits of `value`, most-significant bit first. Values needing
    /// fewer bits are left-padded with zeros.
    pub fn write(&mut self, offset: usize, width: usize, value: u64) -> Result<(), BitBufferError> {
        self.check_range(offset, width)?;
        bit_ops::set_bits(&mut self.bytes, offset, width, value);
        Ok(())
    }
}
