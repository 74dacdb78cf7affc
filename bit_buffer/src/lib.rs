//! # bit_buffer
//!
//! A fixed-length bit sequence with ranged accessors.
//!
//! Bit ranges are addressed by absolute bit offset and read/written
//! most-significant-bit first, so byte-aligned 8-bit accesses behave like
//! plain byte reads.
//!
//! ```rust
//! use bit_buffer::BitBuffer;
//!
//! let mut buf = BitBuffer::new(4);
//! buf.write(4, 12, 0xABC).unwrap();
//!
//! assert_eq!(buf.read(4, 12).unwrap(), 0xABC);
//! assert_eq!(buf.as_bytes(), &[0x0A, 0xBC, 0x00, 0x00]);
//! ```

pub mod error;
pub use error::BitBufferError;

mod bit_ops;

pub mod buffer;
pub use buffer::BitBuffer;
