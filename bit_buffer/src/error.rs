use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitBufferError {
    #[error("Bit width must be in the range 1..=64, got {0}")]
    InvalidBitWidth(usize),

    #[error("Bit range at offset {offset} with width {width} exceeds buffer of {len} bits")]
    RangeOutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },
}
