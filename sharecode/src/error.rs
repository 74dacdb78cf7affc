use bit_buffer::BitBufferError;
use thiserror::Error;

/// Errors surfaced while decoding or encoding a share code.
///
/// Every failure is fatal to the call that produced it; no partial board is
/// ever returned. Callers presenting these to users typically only need to
/// distinguish [`UnsupportedVersion`] from "corrupt share code".
///
/// [`UnsupportedVersion`]: ShareCodeError::UnsupportedVersion
#[derive(Debug, Error)]
pub enum ShareCodeError {
    #[error("unsupported share code version marker {0:?}")]
    UnsupportedVersion(Option<char>),

    #[error("share code payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("share code payload is not a valid snappy block: {0}")]
    Decompress(#[from] snap::Error),

    #[error("decompressed record is {found} bytes, expected {expected}")]
    UnexpectedRecordLength { expected: usize, found: usize },

    #[error("record bit access failed: {0}")]
    Bits(#[from] BitBufferError),
}
