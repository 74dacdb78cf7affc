//! The text wrapping around the raw record.
//!
//! A share code is `<marker><base64>`: a single version marker character
//! followed by the standard (padded) base64 encoding of the
//! snappy-block-compressed record bytes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ShareCodeError;

/// Marker character of the record format this crate speaks.
pub const V8_MARKER: char = '8';

/// Compresses `record`, base64-encodes it and prepends `marker`.
pub fn wrap(marker: char, record: &[u8]) -> Result<String, ShareCodeError> {
    let compressed = snap::raw::Encoder::new().compress_vec(record)?;

    let mut code = String::with_capacity(1 + compressed.len().div_ceil(3) * 4);
    code.push(marker);
    code.push_str(&STANDARD.encode(&compressed));
    Ok(code)
}

/// Strips `marker`, base64-decodes the remainder and decompresses it.
///
/// Fails with [`ShareCodeError::UnsupportedVersion`] before touching the
/// payload if `code` is empty or starts with any other character.
pub fn unwrap(marker: char, code: &str) -> Result<Vec<u8>, ShareCodeError> {
    let mut chars = code.chars();
    match chars.next() {
        Some(c) if c == marker => {}
        other => return Err(ShareCodeError::UnsupportedVersion(other)),
    }

    let compressed = STANDARD.decode(chars.as_str())?;
    let record = snap::raw::Decoder::new().decompress_vec(&compressed)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_bytes() {
        let record: Vec<u8> = (0..=255).cycle().take(424).collect();
        let code = wrap(V8_MARKER, &record).unwrap();
        assert!(code.starts_with('8'));
        assert_eq!(unwrap(V8_MARKER, &code).unwrap(), record);
    }

    #[test]
    fn rejects_wrong_marker() {
        let err = unwrap(V8_MARKER, "7whatever").unwrap_err();
        assert!(matches!(
            err,
            ShareCodeError::UnsupportedVersion(Some('7'))
        ));
    }

    #[test]
    fn rejects_empty_input() {
        let err = unwrap(V8_MARKER, "").unwrap_err();
        assert!(matches!(err, ShareCodeError::UnsupportedVersion(None)));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = unwrap(V8_MARKER, "8not*base64*at*all").unwrap_err();
        assert!(matches!(err, ShareCodeError::Base64(_)));
    }

    #[test]
    fn rejects_corrupt_compressed_payload() {
        // Valid base64 of bytes that are not a snappy block.
        let garbage = STANDARD.encode([0xFFu8; 16]);
        let err = unwrap(V8_MARKER, &format!("8{garbage}")).unwrap_err();
        assert!(matches!(err, ShareCodeError::Decompress(_)));
    }
}
