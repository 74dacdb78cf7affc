//! # sharecode
//!
//! Encoder/decoder for Dota Underlords board share codes.
//!
//! A share code is one line of text users paste to each other: a version
//! marker character (`'8'` for the format implemented here) followed by the
//! base64 encoding of a snappy-compressed 424-byte record. The record packs
//! the whole board snapshot - units, equipped items, ranks, talents and the
//! two players' underlord picks - at fixed bit offsets.
//!
//! ```rust
//! use sharecode::{BoardState, EquippedItem};
//!
//! let mut board = BoardState::default();
//! board.board_unit_ids[0][0] = 32;
//! board.unit_items[0][0] = EquippedItem::new(10211);
//!
//! let code = sharecode::encode(&board).unwrap();
//! let decoded = sharecode::decode(&code).unwrap();
//! assert_eq!(decoded, board);
//! ```
//!
//! Decoding never validates game-domain legality (whether an item id exists,
//! whether a rank is displayable); it only enforces the wire format.

pub mod envelope;
pub mod error;
pub mod item;
pub mod layout;
pub mod ranks;
pub mod record;

pub use error::ShareCodeError;
pub use item::EquippedItem;
pub use record::{BOARD_CELLS, BoardState, MAX_TALENTS, MAX_UNEQUIPPED_ITEMS, PLAYER_COUNT};

/// Decodes a share code of any supported format version.
///
/// The leading marker character selects the codec; today that is only
/// [`envelope::V8_MARKER`]. Anything else (including empty input) fails
/// with [`ShareCodeError::UnsupportedVersion`] without touching the
/// payload.
pub fn decode(code: &str) -> Result<BoardState, ShareCodeError> {
    match code.chars().next() {
        Some(envelope::V8_MARKER) => BoardState::from_share_code(code),
        other => Err(ShareCodeError::UnsupportedVersion(other)),
    }
}

/// Encodes a board as a share code. Equivalent to
/// [`BoardState::to_share_code`].
pub fn encode(board: &BoardState) -> Result<String, ShareCodeError> {
    board.to_share_code()
}
