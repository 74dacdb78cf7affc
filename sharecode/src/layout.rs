//! Byte layout of the 424-byte board record.

/// Size of the decompressed board record in bytes.
pub const RECORD_SIZE: usize = 424;

/// Byte span of one field inside the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    /// Byte offset from the start of the record.
    pub offset: usize,
    /// Field length in bytes.
    pub len: usize,
}

impl FieldSpan {
    pub const fn bit_offset(&self) -> usize {
        self.offset * 8
    }

    pub const fn bit_len(&self) -> usize {
        self.len * 8
    }
}

pub const VERSION: FieldSpan = FieldSpan { offset: 0, len: 1 };
/// 8x8 equipped-item slots, 3 bytes each.
pub const UNIT_ITEMS: FieldSpan = FieldSpan { offset: 1, len: 192 };
/// 8x8 unit ids, 1 byte each; 0 marks an empty cell.
pub const BOARD_UNIT_IDS: FieldSpan = FieldSpan { offset: 193, len: 64 };
/// 16 talent tiers x 2 players, 1 byte each.
pub const SELECTED_TALENTS: FieldSpan = FieldSpan { offset: 257, len: 32 };
/// 8 rows of one packed 32-bit rank word each.
pub const PACKED_UNIT_RANKS: FieldSpan = FieldSpan { offset: 292, len: 32 };
/// 8 bench equipped-item slots, 3 bytes each.
pub const BENCH_UNIT_ITEMS: FieldSpan = FieldSpan { offset: 324, len: 24 };
pub const BENCHED_UNIT_IDS: FieldSpan = FieldSpan { offset: 348, len: 8 };
/// One packed 32-bit rank word for the bench.
pub const PACKED_BENCH_UNIT_RANKS: FieldSpan = FieldSpan { offset: 356, len: 4 };
pub const UNDERLORD_IDS: FieldSpan = FieldSpan { offset: 360, len: 2 };
pub const UNDERLORD_RANKS: FieldSpan = FieldSpan { offset: 362, len: 2 };
/// 8 reserve slots x 2 players, 3 bytes each.
pub const UNEQUIPPED_ITEMS: FieldSpan = FieldSpan { offset: 364, len: 60 };

// Bytes 289..292 (after the talents) carry nothing in the wire format.
