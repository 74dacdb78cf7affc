//! The 3-byte equipped-item slot.
//!
//! Every item field in the record (`unit_items`, `bench_unit_items`,
//! `unequipped_items`) uses the same slot layout: a 16-bit item id stored
//! low byte first, followed by one reserved byte.

/// Width of one equipped-item slot in bytes.
pub const ITEM_SLOT_BYTES: usize = 3;

/// Width of one equipped-item slot in bits.
pub const ITEM_SLOT_BITS: usize = ITEM_SLOT_BYTES * 8;

/// An item equipped on a unit, or sitting in a bench/reserve slot.
///
/// An id of 0 means the slot is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquippedItem {
    pub item_id: u16,
}

impl EquippedItem {
    pub const fn new(item_id: u16) -> Self {
        Self { item_id }
    }
}

/// Encodes an item id into its wire slot: `[low, high, 0]`.
///
/// The reserved third byte is always written as zero.
pub const fn encode_slot(item_id: u16) -> [u8; ITEM_SLOT_BYTES] {
    [(item_id & 0xFF) as u8, (item_id >> 8) as u8, 0]
}

/// Decodes a wire slot back to the item id.
///
/// The reserved third byte is read but discarded, so any content an outside
/// producer put there is lost on re-encode.
pub const fn decode_slot(slot: [u8; ITEM_SLOT_BYTES]) -> u16 {
    (slot[1] as u16) << 8 | slot[0] as u16
}
