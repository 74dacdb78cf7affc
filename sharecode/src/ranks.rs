//! Packed unit ranks.
//!
//! A column of 8 ranks is folded into one 32-bit word, 4 bits per rank, and
//! the word is stored little-endian (the original producer computes the four
//! bytes most-significant first and then writes them reversed).
//!
//! The encode side tests rank bits with masks `[1, 2, 4, 8]`; the decode
//! side rebuilds ranks with shift amounts `[0, 1, 2, 4]`. The two tables
//! disagree at index 3 (mask 8 vs shift 4), so a rank of 8..=15 comes back
//! as `rank + 8`. Ranks the game actually produces (0..=3, and anything up
//! to 7) are unaffected. Both tables are kept exactly as shipped; codes
//! already shared in the wild depend on them.

/// Ranks per packed word.
pub const RANKS_PER_WORD: usize = 8;

const ENCODE_MASKS: [u32; 4] = [1, 2, 4, 8];
const DECODE_SHIFTS: [u32; 4] = [0, 1, 2, 4];

/// Packs 8 rank values into the 4-byte wire form.
pub fn pack(ranks: &[u8; RANKS_PER_WORD]) -> [u8; 4] {
    let mut word = 0u32;

    for (j, &rank) in ranks.iter().enumerate() {
        for (k, &mask) in ENCODE_MASKS.iter().enumerate() {
            if rank as u32 & mask == mask {
                word |= 1 << (j * 4 + k);
            }
        }
    }

    word.to_le_bytes()
}

/// Unpacks the 4-byte wire form back into 8 rank values.
pub fn unpack(packed: &[u8; 4]) -> [u8; RANKS_PER_WORD] {
    let word = u32::from_le_bytes(*packed);
    let mut ranks = [0u8; RANKS_PER_WORD];

    for (j, rank) in ranks.iter_mut().enumerate() {
        for (k, &shift) in DECODE_SHIFTS.iter().enumerate() {
            if word & (1 << (j * 4 + k)) != 0 {
                *rank |= 1 << shift;
            }
        }
    }

    ranks
}
