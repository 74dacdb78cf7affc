// Per-bit loops; records are a few hundred bytes so there is nothing to win
// from word-at-a-time access here.

/// Writes the low `bit_width` bits of `value` into `slice`, most-significant
/// bit first. Bits above `bit_width` in `value` are ignored.
pub(crate) fn set_bits(slice: &mut [u8], bit_offset: usize, bit_width: usize, value: u64) {
    let masked = if bit_width == 64 {
        value
    } else {
        value & ((1u64 << bit_width) - 1)
    };

    for i in 0..bit_width {
        let bit = (masked >> (bit_width - 1 - i)) & 1;
        let pos = bit_offset + i;
        let byte = pos / 8;
        let bit_in_byte = 7 - pos % 8;

        if bit == 1 {
            slice[byte] |= 1 << bit_in_byte;
        } else {
            slice[byte] &= !(1 << bit_in_byte);
        }
    }
}

/// Reads `bit_width` bits from `slice` starting at `bit_offset`,
/// most-significant bit first.
pub(crate) fn get_bits(slice: &[u8], bit_offset: usize, bit_width: usize) -> u64 {
    let mut value = 0u64;

    for i in 0..bit_width {
        let pos = bit_offset + i;
        let byte = pos / 8;
        let bit_in_byte = 7 - pos % 8;

        let bit = (slice[byte] >> bit_in_byte) & 1;
        value = (value << 1) | bit as u64;
    }

    value
}
