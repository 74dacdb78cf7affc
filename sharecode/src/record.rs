//! The decoded board snapshot and whole-record encode/decode.

use bit_buffer::BitBuffer;

use crate::envelope;
use crate::error::ShareCodeError;
use crate::item::{self, EquippedItem, ITEM_SLOT_BITS};
use crate::layout::{self, FieldSpan, RECORD_SIZE};
use crate::ranks;

/// Board cells per axis.
pub const BOARD_CELLS: usize = 8;
/// Talent tiers per player.
pub const MAX_TALENTS: usize = 16;
/// Reserve item slots per player.
pub const MAX_UNEQUIPPED_ITEMS: usize = 8;
/// Players per board.
pub const PLAYER_COUNT: usize = 2;

/// A decoded board snapshot.
///
/// All grids have fixed dimensions; `Default` is the empty board (every
/// field zero). The `version` byte is plain record data and is independent
/// of the envelope's marker character, in practice it stays 0.
///
/// # Examples
///
/// ```
/// use sharecode::BoardState;
///
/// let mut board = BoardState::default();
/// board.underlord_ids = [1, 4];
///
/// let code = board.to_share_code().unwrap();
/// assert_eq!(BoardState::from_share_code(&code).unwrap(), board);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub version: u8,
    pub unit_items: [[EquippedItem; BOARD_CELLS]; BOARD_CELLS],
    pub board_unit_ids: [[u8; BOARD_CELLS]; BOARD_CELLS],
    pub selected_talents: [[u8; PLAYER_COUNT]; MAX_TALENTS],
    pub unit_ranks: [[u8; BOARD_CELLS]; BOARD_CELLS],
    pub bench_unit_items: [EquippedItem; BOARD_CELLS],
    pub benched_unit_ids: [u8; BOARD_CELLS],
    pub bench_unit_ranks: [u8; BOARD_CELLS],
    pub underlord_ids: [u8; PLAYER_COUNT],
    pub underlord_ranks: [u8; PLAYER_COUNT],
    pub unequipped_items: [[EquippedItem; PLAYER_COUNT]; MAX_UNEQUIPPED_ITEMS],
}

impl BoardState {
    /// Decodes a share code carrying this record format.
    pub fn from_share_code(code: &str) -> Result<Self, ShareCodeError> {
        let record = envelope::unwrap(envelope::V8_MARKER, code)?;
        Self::from_record_bytes(&record)
    }

    /// Encodes the board as a share code.
    pub fn to_share_code(&self) -> Result<String, ShareCodeError> {
        envelope::wrap(envelope::V8_MARKER, &self.to_record_bytes()?)
    }

    /// Decodes the raw 424-byte record.
    ///
    /// The reference implementation reads whatever it is given; here a
    /// payload of any other length is rejected up front instead of reading
    /// past the end.
    pub fn from_record_bytes(bytes: &[u8]) -> Result<Self, ShareCodeError> {
        if bytes.len() != RECORD_SIZE {
            return Err(ShareCodeError::UnexpectedRecordLength {
                expected: RECORD_SIZE,
                found: bytes.len(),
            });
        }

        let buf = BitBuffer::from_bytes(bytes);
        let mut board = Self::default();

        board.version = buf.read(layout::VERSION.bit_offset(), 8)? as u8;
        board.read_unit_items(&buf)?;
        board.read_board_unit_ids(&buf)?;
        board.read_selected_talents(&buf)?;
        board.read_unit_ranks(&buf)?;
        board.read_bench_unit_items(&buf)?;
        board.read_benched_unit_ids(&buf)?;
        board.read_bench_unit_ranks(&buf)?;
        board.read_underlords(&buf)?;
        board.read_unequipped_items(&buf)?;

        Ok(board)
    }

    /// Serializes the board into the raw 424-byte record.
    ///
    /// Every field is written into a fresh zeroed buffer in layout order;
    /// there is no partial encode.
    pub fn to_record_bytes(&self) -> Result<Vec<u8>, ShareCodeError> {
        let mut buf = BitBuffer::new(RECORD_SIZE);

        buf.write(layout::VERSION.bit_offset(), 8, self.version as u64)?;
        self.write_unit_items(&mut buf)?;
        self.write_board_unit_ids(&mut buf)?;
        self.write_selected_talents(&mut buf)?;
        self.write_unit_ranks(&mut buf)?;
        self.write_bench_unit_items(&mut buf)?;
        self.write_benched_unit_ids(&mut buf)?;
        self.write_bench_unit_ranks(&mut buf)?;
        self.write_underlords(&mut buf)?;
        self.write_unequipped_items(&mut buf)?;

        Ok(buf.into_bytes())
    }

    fn read_unit_items(&mut self, buf: &BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::UNIT_ITEMS.bit_offset();
        for i in 0..BOARD_CELLS {
            for j in 0..BOARD_CELLS {
                let offset = base + (i * BOARD_CELLS + j) * ITEM_SLOT_BITS;
                self.unit_items[i][j] = read_item_slot(buf, offset)?;
            }
        }
        Ok(())
    }

    fn write_unit_items(&self, buf: &mut BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::UNIT_ITEMS.bit_offset();
        for i in 0..BOARD_CELLS {
            for j in 0..BOARD_CELLS {
                let offset = base + (i * BOARD_CELLS + j) * ITEM_SLOT_BITS;
                write_item_slot(buf, offset, self.unit_items[i][j])?;
            }
        }
        Ok(())
    }

    fn read_board_unit_ids(&mut self, buf: &BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::BOARD_UNIT_IDS.bit_offset();
        for i in 0..BOARD_CELLS {
            for j in 0..BOARD_CELLS {
                let offset = base + (i * BOARD_CELLS + j) * 8;
                self.board_unit_ids[i][j] = buf.read(offset, 8)? as u8;
            }
        }
        Ok(())
    }

    fn write_board_unit_ids(&self, buf: &mut BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::BOARD_UNIT_IDS.bit_offset();
        for i in 0..BOARD_CELLS {
            for j in 0..BOARD_CELLS {
                let offset = base + (i * BOARD_CELLS + j) * 8;
                buf.write(offset, 8, self.board_unit_ids[i][j] as u64)?;
            }
        }
        Ok(())
    }

    fn read_selected_talents(&mut self, buf: &BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::SELECTED_TALENTS.bit_offset();
        for i in 0..MAX_TALENTS {
            for j in 0..PLAYER_COUNT {
                let offset = base + (i * PLAYER_COUNT + j) * 8;
                self.selected_talents[i][j] = buf.read(offset, 8)? as u8;
            }
        }
        Ok(())
    }

    fn write_selected_talents(&self, buf: &mut BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::SELECTED_TALENTS.bit_offset();
        for i in 0..MAX_TALENTS {
            for j in 0..PLAYER_COUNT {
                let offset = base + (i * PLAYER_COUNT + j) * 8;
                buf.write(offset, 8, self.selected_talents[i][j] as u64)?;
            }
        }
        Ok(())
    }

    fn read_unit_ranks(&mut self, buf: &BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::PACKED_UNIT_RANKS.bit_offset();
        for i in 0..BOARD_CELLS {
            self.unit_ranks[i] = read_packed_ranks(buf, base + i * 32)?;
        }
        Ok(())
    }

    fn write_unit_ranks(&self, buf: &mut BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::PACKED_UNIT_RANKS.bit_offset();
        for i in 0..BOARD_CELLS {
            write_packed_ranks(buf, base + i * 32, &self.unit_ranks[i])?;
        }
        Ok(())
    }

    fn read_bench_unit_items(&mut self, buf: &BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::BENCH_UNIT_ITEMS.bit_offset();
        for i in 0..BOARD_CELLS {
            self.bench_unit_items[i] = read_item_slot(buf, base + i * ITEM_SLOT_BITS)?;
        }
        Ok(())
    }

    fn write_bench_unit_items(&self, buf: &mut BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::BENCH_UNIT_ITEMS.bit_offset();
        for i in 0..BOARD_CELLS {
            write_item_slot(buf, base + i * ITEM_SLOT_BITS, self.bench_unit_items[i])?;
        }
        Ok(())
    }

    fn read_benched_unit_ids(&mut self, buf: &BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::BENCHED_UNIT_IDS.bit_offset();
        for i in 0..BOARD_CELLS {
            self.benched_unit_ids[i] = buf.read(base + i * 8, 8)? as u8;
        }
        Ok(())
    }

    fn write_benched_unit_ids(&self, buf: &mut BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::BENCHED_UNIT_IDS.bit_offset();
        for i in 0..BOARD_CELLS {
            buf.write(base + i * 8, 8, self.benched_unit_ids[i] as u64)?;
        }
        Ok(())
    }

    fn read_bench_unit_ranks(&mut self, buf: &BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::PACKED_BENCH_UNIT_RANKS.bit_offset();
        self.bench_unit_ranks = read_packed_ranks(buf, base)?;
        Ok(())
    }

    fn write_bench_unit_ranks(&self, buf: &mut BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::PACKED_BENCH_UNIT_RANKS.bit_offset();
        write_packed_ranks(buf, base, &self.bench_unit_ranks)
    }

    fn read_underlords(&mut self, buf: &BitBuffer) -> Result<(), ShareCodeError> {
        for i in 0..PLAYER_COUNT {
            self.underlord_ids[i] = read_player_byte(buf, layout::UNDERLORD_IDS, i)?;
            self.underlord_ranks[i] = read_player_byte(buf, layout::UNDERLORD_RANKS, i)?;
        }
        Ok(())
    }

    fn write_underlords(&self, buf: &mut BitBuffer) -> Result<(), ShareCodeError> {
        for i in 0..PLAYER_COUNT {
            write_player_byte(buf, layout::UNDERLORD_IDS, i, self.underlord_ids[i])?;
            write_player_byte(buf, layout::UNDERLORD_RANKS, i, self.underlord_ranks[i])?;
        }
        Ok(())
    }

    fn read_unequipped_items(&mut self, buf: &BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::UNEQUIPPED_ITEMS.bit_offset();
        for i in 0..MAX_UNEQUIPPED_ITEMS {
            for j in 0..PLAYER_COUNT {
                let offset = base + (i * PLAYER_COUNT + j) * ITEM_SLOT_BITS;
                self.unequipped_items[i][j] = read_item_slot(buf, offset)?;
            }
        }
        Ok(())
    }

    fn write_unequipped_items(&self, buf: &mut BitBuffer) -> Result<(), ShareCodeError> {
        let base = layout::UNEQUIPPED_ITEMS.bit_offset();
        for i in 0..MAX_UNEQUIPPED_ITEMS {
            for j in 0..PLAYER_COUNT {
                let offset = base + (i * PLAYER_COUNT + j) * ITEM_SLOT_BITS;
                write_item_slot(buf, offset, self.unequipped_items[i][j])?;
            }
        }
        Ok(())
    }
}

fn read_item_slot(buf: &BitBuffer, bit_offset: usize) -> Result<EquippedItem, ShareCodeError> {
    let slot = [
        buf.read(bit_offset, 8)? as u8,
        buf.read(bit_offset + 8, 8)? as u8,
        buf.read(bit_offset + 16, 8)? as u8,
    ];
    Ok(EquippedItem::new(item::decode_slot(slot)))
}

fn write_item_slot(
    buf: &mut BitBuffer,
    bit_offset: usize,
    item: EquippedItem,
) -> Result<(), ShareCodeError> {
    let slot = item::encode_slot(item.item_id);
    for (i, byte) in slot.iter().enumerate() {
        buf.write(bit_offset + i * 8, 8, *byte as u64)?;
    }
    Ok(())
}

fn read_packed_ranks(
    buf: &BitBuffer,
    bit_offset: usize,
) -> Result<[u8; ranks::RANKS_PER_WORD], ShareCodeError> {
    let mut packed = [0u8; 4];
    for (i, byte) in packed.iter_mut().enumerate() {
        *byte = buf.read(bit_offset + i * 8, 8)? as u8;
    }
    Ok(ranks::unpack(&packed))
}

fn write_packed_ranks(
    buf: &mut BitBuffer,
    bit_offset: usize,
    column: &[u8; ranks::RANKS_PER_WORD],
) -> Result<(), ShareCodeError> {
    let packed = ranks::pack(column);
    for (i, byte) in packed.iter().enumerate() {
        buf.write(bit_offset + i * 8, 8, *byte as u64)?;
    }
    Ok(())
}

fn read_player_byte(
    buf: &BitBuffer,
    span: FieldSpan,
    player: usize,
) -> Result<u8, ShareCodeError> {
    Ok(buf.read(span.bit_offset() + player * 8, 8)? as u8)
}

fn write_player_byte(
    buf: &mut BitBuffer,
    span: FieldSpan,
    player: usize,
    value: u8,
) -> Result<(), ShareCodeError> {
    buf.write(span.bit_offset() + player * 8, 8, value as u64)?;
    Ok(())
}
