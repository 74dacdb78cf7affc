//! Share codes captured from the game, decoded field by field.

use sharecode::{BoardState, EquippedItem, ShareCodeError};

const KNOWN_CODE: &str = "8qAMAAP4BAK4BAATjJ/5uAEZuAAAgEVM0LgAAAG0AbQAACwAAAP8BDAABCRsI/wAJARcBAQAOAQUBAQAGES0QbUBHOlcBEmoBAAFIACABaBABAyAAEAEpLAIgIAAwAAAGAgEgAAWCAHUR2gB0EQkBAQRjAAVyLBAAAgABBAMGdycAdy4fAK4BAA==";

const DEFAULT_CODE: &str = "8qAMAAP4BAP4BAP4BAP4BAP4BAP4BAJoBAA==";

fn known_board() -> BoardState {
    sharecode::decode(KNOWN_CODE).expect("fixture must decode")
}

#[test]
fn rejects_unsupported_versions() {
    assert!(matches!(
        sharecode::decode("7unnecessaryContent"),
        Err(ShareCodeError::UnsupportedVersion(Some('7')))
    ));
    assert!(matches!(
        sharecode::decode("dummyContent"),
        Err(ShareCodeError::UnsupportedVersion(Some('d')))
    ));
    assert!(matches!(
        sharecode::decode(""),
        Err(ShareCodeError::UnsupportedVersion(None))
    ));
}

#[test]
fn default_board_encodes_to_known_literal() {
    let code = sharecode::encode(&BoardState::default()).unwrap();
    assert_eq!(code, DEFAULT_CODE);
}

#[test]
fn default_literal_decodes_to_default_board() {
    assert_eq!(sharecode::decode(DEFAULT_CODE).unwrap(), BoardState::default());
}

#[test]
fn parses_unit_items() {
    let mut expected = [[EquippedItem::default(); 8]; 8];
    expected[4][4] = EquippedItem::new(10211);

    assert_eq!(known_board().unit_items, expected);
}

#[test]
fn parses_board_unit_ids() {
    let mut expected = [[0u8; 8]; 8];

    expected[0][0] = 32;

    expected[1][1] = 46;
    expected[1][5] = 109;
    expected[1][7] = 109;

    expected[2][2] = 11;
    expected[2][6] = 255;

    expected[3][1] = 109;
    expected[3][3] = 1;

    expected[4][2] = 255;
    expected[4][4] = 9;
    expected[4][6] = 109;

    expected[5][5] = 14;

    expected[6][6] = 6;

    expected[7][2] = 109;
    expected[7][4] = 109;
    expected[7][7] = 109;

    assert_eq!(known_board().board_unit_ids, expected);
}

#[test]
fn parses_selected_talents() {
    let mut expected = [[0u8; 2]; 16];
    expected[0][0] = 64;
    expected[0][1] = 71;
    expected[1][0] = 58;
    expected[1][1] = 87;

    assert_eq!(known_board().selected_talents, expected);
}

#[test]
fn parses_unit_ranks() {
    assert_eq!(
        known_board().unit_ranks,
        [
            [1, 0, 0, 0, 0, 0, 0, 0],
            [0, 2, 0, 2, 0, 0, 0, 0],
            [0, 0, 1, 0, 3, 0, 0, 2],
            [0, 0, 0, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, 2, 0, 0, 2],
            [0, 2, 0, 0, 0, 3, 0, 0],
            [0, 0, 6, 0, 2, 0, 1, 0],
            [0, 2, 0, 0, 0, 0, 0, 2],
        ]
    );
}

#[test]
fn parses_bench_unit_items() {
    let mut expected = [EquippedItem::default(); 8];
    expected[1] = EquippedItem::new(10101);
    expected[4] = EquippedItem::new(10100);

    assert_eq!(known_board().bench_unit_items, expected);
}

#[test]
fn parses_benched_unit_ids() {
    assert_eq!(known_board().benched_unit_ids, [0, 99, 0, 0, 14, 0, 0, 0]);
}

#[test]
fn parses_bench_unit_ranks() {
    assert_eq!(known_board().bench_unit_ranks, [0, 1, 0, 0, 2, 0, 0, 0]);
}

#[test]
fn parses_underlord_ids_and_ranks() {
    let board = known_board();
    assert_eq!(board.underlord_ids, [1, 4]);
    assert_eq!(board.underlord_ranks, [3, 6]);
}

#[test]
fn parses_unequipped_items() {
    let mut expected = [[EquippedItem::default(); 2]; 8];
    expected[0][0] = EquippedItem::new(10103);
    expected[0][1] = EquippedItem::new(10103);

    assert_eq!(known_board().unequipped_items, expected);
}

#[test]
fn reencoding_reproduces_the_exact_code() {
    let code = sharecode::encode(&known_board()).unwrap();
    assert_eq!(code, KNOWN_CODE);
}

#[test]
fn envelope_roundtrips_arbitrary_record_bytes() {
    let record: Vec<u8> = (0u16..424).map(|i| (i % 251) as u8).collect();
    let code = sharecode::envelope::wrap(sharecode::envelope::V8_MARKER, &record).unwrap();
    let back = sharecode::envelope::unwrap(sharecode::envelope::V8_MARKER, &code).unwrap();
    assert_eq!(back, record);
}

#[test]
fn short_decompressed_payload_is_rejected() {
    // A valid envelope around a record of the wrong length.
    let code = sharecode::envelope::wrap(sharecode::envelope::V8_MARKER, &[0u8; 100]).unwrap();
    assert!(matches!(
        sharecode::decode(&code),
        Err(ShareCodeError::UnexpectedRecordLength {
            expected: 424,
            found: 100
        })
    ));
}
