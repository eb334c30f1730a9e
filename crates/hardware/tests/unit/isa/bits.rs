//! # Bit-Field Codec Tests

use mipsim_core::common::error::DecodeError;
use mipsim_core::isa::bits::{
    I_LAYOUT, R_LAYOUT, binary_to_int, hex_to_binary, parse_word, slice_fields,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("a", 8, "00001010")]
#[case("0x1F", 5, "11111")]
#[case("0X1f", 8, "00011111")]
#[case(" 3 ", 2, "11")]
#[case("1ff", 8, "11111111")]
fn test_hex_to_binary(#[case] text: &str, #[case] width: u32, #[case] expected: &str) {
    assert_eq!(hex_to_binary(text, width).unwrap(), expected);
}

#[test]
fn test_hex_to_binary_full_width() {
    assert_eq!(hex_to_binary("ffffffffffffffff", 64).unwrap(), "1".repeat(64));
}

#[test]
fn test_hex_to_binary_rejects_bad_width() {
    assert_eq!(hex_to_binary("1", 0), Err(DecodeError::InvalidWidth(0)));
    assert_eq!(hex_to_binary("1", 65), Err(DecodeError::InvalidWidth(65)));
}

#[rstest]
#[case("")]
#[case("0x")]
#[case("12g4")]
#[case("-1")]
fn test_hex_to_binary_rejects_malformed_text(#[case] text: &str) {
    assert_eq!(
        hex_to_binary(text, 32),
        Err(DecodeError::MalformedHex(text.to_owned()))
    );
}

#[test]
fn test_binary_to_int() {
    assert_eq!(binary_to_int("101"), Ok(5));
    assert_eq!(binary_to_int("0000"), Ok(0));
    assert_eq!(binary_to_int(&"1".repeat(64)), Ok(u64::MAX));
}

#[rstest]
#[case("")]
#[case("102")]
#[case(" 1")]
fn test_binary_to_int_rejects_non_binary(#[case] bits: &str) {
    assert_eq!(
        binary_to_int(bits),
        Err(DecodeError::MalformedBinary(bits.to_owned()))
    );
}

#[test]
fn test_binary_to_int_rejects_more_than_64_digits() {
    assert!(binary_to_int(&"0".repeat(65)).is_err());
}

#[test]
fn test_slice_register_layout() {
    // add $t1, $t0, $t0
    let bits = hex_to_binary("01084820", 32).unwrap();
    let fields = slice_fields(&bits, &R_LAYOUT).unwrap();
    assert_eq!(
        fields,
        ["000000", "01000", "01000", "01001", "00000", "100000"]
    );
}

#[test]
fn test_slice_immediate_layout() {
    let bits = hex_to_binary("8fa80004", 32).unwrap();
    let fields = slice_fields(&bits, &I_LAYOUT).unwrap();
    assert_eq!(fields[1], "11101");
    assert_eq!(binary_to_int(fields[3]), Ok(4));
}

#[rstest]
#[case(&[0])]
#[case(&[0, 40])]
#[case(&[6, 0])]
#[case(&[0, 6, 5, 32])]
fn test_slice_rejects_bad_boundaries(#[case] boundaries: &[usize]) {
    let bits = "0".repeat(32);
    assert_eq!(
        slice_fields(&bits, boundaries),
        Err(DecodeError::InvalidBoundaries {
            boundaries: boundaries.to_vec(),
            len: 32,
        })
    );
}

#[test]
fn test_parse_word_wraps_to_low_32_bits() {
    assert_eq!(parse_word("0x0000000C"), Ok(12));
    assert_eq!(parse_word("1ffffffff"), Ok(0xFFFF_FFFF));
}

proptest! {
    #[test]
    fn prop_parse_word_reads_padded_hex(word in any::<u32>()) {
        prop_assert_eq!(parse_word(&format!("{word:08x}")), Ok(word));
        prop_assert_eq!(parse_word(&format!("{word:#X}")), Ok(word));
    }

    #[test]
    fn prop_binary_matches_std_formatting(value in any::<u64>(), width in 1u32..=64) {
        let bits = hex_to_binary(&format!("{value:x}"), width).unwrap();
        let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
        prop_assert_eq!(bits.len(), width as usize);
        prop_assert_eq!(binary_to_int(&bits), Ok(value & mask));
    }
}
