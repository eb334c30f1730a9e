//! # Loader Tests
//!
//! Input record parsing, program construction and initial state.

use mipsim_core::common::error::{DecodeError, LoadError, MemoryFault};
use mipsim_core::common::reg::RegisterFile;
use mipsim_core::sim::loader::{Program, ProgramInput, parse_address};
use mipsim_core::soc::Memory;
use pretty_assertions::assert_eq;
use rstest::rstest;

const RECORD: &str = r#"{
    "text": ["20080005", " 0x00084020 "],
    "data": { "0x10010000": 42, "268500996": -1 },
    "config": { "regs": { "$t1": 7, "t2": -1, "pc": 4194308 } }
}"#;

#[test]
fn test_parse_full_record() {
    let input = ProgramInput::from_json(RECORD).unwrap();
    assert_eq!(input.text.len(), 2);
    assert_eq!(input.data.len(), 2);
    assert_eq!(input.config.regs["$t1"], 7);
}

#[test]
fn test_every_key_is_optional() {
    assert_eq!(ProgramInput::from_json("{}").unwrap(), ProgramInput::default());
}

#[test]
fn test_malformed_record_is_a_json_error() {
    assert!(matches!(
        ProgramInput::from_json(r#"{ "text": "20080005" }"#),
        Err(LoadError::Json(_))
    ));
    assert!(matches!(
        ProgramInput::from_json("not json"),
        Err(LoadError::Json(_))
    ));
}

#[test]
fn test_program_keeps_trimmed_source_text() {
    let program = ProgramInput::from_json(RECORD).unwrap().program().unwrap();
    assert_eq!(program.words(), &[0x2008_0005, 0x0008_4020]);
    assert_eq!(program.source(1), Some("0x00084020"));
    assert_eq!(program.len(), 2);
    assert_eq!(program.word(2), None);
    assert_eq!(program.source(2), None);
}

#[test]
fn test_bad_word_names_its_index() {
    let err = Program::from_hex(["00000020", "nope"]).unwrap_err();
    match err {
        LoadError::Word { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source, DecodeError::MalformedHex("nope".to_owned()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_words_render_as_eight_hex_digits() {
    let program = Program::from_words(vec![0x20, 0x8FA8_0004]);
    assert_eq!(program.source(0), Some("00000020"));
    assert_eq!(program.source(1), Some("8fa80004"));
    assert!(!program.is_empty());
    assert!(Program::default().is_empty());
}

#[test]
fn test_apply_data_stores_words() {
    let input = ProgramInput::from_json(RECORD).unwrap();
    let mut memory = Memory::default();

    input.apply_data(&mut memory).unwrap();

    assert_eq!(memory.load_word(0x1001_0000), Ok(42));
    assert_eq!(memory.load_word(0x1001_0004), Ok(0xFFFF_FFFF));
}

#[test]
fn test_apply_data_rejects_misaligned_address() {
    let input = ProgramInput::from_json(r#"{ "data": { "0x10010002": 1 } }"#).unwrap();
    let mut memory = Memory::default();

    let err = input.apply_data(&mut memory).unwrap_err();

    assert!(matches!(
        err,
        LoadError::Memory(MemoryFault::Misaligned {
            addr: 0x1001_0002,
            width: 4,
        })
    ));
    assert!(memory.is_empty());
}

#[test]
fn test_apply_data_rejects_non_numeric_address() {
    let input = ProgramInput::from_json(r#"{ "data": { "here": 1 } }"#).unwrap();
    let err = input.apply_data(&mut Memory::default()).unwrap_err();
    assert!(matches!(err, LoadError::Address(ref key) if key == "here"));
}

#[rstest]
#[case(4_294_967_295, 0xFFFF_FFFF)]
#[case(-2_147_483_648, 0x8000_0000)]
#[case(2_147_483_648, 0x8000_0000)]
fn test_apply_data_accepts_signed_and_unsigned_words(#[case] value: i64, #[case] expected: u32) {
    let json = format!(r#"{{ "data": {{ "0x10010000": {value} }} }}"#);
    let input = ProgramInput::from_json(&json).unwrap();
    let mut memory = Memory::default();

    input.apply_data(&mut memory).unwrap();

    assert_eq!(memory.load_word(0x1001_0000), Ok(expected));
}

#[rstest]
#[case(4_294_967_296)]
#[case(-2_147_483_649)]
fn test_apply_data_rejects_values_wider_than_a_word(#[case] value: i64) {
    let json = format!(r#"{{ "data": {{ "0x10010000": {value} }} }}"#);
    let input = ProgramInput::from_json(&json).unwrap();
    let mut memory = Memory::default();

    let err = input.apply_data(&mut memory).unwrap_err();

    assert!(matches!(
        err,
        LoadError::Value { ref key, value: v } if key == "0x10010000" && v == value
    ));
    assert!(memory.is_empty());
}

#[test]
fn test_apply_registers_rejects_values_wider_than_a_word() {
    let input =
        ProgramInput::from_json(r#"{ "config": { "regs": { "$t0": 4294967296 } } }"#).unwrap();
    let mut regs = RegisterFile::default();

    let err = input.apply_registers(&mut regs).unwrap_err();

    assert!(matches!(err, LoadError::Value { ref key, .. } if key == "$t0"));
    assert_eq!(regs.read_gpr(8), 0);
}

#[test]
fn test_apply_registers() {
    let input = ProgramInput::from_json(RECORD).unwrap();
    let mut regs = RegisterFile::default();

    input.apply_registers(&mut regs).unwrap();

    assert_eq!(regs.read_gpr(9), 7);
    assert_eq!(regs.read_gpr(10), 0xFFFF_FFFF);
    assert_eq!(regs.pc(), 0x0040_0004);
}

#[test]
fn test_apply_registers_rejects_unknown_name() {
    let input = ProgramInput::from_json(r#"{ "config": { "regs": { "$x9": 1 } } }"#).unwrap();
    assert!(matches!(
        input.apply_registers(&mut RegisterFile::default()),
        Err(LoadError::Register(_))
    ));
}

#[rstest]
#[case("0", 0)]
#[case("268500992", 0x1001_0000)]
#[case("0x10010000", 0x1001_0000)]
#[case("0X7fffeffc", 0x7FFF_EFFC)]
#[case(" 16 ", 16)]
fn test_parse_address(#[case] key: &str, #[case] expected: u32) {
    assert_eq!(parse_address(key).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("-4")]
#[case("0x")]
#[case("4294967296")]
#[case("ten")]
fn test_parse_address_rejects(#[case] key: &str) {
    assert!(matches!(parse_address(key), Err(LoadError::Address(_))));
}
