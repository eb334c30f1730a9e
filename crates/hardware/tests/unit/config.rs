//! # Configuration Tests
//!
//! Defaults and JSON parsing of the emulator configuration.

use mipsim_core::config::{Config, DecodePolicy, RegisterNaming};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.start_pc, 0x0040_0000);
    assert_eq!(config.general.initial_sp, 0x7FFF_EFFC);
    assert_eq!(config.general.initial_gp, 0x1000_8000);
    assert_eq!(config.general.register_naming, RegisterNaming::Named);
    assert_eq!(config.general.decode_policy, DecodePolicy::Abort);
    assert_eq!(config.general.max_steps, 1_000_000);
    assert_eq!(config.memory.limit, 0x8000_0000);
}

#[test]
fn test_empty_json_is_default() {
    let config = Config::from_json("{}").unwrap();
    let default = Config::default();
    assert_eq!(config.general.start_pc, default.general.start_pc);
    assert_eq!(config.general.max_steps, default.general.max_steps);
    assert_eq!(config.memory.limit, default.memory.limit);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "general": { "trace_instructions": false } }"#).unwrap();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.start_pc, 0x0040_0000);
    assert_eq!(config.general.decode_policy, DecodePolicy::Abort);
}

#[rstest]
#[case("\"numeric\"", RegisterNaming::Numeric)]
#[case("\"Numeric\"", RegisterNaming::Numeric)]
#[case("\"named\"", RegisterNaming::Named)]
fn test_register_naming_spellings(#[case] value: &str, #[case] expected: RegisterNaming) {
    let json = format!(r#"{{ "general": {{ "register_naming": {value} }} }}"#);
    assert_eq!(
        Config::from_json(&json).unwrap().general.register_naming,
        expected
    );
}

#[test]
fn test_decode_policy_skip() {
    let config = Config::from_json(r#"{ "general": { "decode_policy": "skip" } }"#).unwrap();
    assert_eq!(config.general.decode_policy, DecodePolicy::Skip);
}

#[test]
fn test_invalid_config_is_rejected() {
    assert!(Config::from_json(r#"{ "general": { "max_steps": "lots" } }"#).is_err());
    assert!(Config::from_json(r#"{ "general": { "register_naming": "roman" } }"#).is_err());
}
