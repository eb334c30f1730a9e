//! # Simulator Tests
//!
//! The fetch/decode/execute loop, trace records and run reports.

use mipsim_core::common::error::{DecodeError, Fault};
use mipsim_core::config::{Config, DecodePolicy, GeneralConfig, RegisterNaming};
use mipsim_core::sim::Simulator;
use mipsim_core::sim::loader::Program;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

fn config(general: GeneralConfig) -> Config {
    Config {
        general,
        ..Config::default()
    }
}

#[test]
fn test_from_json_applies_initial_state() {
    let json = r#"{
        "text": ["8d090000", "01294020"],
        "data": { "0x10010000": 21 },
        "config": { "regs": { "$t0": 268500992, "$sp": 0 } }
    }"#;
    let mut sim = Simulator::from_json(json, Config::default()).unwrap();

    let report = sim.run();

    assert!(report.is_success());
    assert_eq!(report.steps[0].text, "lw $t1, 0($t0)");
    assert_eq!(report.regs["$t0"], 42);
    assert!(!report.regs.contains_key("$sp"));
    assert_eq!(report.mem[&0x1001_0000], 21);
}

#[test]
fn test_trace_step_shape() {
    let mut ctx = TestContext::new().load_program(&[0x2008_0005]);

    let step = ctx.step();
    let value = serde_json::to_value(&step).unwrap();

    assert_eq!(
        value,
        json!({
            "hex": "20080005",
            "text": "addi $t0, $zero, 5",
            "mem": {},
            "regs": {
                "$t0": 5,
                "$sp": 0x7FFF_EFFC,
                "$gp": 0x1000_8000,
                "pc": 0x0040_0004,
                "hi": 0,
                "lo": 0
            },
            "stdout": ""
        })
    );
}

#[test]
fn test_status_is_serialized_only_when_present() {
    let program = [InstructionBuilder::new().add(9, 8, 8).build()];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.set_reg(8, 0x7FFF_FFFF);

    let value = serde_json::to_value(ctx.step()).unwrap();

    assert_eq!(value["status"], "overflow");
}

#[test]
fn test_step_after_end_returns_none() {
    let mut ctx = TestContext::new().load_program(&[0x0000_0020]);
    assert!(!ctx.sim.is_finished());

    let _ = ctx.step();

    assert!(ctx.sim.is_finished());
    assert_eq!(ctx.sim.step(), Ok(None));
    assert_eq!(ctx.sim.executed(), 1);
}

#[test]
fn test_empty_program_finishes_immediately() {
    let mut ctx = TestContext::new();
    let report = ctx.run();
    assert!(report.is_success());
    assert!(report.steps.is_empty());
    assert_eq!(report.executed, 0);
    assert_eq!(report.regs["pc"], 0x0040_0000);
}

#[test]
fn test_run_without_trace_still_reports_final_state() {
    let program = [
        InstructionBuilder::new().addi(8, 0, 3).build(),
        InstructionBuilder::new().addi(8, 8, 4).build(),
    ];
    let mut ctx = TestContext::with_config(config(GeneralConfig {
        trace_instructions: false,
        ..GeneralConfig::default()
    }))
    .load_program(&program);

    let report = ctx.run();

    assert!(report.steps.is_empty());
    assert_eq!(report.executed, 2);
    assert_eq!(report.regs["$t0"], 7);
}

#[test]
fn test_undecodable_word_aborts_by_default() {
    let program = [0x0000_0020, 0xFFFF_FFFF, 0x0000_0020];
    let mut ctx = TestContext::new().load_program(&program);

    let report = ctx.run();

    let fault = report.fault.clone().unwrap();
    assert_eq!(fault.pc, 0x0040_0004);
    assert_eq!(fault.hex.as_deref(), Some("ffffffff"));
    assert!(matches!(
        fault.fault,
        Fault::Decode(DecodeError::UnknownOpcode { opcode: 0x3F, .. })
    ));
    assert_eq!(report.executed, 1);
    assert_eq!(report.steps.len(), 1);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value["fault"]["message"],
        "unknown opcode 63 in word 0xffffffff"
    );
}

#[test]
fn test_skip_policy_steps_over_undecodable_word() {
    let program = [0xFFFF_FFFF, InstructionBuilder::new().addi(8, 0, 1).build()];
    let mut ctx = TestContext::with_config(config(GeneralConfig {
        decode_policy: DecodePolicy::Skip,
        ..GeneralConfig::default()
    }))
    .load_program(&program);

    let report = ctx.run();

    assert!(report.is_success());
    assert_eq!(report.executed, 2);
    assert_eq!(report.steps[0].text, "unknown (0xffffffff)");
    assert_eq!(
        report.steps[0].status.as_deref(),
        Some("unknown opcode 63 in word 0xffffffff")
    );
    assert_eq!(report.regs["$t0"], 1);
}

#[test]
fn test_step_limit_cuts_off_infinite_loop() {
    // beq $zero, $zero, -1
    let program = [InstructionBuilder::new().beq(0, 0, -1).build()];
    let mut ctx = TestContext::with_config(config(GeneralConfig {
        max_steps: 5,
        trace_instructions: false,
        ..GeneralConfig::default()
    }))
    .load_program(&program);

    let report = ctx.run();

    assert_eq!(report.executed, 5);
    assert_eq!(
        report.fault.map(|record| record.fault),
        Some(Fault::StepLimit { limit: 5 })
    );
}

#[test]
fn test_custom_start_address() {
    let program = Program::from_words(vec![0x2008_0005, 0x0000_0020]);
    let mut sim = Simulator::new(
        program,
        config(GeneralConfig {
            start_pc: 0x0000_1000,
            ..GeneralConfig::default()
        }),
    );

    assert_eq!(sim.cpu.pc(), 0x0000_1000);
    let report = sim.run();
    assert!(report.is_success());
    assert_eq!(report.regs["pc"], 0x0000_1008);
}

#[test]
fn test_numeric_naming_applies_to_text_and_registers() {
    let mut ctx = TestContext::with_config(config(GeneralConfig {
        register_naming: RegisterNaming::Numeric,
        ..GeneralConfig::default()
    }))
    .load_program(&[0x2008_0005]);

    let step = ctx.step();

    assert_eq!(step.text, "addi $8, $0, 5");
    assert_eq!(step.regs["$8"], 5);
    assert_eq!(step.regs["$29"], 0x7FFF_EFFC);
}

#[test]
fn test_accessors() {
    let sim = Simulator::new(Program::from_words(vec![0x20]), Config::default());
    assert_eq!(sim.program().len(), 1);
    assert_eq!(sim.config().general.max_steps, 1_000_000);
    assert_eq!(sim.executed(), 0);
}
