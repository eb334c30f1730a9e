//! # Error Message Tests
//!
//! Conditions end up verbatim in trace records, so their text is part of the
//! output format.

use mipsim_core::common::error::{Condition, DecodeError, Fault, MemoryFault};
use pretty_assertions::assert_eq;

#[test]
fn test_condition_messages() {
    assert_eq!(Condition::ArithmeticOverflow.to_string(), "overflow");
    assert_eq!(Condition::DivisionByZero.to_string(), "division by zero");
    assert_eq!(Condition::UnknownSyscall(99).to_string(), "unknown syscall 99");
}

#[test]
fn test_fault_is_transparent_over_component_errors() {
    let mem = MemoryFault::Misaligned {
        addr: 0x1001_0002,
        width: 4,
    };
    assert_eq!(Fault::from(mem).to_string(), mem.to_string());

    let decode = DecodeError::UnknownOpcode {
        opcode: 0x3F,
        word: 0xFC00_0000,
    };
    assert_eq!(Fault::from(decode.clone()).to_string(), decode.to_string());
}

#[test]
fn test_memory_fault_message_names_address() {
    let fault = MemoryFault::OutOfRange { addr: 0x8000_0000 };
    assert_eq!(fault.to_string(), "address 0x80000000 is out of range");
}

#[test]
fn test_step_limit_message() {
    assert_eq!(
        Fault::StepLimit { limit: 10 }.to_string(),
        "step limit of 10 instructions reached"
    );
}
