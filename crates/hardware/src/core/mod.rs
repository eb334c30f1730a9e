//! Core processor implementation.
//!
//! This module contains the architectural state of the emulated MIPS core,
//! the execution units it uses and the instruction-level execution logic.

/// Architecture-specific components (general-purpose register storage).
pub mod arch;

/// CPU core implementation and instruction execution.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, StepOutcome};
