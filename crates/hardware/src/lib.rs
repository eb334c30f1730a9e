//! MIPS I decoder, disassembler and emulator library.
//!
//! This crate implements a small interpretive MIPS I emulator with the following:
//! 1. **ISA:** Bit-field codec, decoding of the register/immediate/jump formats and disassembly.
//! 2. **Core:** Register file with the hardwired-zero register, ALU and instruction execution.
//! 3. **Memory:** Sparse little-endian data memory with alignment and range checks.
//! 4. **Simulation:** JSON input loader, fetch-decode-execute loop and per-step traces.
//!
//! # Example
//!
//! ```
//! use mipsim_core::{Config, Simulator};
//!
//! // addi $t0, $zero, 5; add $t1, $t0, $t0
//! let json = r#"{ "text": ["20080005", "01084820"] }"#;
//! let mut sim = Simulator::from_json(json, Config::default()).unwrap();
//! let report = sim.run();
//!
//! assert_eq!(report.steps[1].text, "add $t1, $t0, $t0");
//! assert_eq!(report.regs["$t1"], 10);
//! ```

/// Common types and constants (errors, register file, architectural addresses).
pub mod common;
/// Emulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// CPU core (register storage, ALU, execution, syscalls).
pub mod core;
/// Instruction set (bit codec, decode, instruction, ABI names, disassembly).
pub mod isa;
/// Program loader, simulator loop and traces.
pub mod sim;
/// System-on-chip (data memory).
pub mod soc;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural CPU state; executes one decoded instruction at a time.
pub use crate::core::Cpu;
/// Decoded instruction.
pub use crate::isa::instruction::Instruction;
/// Top-level simulator; construct with `Simulator::new` or `Simulator::from_json`.
pub use crate::sim::Simulator;
