//! MIPS I Integer Instruction Set.
//!
//! Encoding constants for the integer subset the emulator implements.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26).
//! - `funct`: Function codes (bits 5-0) selecting the operation when the opcode is `SPECIAL`.
//! - `regimm`: `rt` selectors (bits 20-16) for the `REGIMM` branch group.

/// Function codes for the `SPECIAL` (register-format) group.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;

/// `rt` selectors for the `REGIMM` group.
pub mod regimm;
