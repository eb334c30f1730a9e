//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the MIPS I opcode tables, the bit-field codec, decoding logic and
//! the disassembler.
//!
//! # Layout
//!
//! * `mips1`: Opcode, function-code and `REGIMM` selector constants.
//! * `bits`: Hex/binary/integer conversion and field slicing.
//! * `decode`: Word to [`instruction::Instruction`] classification.
//! * `disasm`: Canonical assembly text.

/// Register naming tables and lookup (`$t0`, `$8`, ...).
pub mod abi;

/// Bit-field codec over hexadecimal and binary text.
pub mod bits;

/// Instruction decoding for the register, immediate and jump formats.
pub mod decode;

/// Instruction disassembler for listings and execution traces.
pub mod disasm;

/// Decoded instruction representation and bit extraction utilities.
pub mod instruction;

/// MIPS I encoding constants.
pub mod mips1;
