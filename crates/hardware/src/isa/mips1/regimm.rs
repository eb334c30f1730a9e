//! MIPS I `REGIMM` Selectors.
//!
//! For opcode `REGIMM` the `rt` field (bits 20-16) picks the branch condition.

/// Branch on less than zero.
pub const BLTZ: u32 = 0x00;
/// Branch on greater than or equal to zero.
pub const BGEZ: u32 = 0x01;
