//! MIPS I Function Codes.
//!
//! The function field (bits 5-0) distinguishes between register-format
//! instructions, all of which share opcode `SPECIAL`.

/// Shift left logical by the shift-amount field.
pub const SLL: u32 = 0x00;
/// Shift right logical by the shift-amount field.
pub const SRL: u32 = 0x02;
/// Shift right arithmetic by the shift-amount field.
pub const SRA: u32 = 0x03;
/// Shift left logical by a register.
pub const SLLV: u32 = 0x04;
/// Shift right logical by a register.
pub const SRLV: u32 = 0x06;
/// Shift right arithmetic by a register.
pub const SRAV: u32 = 0x07;
/// Jump register.
pub const JR: u32 = 0x08;
/// Jump and link register.
pub const JALR: u32 = 0x09;
/// System call.
pub const SYSCALL: u32 = 0x0C;
/// Move from HI.
pub const MFHI: u32 = 0x10;
/// Move from LO.
pub const MFLO: u32 = 0x12;
/// Signed multiply into HI/LO.
pub const MULT: u32 = 0x18;
/// Unsigned multiply into HI/LO.
pub const MULTU: u32 = 0x19;
/// Signed divide into HI/LO.
pub const DIV: u32 = 0x1A;
/// Unsigned divide into HI/LO.
pub const DIVU: u32 = 0x1B;
/// Add (trapping on overflow).
pub const ADD: u32 = 0x20;
/// Add unsigned (wrapping).
pub const ADDU: u32 = 0x21;
/// Subtract (trapping on overflow).
pub const SUB: u32 = 0x22;
/// Subtract unsigned (wrapping).
pub const SUBU: u32 = 0x23;
/// Bitwise and.
pub const AND: u32 = 0x24;
/// Bitwise or.
pub const OR: u32 = 0x25;
/// Bitwise xor.
pub const XOR: u32 = 0x26;
/// Bitwise nor.
pub const NOR: u32 = 0x27;
/// Set on less than (signed).
pub const SLT: u32 = 0x2A;
/// Set on less than unsigned.
pub const SLTU: u32 = 0x2B;
