//! MIPS I Primary Opcodes.
//!
//! Defines the 6-bit primary opcodes (bits 31-26). Opcode 0 routes to the
//! function-code table and opcode 1 to the `REGIMM` table.

/// Register-format instructions; the function code selects the operation.
pub const OP_SPECIAL: u32 = 0x00;
/// Branches on the sign of `rs`; the `rt` field selects the condition.
pub const OP_REGIMM: u32 = 0x01;
/// Jump.
pub const OP_J: u32 = 0x02;
/// Jump and link.
pub const OP_JAL: u32 = 0x03;
/// Branch on equal.
pub const OP_BEQ: u32 = 0x04;
/// Branch on not equal.
pub const OP_BNE: u32 = 0x05;
/// Branch on less than or equal to zero.
pub const OP_BLEZ: u32 = 0x06;
/// Branch on greater than zero.
pub const OP_BGTZ: u32 = 0x07;
/// Add immediate (trapping on overflow).
pub const OP_ADDI: u32 = 0x08;
/// Add immediate unsigned (wrapping).
pub const OP_ADDIU: u32 = 0x09;
/// Set on less than immediate.
pub const OP_SLTI: u32 = 0x0A;
/// Set on less than immediate unsigned.
pub const OP_SLTIU: u32 = 0x0B;
/// And immediate.
pub const OP_ANDI: u32 = 0x0C;
/// Or immediate.
pub const OP_ORI: u32 = 0x0D;
/// Xor immediate.
pub const OP_XORI: u32 = 0x0E;
/// Load upper immediate.
pub const OP_LUI: u32 = 0x0F;
/// Load byte (sign-extended).
pub const OP_LB: u32 = 0x20;
/// Load word.
pub const OP_LW: u32 = 0x23;
/// Load byte unsigned.
pub const OP_LBU: u32 = 0x24;
/// Store byte.
pub const OP_SB: u32 = 0x28;
/// Store word.
pub const OP_SW: u32 = 0x2B;
