//! Instruction encoding structures and bit extraction utilities.
//!
//! Provides the field extractors for raw 32-bit MIPS words and the decoded
//! [`Instruction`] representation: one tagged variant per encoding format,
//! each carrying a closed mnemonic enum so execution dispatch is exhaustive.

use std::fmt;

use crate::config::RegisterNaming;
use crate::isa::mips1::{funct, opcodes, regimm};

/// Bit shift of the opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for 6-bit fields (opcode, function code).
pub const SIX_BIT_MASK: u32 = 0x3F;
/// Bit mask for 5-bit fields (register indices, shift amount).
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Field positions are the same in every format; which ones are meaningful
/// depends on the format selected by the opcode.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the `rs` register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the `rt` register field (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the `rd` register field (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the shift-amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the function code (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 15-0).
    fn imm16(&self) -> u16;

    /// Extracts the 16-bit immediate sign-extended to 32 bits.
    fn simm16(&self) -> i32;

    /// Extracts the 26-bit jump target (bits 25-0), a word index.
    fn target26(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & SIX_BIT_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & SIX_BIT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    /// Reinterprets the low half as `i16` so bit 15 becomes the sign.
    #[inline(always)]
    fn simm16(&self) -> i32 {
        i32::from(self.imm16() as i16)
    }

    #[inline(always)]
    fn target26(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Encoding format of an instruction, selected by its opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Opcode 0: register operands, function code selects the operation.
    Register,
    /// Two registers and a 16-bit immediate.
    Immediate,
    /// Opcodes 2 and 3: a 26-bit word-index target.
    Jump,
}

/// Register-format operations, selected by the function code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Funct {
    /// Shift left logical by the embedded shift amount.
    Sll,
    /// Shift right logical by the embedded shift amount.
    Srl,
    /// Shift right arithmetic by the embedded shift amount.
    Sra,
    /// Shift left logical by the low five bits of `rs`.
    Sllv,
    /// Shift right logical by the low five bits of `rs`.
    Srlv,
    /// Shift right arithmetic by the low five bits of `rs`.
    Srav,
    /// Jump to the address in `rs`.
    Jr,
    /// Jump to the address in `rs`, linking into `rd`.
    Jalr,
    /// Trap into the emulator service selected by `$v0`.
    Syscall,
    /// Copy HI into `rd`.
    Mfhi,
    /// Copy LO into `rd`.
    Mflo,
    /// Signed 32x32 multiply into HI/LO.
    Mult,
    /// Unsigned 32x32 multiply into HI/LO.
    Multu,
    /// Signed divide: quotient to LO, remainder to HI.
    Div,
    /// Unsigned divide: quotient to LO, remainder to HI.
    Divu,
    /// Signed add; overflow suppresses the write.
    Add,
    /// Wrapping add.
    Addu,
    /// Signed subtract; overflow suppresses the write.
    Sub,
    /// Wrapping subtract.
    Subu,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
    /// Bitwise exclusive or.
    Xor,
    /// Bitwise not-or.
    Nor,
    /// Set `rd` to 1 if `rs < rt` (signed).
    Slt,
    /// Set `rd` to 1 if `rs < rt` (unsigned).
    Sltu,
}

impl Funct {
    /// Every register-format operation, in function-code order.
    pub const ALL: [Self; 25] = [
        Self::Sll,
        Self::Srl,
        Self::Sra,
        Self::Sllv,
        Self::Srlv,
        Self::Srav,
        Self::Jr,
        Self::Jalr,
        Self::Syscall,
        Self::Mfhi,
        Self::Mflo,
        Self::Mult,
        Self::Multu,
        Self::Div,
        Self::Divu,
        Self::Add,
        Self::Addu,
        Self::Sub,
        Self::Subu,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nor,
        Self::Slt,
        Self::Sltu,
    ];

    /// Looks up the operation for a function code.
    pub const fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            funct::SLL => Self::Sll,
            funct::SRL => Self::Srl,
            funct::SRA => Self::Sra,
            funct::SLLV => Self::Sllv,
            funct::SRLV => Self::Srlv,
            funct::SRAV => Self::Srav,
            funct::JR => Self::Jr,
            funct::JALR => Self::Jalr,
            funct::SYSCALL => Self::Syscall,
            funct::MFHI => Self::Mfhi,
            funct::MFLO => Self::Mflo,
            funct::MULT => Self::Mult,
            funct::MULTU => Self::Multu,
            funct::DIV => Self::Div,
            funct::DIVU => Self::Divu,
            funct::ADD => Self::Add,
            funct::ADDU => Self::Addu,
            funct::SUB => Self::Sub,
            funct::SUBU => Self::Subu,
            funct::AND => Self::And,
            funct::OR => Self::Or,
            funct::XOR => Self::Xor,
            funct::NOR => Self::Nor,
            funct::SLT => Self::Slt,
            funct::SLTU => Self::Sltu,
            _ => return None,
        })
    }

    /// Returns the function code that encodes this operation.
    pub const fn code(self) -> u32 {
        match self {
            Self::Sll => funct::SLL,
            Self::Srl => funct::SRL,
            Self::Sra => funct::SRA,
            Self::Sllv => funct::SLLV,
            Self::Srlv => funct::SRLV,
            Self::Srav => funct::SRAV,
            Self::Jr => funct::JR,
            Self::Jalr => funct::JALR,
            Self::Syscall => funct::SYSCALL,
            Self::Mfhi => funct::MFHI,
            Self::Mflo => funct::MFLO,
            Self::Mult => funct::MULT,
            Self::Multu => funct::MULTU,
            Self::Div => funct::DIV,
            Self::Divu => funct::DIVU,
            Self::Add => funct::ADD,
            Self::Addu => funct::ADDU,
            Self::Sub => funct::SUB,
            Self::Subu => funct::SUBU,
            Self::And => funct::AND,
            Self::Or => funct::OR,
            Self::Xor => funct::XOR,
            Self::Nor => funct::NOR,
            Self::Slt => funct::SLT,
            Self::Sltu => funct::SLTU,
        }
    }

    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Sllv => "sllv",
            Self::Srlv => "srlv",
            Self::Srav => "srav",
            Self::Jr => "jr",
            Self::Jalr => "jalr",
            Self::Syscall => "syscall",
            Self::Mfhi => "mfhi",
            Self::Mflo => "mflo",
            Self::Mult => "mult",
            Self::Multu => "multu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
        }
    }
}

/// Immediate-format operations, selected by the opcode (and `rt` for `REGIMM`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmOp {
    /// Branch if `rs < 0`.
    Bltz,
    /// Branch if `rs >= 0`.
    Bgez,
    /// Branch if `rs == rt`.
    Beq,
    /// Branch if `rs != rt`.
    Bne,
    /// Branch if `rs <= 0`.
    Blez,
    /// Branch if `rs > 0`.
    Bgtz,
    /// Signed add of the sign-extended immediate; overflow suppresses the write.
    Addi,
    /// Wrapping add of the sign-extended immediate.
    Addiu,
    /// Signed compare against the sign-extended immediate.
    Slti,
    /// Unsigned compare against the sign-extended immediate.
    Sltiu,
    /// And with the zero-extended immediate.
    Andi,
    /// Or with the zero-extended immediate.
    Ori,
    /// Exclusive or with the zero-extended immediate.
    Xori,
    /// Load the immediate into the upper half of `rt`.
    Lui,
    /// Load a sign-extended byte.
    Lb,
    /// Load a word.
    Lw,
    /// Load a zero-extended byte.
    Lbu,
    /// Store the low byte of `rt`.
    Sb,
    /// Store a word.
    Sw,
}

impl ImmOp {
    /// Every immediate-format operation, in opcode order.
    pub const ALL: [Self; 19] = [
        Self::Bltz,
        Self::Bgez,
        Self::Beq,
        Self::Bne,
        Self::Blez,
        Self::Bgtz,
        Self::Addi,
        Self::Addiu,
        Self::Slti,
        Self::Sltiu,
        Self::Andi,
        Self::Ori,
        Self::Xori,
        Self::Lui,
        Self::Lb,
        Self::Lw,
        Self::Lbu,
        Self::Sb,
        Self::Sw,
    ];

    /// Looks up the operation for an opcode outside the register and jump groups.
    ///
    /// Returns `None` for unassigned opcodes and for opcode `REGIMM`, whose
    /// operation depends on `rt` (see [`ImmOp::from_regimm`]).
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        Some(match opcode {
            opcodes::OP_BEQ => Self::Beq,
            opcodes::OP_BNE => Self::Bne,
            opcodes::OP_BLEZ => Self::Blez,
            opcodes::OP_BGTZ => Self::Bgtz,
            opcodes::OP_ADDI => Self::Addi,
            opcodes::OP_ADDIU => Self::Addiu,
            opcodes::OP_SLTI => Self::Slti,
            opcodes::OP_SLTIU => Self::Sltiu,
            opcodes::OP_ANDI => Self::Andi,
            opcodes::OP_ORI => Self::Ori,
            opcodes::OP_XORI => Self::Xori,
            opcodes::OP_LUI => Self::Lui,
            opcodes::OP_LB => Self::Lb,
            opcodes::OP_LW => Self::Lw,
            opcodes::OP_LBU => Self::Lbu,
            opcodes::OP_SB => Self::Sb,
            opcodes::OP_SW => Self::Sw,
            _ => return None,
        })
    }

    /// Looks up the `REGIMM` branch selected by the `rt` field.
    pub const fn from_regimm(rt: u32) -> Option<Self> {
        match rt {
            regimm::BLTZ => Some(Self::Bltz),
            regimm::BGEZ => Some(Self::Bgez),
            _ => None,
        }
    }

    /// Returns the primary opcode that encodes this operation.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::Bltz | Self::Bgez => opcodes::OP_REGIMM,
            Self::Beq => opcodes::OP_BEQ,
            Self::Bne => opcodes::OP_BNE,
            Self::Blez => opcodes::OP_BLEZ,
            Self::Bgtz => opcodes::OP_BGTZ,
            Self::Addi => opcodes::OP_ADDI,
            Self::Addiu => opcodes::OP_ADDIU,
            Self::Slti => opcodes::OP_SLTI,
            Self::Sltiu => opcodes::OP_SLTIU,
            Self::Andi => opcodes::OP_ANDI,
            Self::Ori => opcodes::OP_ORI,
            Self::Xori => opcodes::OP_XORI,
            Self::Lui => opcodes::OP_LUI,
            Self::Lb => opcodes::OP_LB,
            Self::Lw => opcodes::OP_LW,
            Self::Lbu => opcodes::OP_LBU,
            Self::Sb => opcodes::OP_SB,
            Self::Sw => opcodes::OP_SW,
        }
    }

    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Bltz => "bltz",
            Self::Bgez => "bgez",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blez => "blez",
            Self::Bgtz => "bgtz",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Lui => "lui",
            Self::Lb => "lb",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Sb => "sb",
            Self::Sw => "sw",
        }
    }

    /// True for the logical operations whose immediate is zero-extended.
    pub const fn zero_extends(self) -> bool {
        matches!(self, Self::Andi | Self::Ori | Self::Xori)
    }

    /// Widens a raw immediate to the 32-bit operand this operation uses.
    ///
    /// Logical operations zero-extend, `lui` moves the bits to the upper
    /// half, and every other operation sign-extends.
    pub const fn operand(self, imm: u16) -> u32 {
        match self {
            Self::Andi | Self::Ori | Self::Xori => imm as u32,
            Self::Lui => (imm as u32) << 16,
            _ => imm as i16 as i32 as u32,
        }
    }
}

/// Jump-format operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JumpOp {
    /// Jump within the current 256 MiB region.
    J,
    /// Jump and link into `$ra`.
    Jal,
}

impl JumpOp {
    /// Both jump-format operations.
    pub const ALL: [Self; 2] = [Self::J, Self::Jal];

    /// Looks up the operation for opcode 2 or 3.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_J => Some(Self::J),
            opcodes::OP_JAL => Some(Self::Jal),
            _ => None,
        }
    }

    /// Returns the primary opcode that encodes this operation.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::J => opcodes::OP_J,
            Self::Jal => opcodes::OP_JAL,
        }
    }

    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::J => "j",
            Self::Jal => "jal",
        }
    }
}

/// A decoded MIPS instruction.
///
/// One variant per encoding format. Each keeps the raw word it came from and
/// the fields meaningful to its format; the opcode is recoverable with
/// [`Instruction::opcode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Register format (opcode 0).
    Register {
        /// Raw 32-bit instruction encoding.
        raw: u32,
        /// Operation selected by the function code.
        funct: Funct,
        /// First source register index.
        rs: usize,
        /// Second source register index.
        rt: usize,
        /// Destination register index.
        rd: usize,
        /// Embedded shift amount.
        shamt: u32,
    },
    /// Immediate format.
    Immediate {
        /// Raw 32-bit instruction encoding.
        raw: u32,
        /// Operation selected by the opcode.
        op: ImmOp,
        /// Source (or base) register index.
        rs: usize,
        /// Target register index.
        rt: usize,
        /// Raw 16-bit immediate; widen with [`ImmOp::operand`].
        imm: u16,
    },
    /// Jump format (opcodes 2 and 3).
    Jump {
        /// Raw 32-bit instruction encoding.
        raw: u32,
        /// Operation selected by the opcode.
        op: JumpOp,
        /// 26-bit word-index target; the byte address is `target << 2`.
        target: u32,
    },
}

impl Instruction {
    /// Returns the raw encoding.
    pub const fn raw(&self) -> u32 {
        match *self {
            Self::Register { raw, .. } | Self::Immediate { raw, .. } | Self::Jump { raw, .. } => {
                raw
            }
        }
    }

    /// Returns the primary opcode.
    pub const fn opcode(&self) -> u32 {
        match *self {
            Self::Register { .. } => opcodes::OP_SPECIAL,
            Self::Immediate { op, .. } => op.opcode(),
            Self::Jump { op, .. } => op.opcode(),
        }
    }

    /// Returns the encoding format.
    pub const fn format(&self) -> Format {
        match self {
            Self::Register { .. } => Format::Register,
            Self::Immediate { .. } => Format::Immediate,
            Self::Jump { .. } => Format::Jump,
        }
    }

    /// Returns the assembly mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match *self {
            Self::Register { funct, .. } => funct.mnemonic(),
            Self::Immediate { op, .. } => op.mnemonic(),
            Self::Jump { op, .. } => op.mnemonic(),
        }
    }
}

impl fmt::Display for Instruction {
    /// Formats the instruction as assembly text with symbolic register names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::isa::disasm::disassemble(self, RegisterNaming::Named))
    }
}
