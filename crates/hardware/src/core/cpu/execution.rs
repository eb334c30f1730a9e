//! Instruction Execution.
//!
//! This module maps each decoded instruction onto its effect on the register
//! file, data memory and console. It performs the following:
//! 1. **Advance:** `pc` moves to the next word before the instruction runs; taken
//!    branches and jumps then overwrite it.
//! 2. **Dispatch:** A closed match over every register, immediate and jump operation.
//! 3. **Conditions:** Overflow and divide by zero are reported without stopping execution.
//! 4. **Faults:** A failed memory access restores `pc` and leaves every register untouched.

use tracing::warn;

use super::Cpu;
use crate::common::constants::{JUMP_REGION_MASK, WORD_BYTES};
use crate::common::error::{Condition, Fault};
use crate::core::units::alu::{Alu, AluOp, arithmetic};
use crate::isa::abi;
use crate::isa::instruction::{Funct, ImmOp, Instruction, JumpOp};

/// Result of executing one instruction without a fault.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Non-fatal status raised by the instruction.
    pub condition: Option<Condition>,
    /// The instruction asked the program to stop.
    pub halted: bool,
}

impl StepOutcome {
    /// An instruction that ran normally.
    pub const NORMAL: Self = Self {
        condition: None,
        halted: false,
    };

    /// An instruction that ran but raised `condition`.
    pub const fn with_condition(condition: Condition) -> Self {
        Self {
            condition: Some(condition),
            halted: false,
        }
    }

    /// An instruction that requested exit.
    pub const fn halt() -> Self {
        Self {
            condition: None,
            halted: true,
        }
    }
}

impl Cpu {
    /// Executes one decoded instruction.
    ///
    /// The instruction is taken to live at the current `pc`.
    ///
    /// # Arguments
    ///
    /// * `inst` - The decoded instruction to run.
    ///
    /// # Returns
    ///
    /// The [`StepOutcome`], carrying any non-fatal [`Condition`].
    ///
    /// # Errors
    ///
    /// [`Fault::Memory`] when a load, store or string read hits a bad address.
    /// The instruction then has no effect and `pc` still points at it.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::Cpu;
    /// use mipsim_core::isa::decode::decode;
    ///
    /// let mut cpu = Cpu::default();
    /// let start = cpu.pc();
    /// let beq = decode(0x1000_0005).unwrap(); // beq $zero, $zero, 5
    /// let outcome = cpu.execute(&beq).unwrap();
    /// assert_eq!(outcome.condition, None);
    /// assert_eq!(cpu.pc(), start + 24);
    /// ```
    pub fn execute(&mut self, inst: &Instruction) -> Result<StepOutcome, Fault> {
        let pc = self.regs.pc();
        let pc_next = pc.wrapping_add(WORD_BYTES);
        self.regs.set_pc(pc_next);

        let result = match *inst {
            Instruction::Register {
                funct,
                rs,
                rt,
                rd,
                shamt,
                ..
            } => self.execute_register(funct, rs, rt, rd, shamt, pc_next),
            Instruction::Immediate {
                op, rs, rt, imm, ..
            } => self.execute_immediate(op, rs, rt, imm, pc_next),
            Instruction::Jump { op, target, .. } => {
                if op == JumpOp::Jal {
                    self.regs.write_gpr(abi::REG_RA, pc_next);
                }
                self.regs
                    .set_pc((pc_next & JUMP_REGION_MASK) | (target << 2));
                Ok(StepOutcome::NORMAL)
            }
        };

        match result {
            Ok(outcome) => {
                if let Some(condition) = outcome.condition {
                    warn!(pc, %condition, "instruction raised a condition");
                }
                self.halted |= outcome.halted;
                Ok(outcome)
            }
            Err(fault) => {
                self.regs.set_pc(pc);
                Err(fault)
            }
        }
    }

    fn execute_register(
        &mut self,
        funct: Funct,
        rs: usize,
        rt: usize,
        rd: usize,
        shamt: u32,
        pc_next: u32,
    ) -> Result<StepOutcome, Fault> {
        let a = self.regs.read_gpr(rs);
        let b = self.regs.read_gpr(rt);

        let outcome = match funct {
            Funct::Sll => self.alu_write(rd, AluOp::Sll, b, shamt),
            Funct::Srl => self.alu_write(rd, AluOp::Srl, b, shamt),
            Funct::Sra => self.alu_write(rd, AluOp::Sra, b, shamt),
            Funct::Sllv => self.alu_write(rd, AluOp::Sll, b, a),
            Funct::Srlv => self.alu_write(rd, AluOp::Srl, b, a),
            Funct::Srav => self.alu_write(rd, AluOp::Sra, b, a),

            Funct::Jr => {
                self.regs.set_pc(a);
                StepOutcome::NORMAL
            }
            Funct::Jalr => {
                // Target is read before the link write in case rd == rs.
                self.regs.write_gpr(rd, pc_next);
                self.regs.set_pc(a);
                StepOutcome::NORMAL
            }

            Funct::Syscall => return self.syscall(),

            Funct::Mfhi => {
                self.regs.write_gpr(rd, self.regs.hi());
                StepOutcome::NORMAL
            }
            Funct::Mflo => {
                self.regs.write_gpr(rd, self.regs.lo());
                StepOutcome::NORMAL
            }
            Funct::Mult => self.set_hi_lo(Some(arithmetic::mult(a, b))),
            Funct::Multu => self.set_hi_lo(Some(arithmetic::multu(a, b))),
            Funct::Div => self.set_hi_lo(arithmetic::div(a, b)),
            Funct::Divu => self.set_hi_lo(arithmetic::divu(a, b)),

            Funct::Add => self.alu_write(rd, AluOp::Add, a, b),
            Funct::Addu => self.alu_write(rd, AluOp::Addu, a, b),
            Funct::Sub => self.alu_write(rd, AluOp::Sub, a, b),
            Funct::Subu => self.alu_write(rd, AluOp::Subu, a, b),
            Funct::And => self.alu_write(rd, AluOp::And, a, b),
            Funct::Or => self.alu_write(rd, AluOp::Or, a, b),
            Funct::Xor => self.alu_write(rd, AluOp::Xor, a, b),
            Funct::Nor => self.alu_write(rd, AluOp::Nor, a, b),
            Funct::Slt => self.alu_write(rd, AluOp::Slt, a, b),
            Funct::Sltu => self.alu_write(rd, AluOp::Sltu, a, b),
        };
        Ok(outcome)
    }

    fn execute_immediate(
        &mut self,
        op: ImmOp,
        rs: usize,
        rt: usize,
        imm: u16,
        pc_next: u32,
    ) -> Result<StepOutcome, Fault> {
        let a = self.regs.read_gpr(rs);
        let b = self.regs.read_gpr(rt);
        let operand = op.operand(imm);

        let outcome = match op {
            ImmOp::Beq => self.branch(a == b, imm, pc_next),
            ImmOp::Bne => self.branch(a != b, imm, pc_next),
            ImmOp::Bltz => self.branch((a as i32) < 0, imm, pc_next),
            ImmOp::Bgez => self.branch((a as i32) >= 0, imm, pc_next),
            ImmOp::Blez => self.branch((a as i32) <= 0, imm, pc_next),
            ImmOp::Bgtz => self.branch((a as i32) > 0, imm, pc_next),

            ImmOp::Addi => self.alu_write(rt, AluOp::Add, a, operand),
            ImmOp::Addiu => self.alu_write(rt, AluOp::Addu, a, operand),
            ImmOp::Slti => self.alu_write(rt, AluOp::Slt, a, operand),
            ImmOp::Sltiu => self.alu_write(rt, AluOp::Sltu, a, operand),
            ImmOp::Andi => self.alu_write(rt, AluOp::And, a, operand),
            ImmOp::Ori => self.alu_write(rt, AluOp::Or, a, operand),
            ImmOp::Xori => self.alu_write(rt, AluOp::Xor, a, operand),
            ImmOp::Lui => {
                self.regs.write_gpr(rt, operand);
                StepOutcome::NORMAL
            }

            ImmOp::Lb | ImmOp::Lw | ImmOp::Lbu => {
                let val = self.load(op, a.wrapping_add(operand))?;
                self.regs.write_gpr(rt, val);
                StepOutcome::NORMAL
            }
            ImmOp::Sb | ImmOp::Sw => {
                self.store(op, a.wrapping_add(operand), b)?;
                StepOutcome::NORMAL
            }
        };
        Ok(outcome)
    }

    /// Runs an ALU operation and writes its result, unless it overflowed.
    fn alu_write(&mut self, dest: usize, op: AluOp, a: u32, b: u32) -> StepOutcome {
        match Alu::execute(op, a, b) {
            Ok(val) => {
                self.regs.write_gpr(dest, val);
                StepOutcome::NORMAL
            }
            Err(condition) => StepOutcome::with_condition(condition),
        }
    }

    /// Stores a multiply/divide result; `None` is a zero divisor.
    fn set_hi_lo(&mut self, result: Option<(u32, u32)>) -> StepOutcome {
        match result {
            Some((hi, lo)) => {
                self.regs.set_hi_lo(hi, lo);
                StepOutcome::NORMAL
            }
            None => StepOutcome::with_condition(Condition::DivisionByZero),
        }
    }

    /// Redirects to `pc_next + (offset << 2)` when `taken`.
    fn branch(&mut self, taken: bool, imm: u16, pc_next: u32) -> StepOutcome {
        if taken {
            let offset = i32::from(imm as i16) << 2;
            self.regs.set_pc(pc_next.wrapping_add_signed(offset));
        }
        StepOutcome::NORMAL
    }
}
