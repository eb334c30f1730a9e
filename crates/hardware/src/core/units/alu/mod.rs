//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used by the execution
//! engine. It handles arithmetic with and without overflow trapping, logical
//! operations, comparisons and shifts, plus the HI/LO multiply and divide
//! operations.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Addu, Sub, Subu, and the mult/div family
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, nor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::common::error::Condition;

/// ALU operation selected by the execution engine.
///
/// Register and immediate forms of the same operation share a variant; the
/// caller extends the immediate before handing it over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Signed add, traps on overflow.
    Add,
    /// Wrapping add.
    Addu,
    /// Signed subtract, traps on overflow.
    Sub,
    /// Wrapping subtract.
    Subu,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Signed set-less-than.
    Slt,
    /// Unsigned set-less-than.
    Sltu,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand; the value to shift for shift operations
    /// * `b`  - Second operand; the shift amount for shift operations
    ///
    /// # Returns
    ///
    /// The 32-bit result.
    ///
    /// # Errors
    ///
    /// [`Condition::ArithmeticOverflow`] when a trapping add or subtract
    /// overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::common::error::Condition;
    /// use mipsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), Ok(50));
    /// assert_eq!(
    ///     Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1),
    ///     Err(Condition::ArithmeticOverflow)
    /// );
    /// assert_eq!(Alu::execute(AluOp::Addu, 0x7FFF_FFFF, 1), Ok(0x8000_0000));
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), Ok(0x10));
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), Ok(1));
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> Result<u32, Condition> {
        match op {
            AluOp::Add | AluOp::Addu | AluOp::Sub | AluOp::Subu => {
                arithmetic::execute(op, a, b)
            }
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor | AluOp::Slt | AluOp::Sltu => {
                Ok(logic::execute(op, a, b))
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => Ok(shifts::execute(op, a, b)),
        }
    }
}
