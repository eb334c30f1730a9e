//! ALU arithmetic operations.
//!
//! Implements 32-bit addition and subtraction in trapping (`add`, `sub`) and
//! wrapping (`addu`, `subu`) flavours, and the multiply/divide family whose
//! results land in the HI/LO pair rather than a general register.

use super::AluOp;
use crate::common::error::Condition;

/// Number of bits in a word (used to split 64-bit products).
const WORD_BITS: u32 = 32;

/// Executes an add or subtract.
///
/// # Arguments
///
/// * `op` - One of `Add`, `Addu`, `Sub`, `Subu`.
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result. Non-arithmetic opcodes yield `Ok(0)`.
///
/// # Errors
///
/// [`Condition::ArithmeticOverflow`] when `Add`/`Sub` overflows the signed
/// range; the caller must then leave the destination untouched.
pub fn execute(op: AluOp, a: u32, b: u32) -> Result<u32, Condition> {
    match op {
        AluOp::Add => (a as i32)
            .checked_add(b as i32)
            .map(|v| v as u32)
            .ok_or(Condition::ArithmeticOverflow),
        AluOp::Sub => (a as i32)
            .checked_sub(b as i32)
            .map(|v| v as u32)
            .ok_or(Condition::ArithmeticOverflow),
        AluOp::Addu => Ok(a.wrapping_add(b)),
        AluOp::Subu => Ok(a.wrapping_sub(b)),
        _ => Ok(0),
    }
}

/// Signed 32x32 multiply.
///
/// # Returns
///
/// `(hi, lo)`: the high and low words of the 64-bit product.
pub const fn mult(a: u32, b: u32) -> (u32, u32) {
    let product = (a as i32 as i64) * (b as i32 as i64);
    split(product as u64)
}

/// Unsigned 32x32 multiply.
///
/// # Returns
///
/// `(hi, lo)`: the high and low words of the 64-bit product.
pub const fn multu(a: u32, b: u32) -> (u32, u32) {
    split((a as u64) * (b as u64))
}

/// Signed divide, truncating toward zero.
///
/// # Returns
///
/// `Some((hi, lo))` with the remainder in `hi` and the quotient in `lo`, or
/// `None` for a zero divisor. `i32::MIN / -1` wraps to `(0, i32::MIN)`.
pub const fn div(a: u32, b: u32) -> Option<(u32, u32)> {
    if b == 0 {
        return None;
    }
    let (n, d) = (a as i32, b as i32);
    Some((n.wrapping_rem(d) as u32, n.wrapping_div(d) as u32))
}

/// Unsigned divide.
///
/// # Returns
///
/// `Some((hi, lo))` with the remainder in `hi` and the quotient in `lo`, or
/// `None` for a zero divisor.
pub const fn divu(a: u32, b: u32) -> Option<(u32, u32)> {
    if b == 0 {
        return None;
    }
    Some((a % b, a / b))
}

const fn split(value: u64) -> (u32, u32) {
    ((value >> WORD_BITS) as u32, value as u32)
}
