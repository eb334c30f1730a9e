//! Memory Access Helpers.
//!
//! This module provides the interface between the execution engine and data
//! memory: width selection and extension for loads, truncation for stores.
//! Address arithmetic (`rs + offset`, wrapping) is done by the caller.

use super::Cpu;
use crate::common::error::MemoryFault;
use crate::isa::instruction::ImmOp;

impl Cpu {
    /// Performs a load and returns the value to write back.
    ///
    /// # Arguments
    ///
    /// * `op` - `Lb` (sign-extended byte), `Lbu` (zero-extended byte) or `Lw`.
    /// * `addr` - Effective address.
    ///
    /// # Errors
    ///
    /// The [`MemoryFault`] of the underlying access.
    pub fn load(&self, op: ImmOp, addr: u32) -> Result<u32, MemoryFault> {
        match op {
            ImmOp::Lb => Ok(self.memory.load_byte(addr)? as i8 as i32 as u32),
            ImmOp::Lbu => Ok(u32::from(self.memory.load_byte(addr)?)),
            _ => self.memory.load_word(addr),
        }
    }

    /// Performs a store of the low bits of `val`.
    ///
    /// # Arguments
    ///
    /// * `op` - `Sb` (low byte) or `Sw`.
    /// * `addr` - Effective address.
    /// * `val` - Value of `rt`.
    ///
    /// # Errors
    ///
    /// The [`MemoryFault`] of the underlying access; nothing is written.
    pub fn store(&mut self, op: ImmOp, addr: u32, val: u32) -> Result<(), MemoryFault> {
        match op {
            ImmOp::Sb => self.memory.store_byte(addr, val as u8),
            _ => self.memory.store_word(addr, val),
        }
    }
}
