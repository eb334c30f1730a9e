//! MIPS general-purpose register storage.
//!
//! Raw storage for `$0`-`$31`. `$zero` is not stored at all: its slot is never
//! written and reads of it short-circuit to 0, so no caller can observe a
//! non-zero value there.

use crate::isa::abi::REG_ZERO;

/// Number of general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// The 32 general-purpose registers of a MIPS core.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; GPR_COUNT],
}

impl Gpr {
    /// All registers zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; GPR_COUNT],
        }
    }

    /// Reads register `idx`. `$zero` and indices past 31 read as 0.
    pub const fn read(&self, idx: usize) -> u32 {
        if idx == REG_ZERO || idx >= GPR_COUNT {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes register `idx`. Writes to `$zero` or past 31 are dropped.
    pub const fn write(&mut self, idx: usize, val: u32) {
        if idx != REG_ZERO && idx < GPR_COUNT {
            self.regs[idx] = val;
        }
    }

    /// `(index, value)` for every register, `$zero` first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        (0..GPR_COUNT).map(|idx| (idx, self.read(idx)))
    }
}
