//! System Call Handling.
//!
//! The only trap the emulator models. The service number is taken from `$v0`
//! and the argument from `$a0`:
//!
//! | `$v0` | Service                                        |
//! |------:|------------------------------------------------|
//! | 1     | print `$a0` as a signed decimal integer        |
//! | 4     | print the NUL-terminated string at `$a0`       |
//! | 10    | exit                                           |
//! | 11    | print the low byte of `$a0` as a character     |
//!
//! Any other number is reported as [`Condition::UnknownSyscall`] and ignored.

use std::fmt::Write;

use tracing::debug;

use super::Cpu;
use super::execution::StepOutcome;
use crate::common::error::{Condition, Fault};
use crate::isa::abi;

/// Service numbers understood by `syscall`.
pub mod service {
    /// Print integer.
    pub const PRINT_INT: u32 = 1;
    /// Print string.
    pub const PRINT_STRING: u32 = 4;
    /// Exit.
    pub const EXIT: u32 = 10;
    /// Print character.
    pub const PRINT_CHAR: u32 = 11;
}

impl Cpu {
    /// Services a `syscall` instruction.
    ///
    /// # Errors
    ///
    /// [`Fault::Memory`] when the string of a print-string call runs off the
    /// end of memory; nothing is printed in that case.
    pub fn syscall(&mut self) -> Result<StepOutcome, Fault> {
        let code = self.regs.read_gpr(abi::REG_V0);
        let arg = self.regs.read_gpr(abi::REG_A0);
        debug!(code, arg, "syscall");

        match code {
            service::PRINT_INT => {
                let _ = write!(self.console, "{}", arg as i32);
            }
            service::PRINT_STRING => {
                let text = self.memory.read_c_string(arg)?;
                self.console.push_str(&text);
            }
            service::EXIT => return Ok(StepOutcome::halt()),
            service::PRINT_CHAR => self.console.push(char::from(arg as u8)),
            other => return Ok(StepOutcome::with_condition(Condition::UnknownSyscall(other))),
        }
        Ok(StepOutcome::NORMAL)
    }
}
