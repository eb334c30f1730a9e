//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire architectural state of one MIPS core. It coordinates the following:
//! 1. **State Management:** Owns the register file (general registers, `pc`, `hi`, `lo`).
//! 2. **Memory:** Owns the sparse data memory used by loads, stores and syscalls.
//! 3. **Console:** Accumulates everything the program prints through `syscall`.

/// Instruction execution and control-flow resolution.
pub mod execution;

/// Load and store operations.
pub mod memory;

/// `syscall` service dispatch.
pub mod syscall;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::soc::Memory;

pub use self::execution::StepOutcome;

/// Architectural state of the emulated processor.
///
/// Instructions are executed one at a time with [`Cpu::execute`]; there is no
/// pipeline, so every instruction completes before the next is looked at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu {
    /// General-purpose registers, program counter and HI/LO.
    pub regs: RegisterFile,
    /// Data memory.
    pub memory: Memory,
    /// Console output produced so far.
    pub console: String,
    /// Set once the program has requested exit.
    pub halted: bool,
}

impl Cpu {
    /// Creates a CPU in its reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the initial register values, the naming mode and the memory limit.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(&config.general),
            memory: Memory::from_config(&config.memory),
            console: String::new(),
            halted: false,
        }
    }

    /// Returns the current program counter.
    #[inline]
    pub const fn pc(&self) -> u32 {
        self.regs.pc()
    }
}
