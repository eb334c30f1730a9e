//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, the programmer-visible register state
//! of one emulated MIPS core. It provides:
//! 1. **Unified Storage:** The 32 general registers plus `pc`, `hi` and `lo`.
//! 2. **Name Resolution:** Access by index or by symbolic/numeric register name.
//! 3. **Observability:** Snapshots of the non-zero state for per-step traces.

use std::collections::BTreeMap;

use crate::common::error::RegisterError;
use crate::config::{GeneralConfig, RegisterNaming};
use crate::core::arch::gpr::{GPR_COUNT, Gpr};
use crate::isa::abi;

/// Name of the program counter in name lookups and snapshots.
pub const PC_NAME: &str = "pc";
/// Name of the HI multiply/divide register.
pub const HI_NAME: &str = "hi";
/// Name of the LO multiply/divide register.
pub const LO_NAME: &str = "lo";

/// A register addressable through the register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegisterRef {
    /// General-purpose register `$0`-`$31`. Larger indices read as 0 and
    /// ignore writes; [`RegisterRef::gpr`] rejects them up front.
    Gpr(u8),
    /// Program counter.
    Pc,
    /// High word of a multiply, remainder of a divide.
    Hi,
    /// Low word of a multiply, quotient of a divide.
    Lo,
}

impl RegisterRef {
    /// Returns the general register with index `idx`, or `None` past `$31`.
    pub fn gpr(idx: usize) -> Option<Self> {
        u8::try_from(idx)
            .ok()
            .filter(|&i| (i as usize) < GPR_COUNT)
            .map(Self::Gpr)
    }
}

/// Architectural register state of one MIPS core.
///
/// Register `$zero` reads as 0 whatever is written to it. The naming mode only
/// affects how registers are displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    pc: u32,
    hi: u32,
    lo: u32,
    naming: RegisterNaming,
}

impl RegisterFile {
    /// Creates a register file with the architectural reset values.
    ///
    /// All general registers are zero except `$sp` and `$gp`; `pc` is the
    /// configured start address and `hi`/`lo` are zero.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the initial `pc`, `$sp`, `$gp` and the naming mode.
    pub fn new(config: &GeneralConfig) -> Self {
        let mut gpr = Gpr::new();
        gpr.write(abi::REG_SP, config.initial_sp);
        gpr.write(abi::REG_GP, config.initial_gp);
        Self {
            gpr,
            pc: config.start_pc,
            hi: 0,
            lo: 0,
            naming: config.register_naming,
        }
    }

    /// Returns the naming mode used for display.
    pub const fn naming(&self) -> RegisterNaming {
        self.naming
    }

    /// Reads any register.
    pub const fn read(&self, reg: RegisterRef) -> u32 {
        match reg {
            RegisterRef::Gpr(idx) => self.gpr.read(idx as usize),
            RegisterRef::Pc => self.pc,
            RegisterRef::Hi => self.hi,
            RegisterRef::Lo => self.lo,
        }
    }

    /// Writes any register. Writes to `$zero` are discarded.
    pub const fn write(&mut self, reg: RegisterRef, val: u32) {
        match reg {
            RegisterRef::Gpr(idx) => self.gpr.write(idx as usize, val),
            RegisterRef::Pc => self.pc = val,
            RegisterRef::Hi => self.hi = val,
            RegisterRef::Lo => self.lo = val,
        }
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). `$zero` and larger indices return 0.
    #[inline]
    pub const fn read_gpr(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `$zero` or past `$31` are ignored.
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub const fn write_gpr(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Returns the program counter.
    #[inline]
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Sets the program counter.
    #[inline]
    pub const fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Returns the HI register.
    pub const fn hi(&self) -> u32 {
        self.hi
    }

    /// Returns the LO register.
    pub const fn lo(&self) -> u32 {
        self.lo
    }

    /// Writes HI and LO together, as every multiply and divide does.
    pub const fn set_hi_lo(&mut self, hi: u32, lo: u32) {
        self.hi = hi;
        self.lo = lo;
    }

    /// Resolves a register name.
    ///
    /// Accepts `pc`, `hi`, `lo` and any general register name understood by
    /// [`abi::lookup`], independent of the display naming mode.
    ///
    /// # Errors
    ///
    /// [`RegisterError::UnknownRegister`] when the name matches nothing.
    pub fn resolve(name: &str) -> Result<RegisterRef, RegisterError> {
        match name {
            PC_NAME => Ok(RegisterRef::Pc),
            HI_NAME => Ok(RegisterRef::Hi),
            LO_NAME => Ok(RegisterRef::Lo),
            _ => abi::lookup(name)
                .and_then(RegisterRef::gpr)
                .ok_or_else(|| RegisterError::UnknownRegister(name.to_owned())),
        }
    }

    /// Reads a register by name.
    ///
    /// # Errors
    ///
    /// [`RegisterError::UnknownRegister`] when the name does not resolve.
    pub fn read_named(&self, name: &str) -> Result<u32, RegisterError> {
        Self::resolve(name).map(|reg| self.read(reg))
    }

    /// Writes a register by name. Writing `$zero` succeeds and has no effect.
    ///
    /// # Errors
    ///
    /// [`RegisterError::UnknownRegister`] when the name does not resolve; nothing is written.
    pub fn write_named(&mut self, name: &str, val: u32) -> Result<(), RegisterError> {
        let reg = Self::resolve(name)?;
        self.write(reg, val);
        Ok(())
    }

    /// Returns the display name of a register under the configured naming mode.
    pub fn name_of(&self, reg: RegisterRef) -> &'static str {
        match reg {
            RegisterRef::Gpr(idx) => abi::reg_name(idx as usize, self.naming),
            RegisterRef::Pc => PC_NAME,
            RegisterRef::Hi => HI_NAME,
            RegisterRef::Lo => LO_NAME,
        }
    }

    /// Captures the register state for a trace record.
    ///
    /// Contains every non-zero general register (as a signed 32-bit value)
    /// keyed by display name, plus `pc` (unsigned), `hi` and `lo`, which are
    /// always present.
    pub fn snapshot(&self) -> BTreeMap<String, i64> {
        let mut regs: BTreeMap<String, i64> = self
            .gpr
            .iter()
            .filter(|&(_, val)| val != 0)
            .map(|(idx, val)| {
                (
                    abi::reg_name(idx, self.naming).to_owned(),
                    i64::from(val as i32),
                )
            })
            .collect();
        let _ = regs.insert(PC_NAME.to_owned(), i64::from(self.pc));
        let _ = regs.insert(HI_NAME.to_owned(), i64::from(self.hi as i32));
        let _ = regs.insert(LO_NAME.to_owned(), i64::from(self.lo as i32));
        regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(&GeneralConfig::default())
    }
}
