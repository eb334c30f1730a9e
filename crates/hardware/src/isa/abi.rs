//! MIPS Application Binary Interface (ABI) register names.
//!
//! Defines the conventional register indices used by the syscall and call
//! conventions, and the two name tables (symbolic and numeric) used to render
//! and resolve register operands.

use crate::config::RegisterNaming;

/// Register `$0` (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register `$2` (syscall service number / return value, `$v0`).
pub const REG_V0: usize = 2;
/// Register `$4` (first argument, `$a0`).
pub const REG_A0: usize = 4;
/// Register `$28` (global pointer, `$gp`).
pub const REG_GP: usize = 28;
/// Register `$29` (stack pointer, `$sp`).
pub const REG_SP: usize = 29;
/// Register `$31` (return address, `$ra`).
pub const REG_RA: usize = 31;

/// Conventional names for `$0`-`$31`.
pub const NAMED_REGS: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Plain numeric names for `$0`-`$31`.
pub const NUMERIC_REGS: [&str; 32] = [
    "$0", "$1", "$2", "$3", "$4", "$5", "$6", "$7", "$8", "$9", "$10", "$11", "$12", "$13", "$14",
    "$15", "$16", "$17", "$18", "$19", "$20", "$21", "$22", "$23", "$24", "$25", "$26", "$27",
    "$28", "$29", "$30", "$31",
];

/// Returns the display name of a general register under `naming`.
///
/// Indices outside `0..32` render as `$??`.
#[inline]
pub fn reg_name(idx: usize, naming: RegisterNaming) -> &'static str {
    let table = match naming {
        RegisterNaming::Named => &NAMED_REGS,
        RegisterNaming::Numeric => &NUMERIC_REGS,
    };
    table.get(idx).copied().unwrap_or("$??")
}

/// Resolves a general register name to its index.
///
/// Accepts symbolic (`$t0`) and numeric (`$8`) forms, with or without the
/// leading `$`, plus `$s8` as the alias of `$fp`. Names are case-sensitive.
pub fn lookup(name: &str) -> Option<usize> {
    let bare = name.strip_prefix('$').unwrap_or(name);
    if bare.is_empty() {
        return None;
    }
    if bare.bytes().all(|b| b.is_ascii_digit()) {
        return bare.parse::<usize>().ok().filter(|&idx| idx < NAMED_REGS.len());
    }
    if bare == "s8" {
        return Some(30);
    }
    NAMED_REGS.iter().position(|named| named[1..] == *bare)
}
