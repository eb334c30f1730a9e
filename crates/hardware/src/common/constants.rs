//! Architectural constants for the MIPS emulator.
//!
//! Addresses follow the conventional MIPS32 user-mode memory layout used by
//! the common teaching simulators.

/// Size of one instruction word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Base address of the text segment; the instruction stream starts here.
pub const TEXT_BASE: u32 = 0x0040_0000;

/// Base address of the static data segment.
pub const DATA_BASE: u32 = 0x1001_0000;

/// Initial global pointer (`$gp`), 32 KiB into the data region.
pub const GLOBAL_POINTER: u32 = 0x1000_8000;

/// Initial stack pointer (`$sp`).
pub const STACK_POINTER: u32 = 0x7FFF_EFFC;

/// First kernel-space address. User-mode accesses at or above it fault.
pub const MEMORY_LIMIT: u32 = 0x8000_0000;

/// Region kept by a `j`/`jal` target: the top four bits of the next PC.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Longest string a print-string syscall reads before giving up on a terminator.
pub const MAX_STRING_BYTES: usize = 64 * 1024;
