//! System-on-Chip (SoC) Components.
//!
//! The emulated system has a single device: the sparse data memory shared by
//! loads, stores and syscalls. The instruction stream is held by the
//! simulator and is not addressable as data.

/// Sparse byte-addressable data memory.
pub mod memory;

pub use memory::Memory;
