//! MIPS architectural state.
//!
//! Holds the storage-level pieces of the programmer-visible state. The
//! name-aware view with `pc`, `hi` and `lo` is [`crate::common::RegisterFile`].

/// General-Purpose Register file implementation.
pub mod gpr;
