//! Common utilities and types used throughout the MIPS emulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the emulator. It includes:
//! 1. **Constants:** Architectural addresses and sizes.
//! 2. **Error Handling:** Typed faults, non-fatal conditions and load errors.
//! 3. **Register Management:** The architectural register file with name resolution.

/// Architectural constants (segment bases, memory limit).
pub mod constants;

/// Error types and condition definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{Condition, DecodeError, Fault, LoadError, MemoryFault, RegisterError};
pub use reg::{RegisterFile, RegisterRef};
