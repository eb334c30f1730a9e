//! Processor core tests.

/// Architectural register storage.
pub mod arch;
