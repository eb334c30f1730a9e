//! Simulation driver and program loading.
//!
//! Provides the input-record loader, the fetch-decode-execute loop and the
//! per-step trace records it produces.

/// Input records and the instruction stream.
pub mod loader;

/// Fetch-decode-execute loop over a loaded program.
pub mod simulator;

/// Per-step and per-run trace records.
pub mod trace;

pub use self::simulator::Simulator;
