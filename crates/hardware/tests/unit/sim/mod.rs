//! Simulation driver tests.

/// Input records and program loading.
pub mod loader;

/// The fetch-decode-execute loop and traces.
pub mod simulator;
