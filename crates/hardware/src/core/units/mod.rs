//! Execution units and functional components.
//!
//! Only the integer ALU is modelled; loads and stores go straight to
//! [`crate::soc::memory::Memory`].

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
