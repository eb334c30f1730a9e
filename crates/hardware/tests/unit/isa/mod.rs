//! # ISA Unit Tests
//!
//! This module contains unit tests for the Instruction Set Architecture (ISA) implementation.
//! It covers the bit-field codec, instruction decoding and disassembly.

/// Bit-field codec tests.
pub mod bits;

/// Instruction decoding tests.
///
/// This module verifies format classification, field extraction and the
/// error paths for unassigned encodings, and that the word and text decode
/// paths agree.
pub mod decode;
