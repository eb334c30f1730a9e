//! Fault and condition definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Component Errors:** Decode, register-name and memory faults raised by the leaf components.
//! 2. **Engine Faults:** The fatal outcome of executing one instruction, wrapping the component errors.
//! 3. **Conditions:** Non-fatal statuses (overflow, divide by zero, unknown syscall) reported per step.
//! 4. **Load Errors:** Problems found while turning an input record into a runnable program.

use std::fmt;

use thiserror::Error;

/// Failure to turn text or a machine word into an instruction.
///
/// Fatal for the single instruction being decoded; the decoder keeps no state,
/// so the next word decodes normally.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Text that is not a base-16 number.
    #[error("malformed hexadecimal word {0:?}")]
    MalformedHex(String),

    /// Text that is not a base-2 number, or has more than 64 digits.
    #[error("malformed binary string {0:?}")]
    MalformedBinary(String),

    /// A field width outside `1..=64`.
    #[error("bit width {0} is outside 1..=64")]
    InvalidWidth(u32),

    /// Cut points that are not ascending or run past the end of the string.
    #[error("field boundaries {boundaries:?} do not fit a {len}-bit string")]
    InvalidBoundaries {
        /// The requested cut points.
        boundaries: Vec<usize>,
        /// Length of the sliced string.
        len: usize,
    },

    /// Primary opcode with no assigned instruction.
    #[error("unknown opcode {opcode} in word {word:#010x}")]
    UnknownOpcode {
        /// The 6-bit opcode.
        opcode: u32,
        /// The whole instruction word.
        word: u32,
    },

    /// Register-format function code with no assigned instruction.
    #[error("unknown function code {funct} in word {word:#010x}")]
    UnknownFunction {
        /// The 6-bit function code.
        funct: u32,
        /// The whole instruction word.
        word: u32,
    },

    /// REGIMM (opcode 1) selector in `rt` with no assigned branch.
    #[error("unknown REGIMM selector {rt} in word {word:#010x}")]
    UnknownRegimm {
        /// The 5-bit `rt` selector.
        rt: u32,
        /// The whole instruction word.
        word: u32,
    },
}

/// Failure to resolve a register name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// The name is not in the symbolic or numeric table.
    #[error("unknown register {0:?}")]
    UnknownRegister(String),
}

/// Invalid data memory access.
///
/// The access has no effect: a faulting store writes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemoryFault {
    /// Address not a multiple of the access width.
    #[error("misaligned {width}-byte access at {addr:#010x}")]
    Misaligned {
        /// The faulting address.
        addr: u32,
        /// Access width in bytes.
        width: u32,
    },

    /// Access touching bytes at or past the configured memory limit.
    #[error("address {addr:#010x} is out of range")]
    OutOfRange {
        /// The faulting address.
        addr: u32,
    },
}

/// Fatal outcome of fetching, decoding or executing one instruction.
///
/// The instruction has no architectural effect and the program counter stays
/// on it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The fetched word does not decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A load, store or string read hit a bad address.
    #[error(transparent)]
    Memory(#[from] MemoryFault),

    /// The program counter points outside the instruction stream.
    #[error("instruction fetch from {pc:#010x} is outside the text segment")]
    InstructionFetch {
        /// The offending program counter.
        pc: u32,
    },

    /// The run executed its configured maximum number of instructions.
    #[error("step limit of {limit} instructions reached")]
    StepLimit {
        /// The configured limit.
        limit: u64,
    },
}

/// Non-fatal status raised by an instruction.
///
/// The run continues with the next instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Signed `add`, `addi` or `sub` left the 32-bit range; the destination was not written.
    ArithmeticOverflow,
    /// `div` or `divu` with a zero divisor; HI and LO were left unchanged.
    DivisionByZero,
    /// `syscall` with a service number the emulator does not provide.
    UnknownSyscall(u32),
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArithmeticOverflow => write!(f, "overflow"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::UnknownSyscall(code) => write!(f, "unknown syscall {code}"),
        }
    }
}

/// Failure to build a runnable program from an input record.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The record is not valid JSON or has the wrong shape.
    #[error("invalid input record: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry of the instruction list is not a hex word.
    #[error("instruction {index}: {source}")]
    Word {
        /// Position in the instruction list.
        index: usize,
        /// Why the word was rejected.
        #[source]
        source: DecodeError,
    },

    /// A data key that is neither decimal nor `0x`-prefixed hex.
    #[error("invalid memory address {0:?}")]
    Address(String),

    /// A data word that cannot be stored at its address.
    #[error(transparent)]
    Memory(#[from] MemoryFault),

    /// A register override naming an unknown register.
    #[error(transparent)]
    Register(#[from] RegisterError),

    /// A data word or register override that does not fit in 32 bits.
    #[error("value {value} for {key:?} does not fit in 32 bits")]
    Value {
        /// The data address or register name.
        key: String,
        /// The rejected value.
        value: i64,
    },
}
