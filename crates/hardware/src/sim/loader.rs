//! Program Loader.
//!
//! Turns an input record into the pieces a run needs. It provides:
//! 1. **Parsing:** The JSON input record (`text`, `data`, `config.regs`).
//! 2. **Program:** The instruction stream as machine words, with the original text kept for traces.
//! 3. **Initial State:** Data words written into memory and register overrides applied.
//!
//! # Input record
//!
//! ```json
//! {
//!   "text": ["20080005", "00084020"],
//!   "data": { "0x10010000": 42, "268500996": -1 },
//!   "config": { "regs": { "$t1": 7 } }
//! }
//! ```
//!
//! Every key is optional. Data addresses are decimal or `0x`-prefixed hex and
//! must be word aligned. Values are 32-bit words given either signed or unsigned
//! (`-1` and `4294967295` are the same word); anything wider is rejected.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::common::error::LoadError;
use crate::common::reg::RegisterFile;
use crate::isa::bits;
use crate::soc::Memory;

/// A program input record as read from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProgramInput {
    /// Hexadecimal instruction words in execution order.
    #[serde(default)]
    pub text: Vec<String>,
    /// Initial data words keyed by address.
    #[serde(default)]
    pub data: BTreeMap<String, i64>,
    /// Initial architectural state.
    #[serde(default)]
    pub config: InitialState,
}

/// Register overrides applied after reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct InitialState {
    /// Register name to value; any name [`RegisterFile::resolve`] accepts.
    #[serde(default)]
    pub regs: BTreeMap<String, i64>,
}

impl ProgramInput {
    /// Parses an input record.
    ///
    /// # Errors
    ///
    /// [`LoadError::Json`] when the text is not a valid record.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decodes the `text` list into a [`Program`].
    ///
    /// # Errors
    ///
    /// [`LoadError::Word`] naming the first entry that is not hexadecimal.
    pub fn program(&self) -> Result<Program, LoadError> {
        Program::from_hex(&self.text)
    }

    /// Writes the `data` words into `memory`.
    ///
    /// # Errors
    ///
    /// [`LoadError::Address`] for a key that is not a number,
    /// [`LoadError::Memory`] for a misaligned or out-of-range address, and
    /// [`LoadError::Value`] for a value outside the 32-bit range.
    pub fn apply_data(&self, memory: &mut Memory) -> Result<(), LoadError> {
        for (key, &value) in &self.data {
            let addr = parse_address(key)?;
            memory.store_word(addr, to_word(key, value)?)?;
        }
        Ok(())
    }

    /// Applies the register overrides.
    ///
    /// # Errors
    ///
    /// [`LoadError::Register`] for a name that does not resolve, and
    /// [`LoadError::Value`] for a value outside the 32-bit range.
    pub fn apply_registers(&self, regs: &mut RegisterFile) -> Result<(), LoadError> {
        for (name, &value) in &self.config.regs {
            regs.write_named(name, to_word(name, value)?)?;
        }
        Ok(())
    }
}

/// The instruction stream of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    words: Vec<u32>,
    source: Vec<String>,
}

impl Program {
    /// Parses hexadecimal words.
    ///
    /// # Errors
    ///
    /// [`LoadError::Word`] naming the first entry that is not hexadecimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::sim::loader::Program;
    ///
    /// let program = Program::from_hex(["00000020", "0x0000000c"]).unwrap();
    /// assert_eq!(program.words(), &[0x20, 0x0c]);
    /// assert_eq!(program.source(1), Some("0x0000000c"));
    /// ```
    pub fn from_hex<I, S>(lines: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut program = Self::default();
        for (index, line) in lines.into_iter().enumerate() {
            let text = line.as_ref().trim();
            let word =
                bits::parse_word(text).map_err(|source| LoadError::Word { index, source })?;
            program.words.push(word);
            program.source.push(text.to_owned());
        }
        Ok(program)
    }

    /// Wraps machine words, rendering each as eight hex digits.
    pub fn from_words(words: Vec<u32>) -> Self {
        let source = words.iter().map(|w| format!("{w:08x}")).collect();
        Self { words, source }
    }

    /// Returns the instruction words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Returns the word at `index`.
    pub fn word(&self, index: usize) -> Option<u32> {
        self.words.get(index).copied()
    }

    /// Returns the input text of the word at `index`.
    pub fn source(&self, index: usize) -> Option<&str> {
        self.source.get(index).map(String::as_str)
    }

    /// Number of instruction words.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` for an empty stream.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parses a data address: decimal, or hex with a `0x`/`0X` prefix.
///
/// # Errors
///
/// [`LoadError::Address`] when the key is neither.
pub fn parse_address(key: &str) -> Result<u32, LoadError> {
    let trimmed = key.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| LoadError::Address(key.to_owned()))
}

/// Narrows a record value to a word, accepting the signed and unsigned ranges.
fn to_word(key: &str, value: i64) -> Result<u32, LoadError> {
    u32::try_from(value)
        .or_else(|_| i32::try_from(value).map(|v| v as u32))
        .map_err(|_| LoadError::Value {
            key: key.to_owned(),
            value,
        })
}
