//! Configuration system for the MIPS emulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! a run. It provides:
//! 1. **Defaults:** Architectural conventions (text base, stack and global pointers, memory limit).
//! 2. **Structures:** Hierarchical config for general run options and memory.
//! 3. **Enums:** Register naming mode and the policy applied to undecodable words.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or built with `Config::default()`.

use serde::Deserialize;

use crate::common::constants;

/// Default configuration constants for the emulator.
///
/// Architectural addresses live in [`crate::common::constants`]; the values here
/// are run options that have no architectural meaning.
mod defaults {
    /// Per-step tracing is on by default so drivers get the full record.
    pub const TRACE_INSTRUCTIONS: bool = true;

    /// Upper bound on executed instructions before a run is cut off.
    ///
    /// A backwards branch can loop forever on a finite stream; the limit turns
    /// that into a reported fault instead of a hang.
    pub const MAX_STEPS: u64 = 1_000_000;
}

/// How register indices are rendered in disassembly and snapshots.
///
/// Only display changes with this setting; name resolution accepts both forms
/// and numeric semantics are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegisterNaming {
    /// Conventional ABI names (`$zero`, `$t0`, `$sp`, ...).
    #[default]
    #[serde(alias = "Named")]
    Named,
    /// Plain indices (`$0`, `$8`, `$29`, ...).
    #[serde(alias = "Numeric")]
    Numeric,
}

/// What a run does when a fetched word does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Stop the run and report the decode error as the terminating fault.
    #[default]
    #[serde(alias = "Abort")]
    Abort,
    /// Log the error, step over the word and keep running.
    #[serde(alias = "Skip")]
    Skip,
}

/// Root configuration structure.
///
/// Every field has a default, so an empty JSON object is a valid configuration.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{Config, RegisterNaming};
///
/// let json = r#"{
///     "general": { "register_naming": "numeric", "max_steps": 500 },
///     "memory": { "limit": 268435456 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.register_naming, RegisterNaming::Numeric);
/// assert_eq!(config.general.max_steps, 500);
/// assert_eq!(config.memory.limit, 0x1000_0000);
/// assert_eq!(config.general.start_pc, 0x0040_0000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// General run settings and options.
///
/// Contains the initial architectural state and the knobs a driver uses to
/// shape the run and its trace.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Record a trace step (memory, registers, console) after every instruction
    #[serde(default = "GeneralConfig::default_trace_instructions")]
    pub trace_instructions: bool,

    /// Initial PC value; the instruction stream is placed here (defaults to the text segment base)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Initial `$sp`
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: u32,

    /// Initial `$gp`
    #[serde(default = "GeneralConfig::default_initial_gp")]
    pub initial_gp: u32,

    /// Register naming used by disassembly and snapshots
    #[serde(default)]
    pub register_naming: RegisterNaming,

    /// Handling of words that fail to decode
    #[serde(default)]
    pub decode_policy: DecodePolicy,

    /// Maximum number of executed instructions before the run faults
    #[serde(default = "GeneralConfig::default_max_steps")]
    pub max_steps: u64,
}

impl GeneralConfig {
    fn default_trace_instructions() -> bool {
        defaults::TRACE_INSTRUCTIONS
    }

    /// Returns the default starting program counter.
    fn default_start_pc() -> u32 {
        constants::TEXT_BASE
    }

    fn default_initial_sp() -> u32 {
        constants::STACK_POINTER
    }

    fn default_initial_gp() -> u32 {
        constants::GLOBAL_POINTER
    }

    fn default_max_steps() -> u64 {
        defaults::MAX_STEPS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: defaults::TRACE_INSTRUCTIONS,
            start_pc: constants::TEXT_BASE,
            initial_sp: constants::STACK_POINTER,
            initial_gp: constants::GLOBAL_POINTER,
            register_naming: RegisterNaming::default(),
            decode_policy: DecodePolicy::default(),
            max_steps: defaults::MAX_STEPS,
        }
    }
}

/// Data memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// First address past the accessible range; accesses at or above it fault
    #[serde(default = "MemoryConfig::default_limit")]
    pub limit: u32,
}

impl MemoryConfig {
    fn default_limit() -> u32 {
        constants::MEMORY_LIMIT
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            limit: constants::MEMORY_LIMIT,
        }
    }
}
