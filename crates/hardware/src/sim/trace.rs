//! Execution trace records.
//!
//! One [`TraceStep`] is produced per executed instruction and a [`RunReport`]
//! summarizes a whole run. Both serialize to the JSON shape drivers consume.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::common::error::Fault;

/// State observed after one instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// The instruction word as it appeared in the input.
    pub hex: String,
    /// Disassembly of the word.
    pub text: String,
    /// Aligned data words holding a non-zero byte, keyed by address.
    pub mem: BTreeMap<u32, i32>,
    /// Non-zero general registers plus `pc`, `hi` and `lo`.
    pub regs: BTreeMap<String, i64>,
    /// Console output produced so far.
    pub stdout: String,
    /// Non-fatal status raised by the instruction, e.g. `"overflow"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The fault that ended a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FaultRecord {
    /// Address of the faulting instruction.
    pub pc: u32,
    /// The instruction word as it appeared in the input, when one was fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    /// What went wrong.
    #[serde(rename = "message", serialize_with = "serialize_display")]
    pub fault: Fault,
}

/// Summary of a complete run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Per-instruction records; empty when tracing is disabled.
    pub steps: Vec<TraceStep>,
    /// Number of instructions executed (or skipped under the skip policy).
    pub executed: u64,
    /// The program ended through the exit syscall.
    pub exited: bool,
    /// Terminating fault, if the run did not end normally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<FaultRecord>,
    /// Final console output.
    pub stdout: String,
    /// Final register snapshot.
    pub regs: BTreeMap<String, i64>,
    /// Final memory snapshot.
    pub mem: BTreeMap<u32, i32>,
}

impl RunReport {
    /// Returns `true` when the run ended without a fault.
    pub const fn is_success(&self) -> bool {
        self.fault.is_none()
    }
}

fn serialize_display<S: Serializer>(fault: &Fault, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(fault)
}
