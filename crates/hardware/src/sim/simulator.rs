//! Simulator: owns the CPU and the instruction stream side by side.
//!
//! The stream is kept apart from data memory: fetch indexes it by
//! `(pc - start_pc) / 4`. Running off its end is the normal way for a program
//! to finish; jumping in front of it or to a misaligned address is a fault.

use tracing::{debug, error, warn};

use crate::common::constants::WORD_BYTES;
use crate::common::error::{Condition, Fault, LoadError};
use crate::config::{Config, DecodePolicy};
use crate::core::Cpu;
use crate::isa::decode::decode;
use crate::isa::disasm;
use crate::sim::loader::{Program, ProgramInput};
use crate::sim::trace::{FaultRecord, RunReport, TraceStep};

/// What one call to `Simulator::advance` did.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Executed {
    index: usize,
    text: String,
    status: Option<String>,
}

/// Top-level simulator: CPU architectural state + program.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, console).
    pub cpu: Cpu,
    program: Program,
    config: Config,
    executed: u64,
}

impl Simulator {
    /// Creates a simulator in its reset state.
    ///
    /// # Arguments
    ///
    /// * `program` - The instruction stream, placed at `config.general.start_pc`.
    /// * `config` - Run configuration.
    pub fn new(program: Program, config: Config) -> Self {
        Self {
            cpu: Cpu::new(&config),
            program,
            config,
            executed: 0,
        }
    }

    /// Creates a simulator from an input record, with its data and register
    /// overrides applied.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`] raised while building the program or initial state.
    pub fn from_input(input: &ProgramInput, config: Config) -> Result<Self, LoadError> {
        let mut sim = Self::new(input.program()?, config);
        input.apply_data(&mut sim.cpu.memory)?;
        input.apply_registers(&mut sim.cpu.regs)?;
        Ok(sim)
    }

    /// Parses an input record and creates a simulator from it.
    ///
    /// # Errors
    ///
    /// [`LoadError::Json`] for malformed JSON, plus everything
    /// [`Simulator::from_input`] can return.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::Config;
    /// use mipsim_core::sim::Simulator;
    ///
    /// // li $v0, 1; li $a0, 42; syscall
    /// let json = r#"{ "text": ["24020001", "2404002a", "0000000c"] }"#;
    /// let mut sim = Simulator::from_json(json, Config::default()).unwrap();
    /// let report = sim.run();
    /// assert!(report.is_success());
    /// assert_eq!(report.stdout, "42");
    /// ```
    pub fn from_json(text: &str, config: Config) -> Result<Self, LoadError> {
        Self::from_input(&ProgramInput::from_json(text)?, config)
    }

    /// Returns the run configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the instruction stream.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Number of instructions executed so far.
    pub const fn executed(&self) -> u64 {
        self.executed
    }

    /// Returns `true` once the program has exited or `pc` has left the end
    /// of the stream.
    pub fn is_finished(&self) -> bool {
        self.cpu.halted || matches!(self.fetch_index(), Ok(None))
    }

    /// Locates the word at `pc`; `None` past the end of the stream.
    fn fetch_index(&self) -> Result<Option<usize>, Fault> {
        let pc = self.cpu.pc();
        let offset = pc
            .checked_sub(self.config.general.start_pc)
            .filter(|offset| offset % WORD_BYTES == 0)
            .ok_or(Fault::InstructionFetch { pc })?;
        let index = (offset / WORD_BYTES) as usize;
        Ok((index < self.program.len()).then_some(index))
    }

    /// Fetches, decodes and executes one instruction.
    ///
    /// Returns `Ok(None)` when there is nothing left to run.
    fn advance(&mut self) -> Result<Option<Executed>, Fault> {
        if self.cpu.halted {
            return Ok(None);
        }
        let Some(index) = self.fetch_index()? else {
            return Ok(None);
        };
        let limit = self.config.general.max_steps;
        if self.executed >= limit {
            return Err(Fault::StepLimit { limit });
        }

        let pc = self.cpu.pc();
        let word = self.program.word(index).unwrap_or_default();
        let naming = self.cpu.regs.naming();

        let executed = match decode(word) {
            Ok(inst) => {
                let text = disasm::disassemble(&inst, naming);
                debug!(pc, word, %text, "execute");
                let outcome = self.cpu.execute(&inst)?;
                Executed {
                    index,
                    text,
                    status: outcome.condition.as_ref().map(Condition::to_string),
                }
            }
            Err(err) => match self.config.general.decode_policy {
                DecodePolicy::Abort => return Err(err.into()),
                DecodePolicy::Skip => {
                    warn!(pc, %err, "skipping undecodable word");
                    self.cpu.regs.set_pc(pc.wrapping_add(WORD_BYTES));
                    Executed {
                        index,
                        text: disasm::disassemble_word(word, naming),
                        status: Some(err.to_string()),
                    }
                }
            },
        };
        self.executed += 1;
        Ok(Some(executed))
    }

    /// Builds the trace record for an executed instruction.
    fn record(&self, executed: Executed) -> TraceStep {
        TraceStep {
            hex: self
                .program
                .source(executed.index)
                .unwrap_or_default()
                .to_owned(),
            text: executed.text,
            mem: self.cpu.memory.snapshot(),
            regs: self.cpu.regs.snapshot(),
            stdout: self.cpu.console.clone(),
            status: executed.status,
        }
    }

    /// Executes one instruction and returns its trace record.
    ///
    /// Returns `Ok(None)` once the program has finished.
    ///
    /// # Errors
    ///
    /// The [`Fault`] raised by the instruction. The simulator state is left as
    /// it was before the step, so the fault can be inspected.
    pub fn step(&mut self) -> Result<Option<TraceStep>, Fault> {
        Ok(self.advance()?.map(|executed| self.record(executed)))
    }

    /// Runs until the program finishes or faults.
    ///
    /// Trace steps are collected only when `trace_instructions` is enabled;
    /// the final state is always reported.
    pub fn run(&mut self) -> RunReport {
        let trace = self.config.general.trace_instructions;
        let mut report = RunReport::default();

        loop {
            match self.advance() {
                Ok(Some(executed)) => {
                    if trace {
                        report.steps.push(self.record(executed));
                    }
                }
                Ok(None) => break,
                Err(fault) => {
                    let pc = self.cpu.pc();
                    error!(pc, %fault, "run terminated");
                    let hex = self
                        .fetch_index()
                        .ok()
                        .flatten()
                        .and_then(|index| self.program.source(index))
                        .map(str::to_owned);
                    report.fault = Some(FaultRecord { pc, hex, fault });
                    break;
                }
            }
        }

        report.executed = self.executed;
        report.exited = self.cpu.halted;
        report.stdout = self.cpu.console.clone();
        report.regs = self.cpu.regs.snapshot();
        report.mem = self.cpu.memory.snapshot();
        report
    }
}
