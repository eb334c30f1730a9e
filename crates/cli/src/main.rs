//! MIPS I decoder and emulator CLI.
//!
//! This binary is a thin single-file driver over `mipsim-core`. It performs:
//! 1. **Decode:** Disassemble a list of hex words (or the `text` of an input record).
//! 2. **Run:** Execute a JSON input record and print the run report as JSON.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mipsim_core::config::{Config, DecodePolicy, RegisterNaming};
use mipsim_core::isa::disasm;
use mipsim_core::sim::Simulator;
use mipsim_core::sim::loader::ProgramInput;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS I decoder, disassembler and emulator",
    long_about = "Decode hex instruction words or run a JSON program record.\n\nExamples:\n  mipsim decode words.txt\n  mipsim decode --numeric program.json\n  mipsim run program.json\n  mipsim run --no-trace --config run.json program.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Disassemble instruction words.
    Decode {
        /// One hex word per line (`#` comments allowed), or a JSON input record.
        file: PathBuf,

        /// Print numeric register names (`$8`) instead of symbolic ones (`$t0`).
        #[arg(long)]
        numeric: bool,

        /// Print a placeholder line for undecodable words and keep going.
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Execute a JSON input record and print the run report.
    Run {
        /// JSON input record (`text`, `data`, `config.regs`).
        file: PathBuf,

        /// Print numeric register names (`$8`) instead of symbolic ones (`$t0`).
        #[arg(long)]
        numeric: bool,

        /// Only report the final state, not every step.
        #[arg(long)]
        no_trace: bool,

        /// JSON emulator configuration (`general`, `memory`).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Decode {
            file,
            numeric,
            skip_invalid,
        } => cmd_decode(&file, naming(numeric), skip_invalid),
        Commands::Run {
            file,
            numeric,
            no_trace,
            config,
        } => cmd_run(&file, numeric, no_trace, config.as_deref()),
    };

    result.unwrap_or_else(|err| {
        error!(%err, "mipsim failed");
        ExitCode::FAILURE
    })
}

const fn naming(numeric: bool) -> RegisterNaming {
    if numeric {
        RegisterNaming::Numeric
    } else {
        RegisterNaming::Named
    }
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}

/// Returns the hex words of a listing file or of a JSON record's `text`.
fn words(contents: &str) -> Result<Vec<String>, String> {
    if contents.trim_start().starts_with('{') {
        return ProgramInput::from_json(contents)
            .map(|input| input.text)
            .map_err(|e| e.to_string());
    }
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect())
}

/// Prints the disassembly of every word in `file`.
fn cmd_decode(file: &Path, naming: RegisterNaming, skip_invalid: bool) -> Result<ExitCode, String> {
    let words = words(&read(file)?)?;
    let mut failed = false;

    for (line, word) in disasm::listing(&words, naming).into_iter().zip(&words) {
        match line {
            Ok(text) => println!("{text}"),
            Err(err) if skip_invalid => {
                warn!(%word, %err, "skipping undecodable word");
                println!("{}", disasm::placeholder(word));
                failed = true;
            }
            Err(err) => return Err(format!("{word}: {err}")),
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Runs the record in `file` and prints the report.
fn cmd_run(
    file: &Path,
    numeric: bool,
    no_trace: bool,
    config_path: Option<&Path>,
) -> Result<ExitCode, String> {
    let mut config = match config_path {
        Some(path) => Config::from_json(&read(path)?).map_err(|e| e.to_string())?,
        None => Config::default(),
    };
    if numeric {
        config.general.register_naming = RegisterNaming::Numeric;
    }
    if no_trace {
        config.general.trace_instructions = false;
    }
    if config.general.decode_policy == DecodePolicy::Skip {
        info!("undecodable words will be skipped");
    }

    let mut sim = Simulator::from_json(&read(file)?, config).map_err(|e| e.to_string())?;
    let report = sim.run();
    let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
    println!("{json}");

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
