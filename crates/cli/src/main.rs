//! MIPS simulator CLI.
//!
//! This binary provides a single entry point for the simulator. It performs:
//! 1. **Run:** Load an instruction image and a data image, execute until halt, and report.
//! 2. **Disassemble:** Print the mnemonic for every word of a hex image.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mipsim_core::common::error::{MemoryRegion, SimError};
use mipsim_core::common::INSTRUCTION_MEMORY_WORDS;
use mipsim_core::isa::disasm::disassemble_with;
use mipsim_core::isa::DispatchTable;
use mipsim_core::sim::loader;
use mipsim_core::{Config, RunOutcome, Simulator};

/// Exit code for load or configuration failures.
const EXIT_LOAD_FAILURE: u8 = 1;
/// Exit code when the program never halted (ran off memory or hit the cap).
const EXIT_NOT_TERMINATED: u8 = 2;
/// Exit code for a data memory fault.
const EXIT_FAULT: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Functional simulator for a word-addressed MIPS subset",
    long_about = "Load a hex instruction image and a hex data image, run until halt, and dump state.\n\nExamples:\n  mipsim run\n  mipsim run -i prog.txt -d data.txt --registers --memory\n  mipsim disasm prog.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load both images and run until halt.
    Run {
        /// Instruction image, one hex word per line.
        #[arg(short, long, default_value = "instructions.txt")]
        instructions: PathBuf,

        /// Initial data memory image, one hex word per line.
        #[arg(short, long, default_value = "data_memory.txt")]
        data: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the register dump after the run.
        #[arg(long)]
        registers: bool,

        /// Print the data memory dump after the run.
        #[arg(long)]
        memory: bool,

        /// Print run statistics.
        #[arg(long)]
        stats: bool,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,

        /// Print the operands of every `sub` to stdout.
        #[arg(long)]
        trace_sub: bool,

        /// Stop after this many instructions.
        #[arg(long)]
        max_instructions: Option<u64>,
    },

    /// Disassemble a hex instruction image.
    Disasm {
        /// Image to disassemble.
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            instructions,
            data,
            config,
            registers,
            memory,
            stats,
            trace,
            trace_sub,
            max_instructions,
        } => {
            init_logging(trace);
            let opts = RunOptions {
                registers,
                memory,
                stats,
                trace,
                trace_sub,
                max_instructions,
            };
            match cmd_run(&instructions, &data, config.as_deref(), &opts) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("\n[!] FATAL: {e}");
                    ExitCode::from(EXIT_LOAD_FAILURE)
                }
            }
        }
        Commands::Disasm { path } => {
            init_logging(false);
            match cmd_disasm(&path) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("\n[!] FATAL: {e}");
                    ExitCode::from(EXIT_LOAD_FAILURE)
                }
            }
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default level.
fn init_logging(trace: bool) {
    let default = if trace { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Output and tracing switches for `run`.
#[derive(Debug)]
struct RunOptions {
    registers: bool,
    memory: bool,
    stats: bool,
    trace: bool,
    trace_sub: bool,
    max_instructions: Option<u64>,
}

/// Loads both images, runs to completion, and prints the requested reports.
fn cmd_run(
    instructions: &Path,
    data: &Path,
    config_path: Option<&Path>,
    opts: &RunOptions,
) -> Result<ExitCode, SimError> {
    let mut config = match config_path {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= opts.trace;
    config.general.trace_sub_operands |= opts.trace_sub;
    if opts.max_instructions.is_some() {
        config.execution.max_instructions = opts.max_instructions;
    }
    debug!(?config, "effective configuration");

    let mut sim = Simulator::from_files(&config, instructions, data)?;
    if config.general.trace_sub_operands {
        sim.cpu.set_sub_trace(|a, b| println!("{a}, {b}"));
    }

    let outcome = sim.run();
    let code = match &outcome {
        RunOutcome::Halted => ExitCode::SUCCESS,
        RunOutcome::ProgramNeverTerminated => {
            println!("ERROR: Program was never terminated");
            ExitCode::from(EXIT_NOT_TERMINATED)
        }
        RunOutcome::InstructionLimit(limit) => {
            println!("ERROR: Instruction limit of {limit} reached before halt");
            ExitCode::from(EXIT_NOT_TERMINATED)
        }
        RunOutcome::Fault(e) => {
            println!("ERROR: {e} (pc={:#x})", sim.cpu.pc);
            ExitCode::from(EXIT_FAULT)
        }
    };

    let stdout = io::stdout();
    if let Err(e) = write_reports(&sim, opts, &mut stdout.lock()) {
        eprintln!("[!] could not write report: {e}");
    }

    Ok(code)
}

/// Writes the dumps and statistics selected in `opts`.
fn write_reports<W: Write>(sim: &Simulator, opts: &RunOptions, out: &mut W) -> io::Result<()> {
    if opts.registers {
        sim.dump_registers(out)?;
    }
    if opts.memory {
        sim.dump_memory(out)?;
    }
    if opts.stats {
        sim.cpu.stats.report(out)?;
    }
    out.flush()
}

/// Prints `index: word  mnemonic` for every word of an image.
fn cmd_disasm(path: &Path) -> Result<(), SimError> {
    let words = loader::load_hex_file(path, MemoryRegion::Instruction, INSTRUCTION_MEMORY_WORDS)?;
    let table = DispatchTable::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, word) in words.iter().enumerate() {
        if writeln!(out, "{i:#06x}: {word:#010x}  {}", disassemble_with(&table, *word)).is_err() {
            break;
        }
    }
    Ok(())
}
