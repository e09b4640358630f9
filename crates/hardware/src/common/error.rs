//! Load, configuration, and execution error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Load Errors:** Unreadable files, malformed hex lines, and oversized images.
//! 2. **Execution Errors:** Unsupported encodings and out-of-range data accesses.
//! 3. **Configuration Errors:** Unreadable or unparsable JSON configuration.
//! 4. **Aggregation:** A single `SimError` for front ends that drive the whole flow.

use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two disjoint memories an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryRegion {
    /// Instruction memory, indexed by the program counter.
    Instruction,
    /// Data memory, indexed by load/store effective addresses.
    Data,
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instruction => write!(f, "instruction"),
            Self::Data => write!(f, "data"),
        }
    }
}

/// Errors raised while reading a memory image into the simulator.
///
/// All of these are fatal: loading aborts and the memory keeps its previous
/// contents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened or read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line is not a valid 32-bit hexadecimal value.
    #[error("line {line}: '{text}' is not a valid hexadecimal word")]
    MalformedInput {
        /// 1-based line number of the offending line.
        line: usize,
        /// The line as it appeared in the source, trimmed.
        text: String,
        /// Parser failure.
        #[source]
        source: ParseIntError,
    },

    /// More words were supplied than the target memory holds.
    #[error("{supplied} words supplied but {region} memory holds only {capacity}")]
    CapacityExceeded {
        /// Target memory.
        region: MemoryRegion,
        /// Number of words offered.
        supplied: usize,
        /// Capacity of the target memory, in words.
        capacity: usize,
    },
}

/// Errors raised while executing a single instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The (opcode, funct) pair has no entry in the dispatch table.
    ///
    /// Non-fatal: the fetch loop logs it and moves on.
    #[error("unsupported instruction {0:#x}")]
    UnsupportedInstruction(u32),

    /// A `lw`/`sw` effective address fell outside data memory.
    #[error("data memory access at word {address:#x} is outside capacity {capacity}")]
    OutOfBoundsMemoryAccess {
        /// Effective word address computed by the instruction.
        address: u32,
        /// Capacity of data memory, in words.
        capacity: usize,
    },
}

/// Errors raised while reading a JSON configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level error for front ends that configure, load, and run in one go.
#[derive(Debug, Error)]
pub enum SimError {
    /// Loading a memory image failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Reading the configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
