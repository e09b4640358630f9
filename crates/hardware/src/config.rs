//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Memory capacities and execution policies matching the reference machine.
//! 2. **Structures:** General, memory, and execution sections.
//! 3. **Enums:** Out-of-bounds data access policy and PC advance policy.
//!
//! Configuration is read from JSON with [`Config::from_json_file`], or built
//! with `Config::default()`. Every field is optional in the JSON form.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Instruction memory capacity (4096 words).
    pub const INSTRUCTION_WORDS: usize = constants::INSTRUCTION_MEMORY_WORDS;

    /// Data memory capacity (1024 words).
    pub const DATA_WORDS: usize = constants::DATA_MEMORY_WORDS;
}

/// What a `lw`/`sw` does when its effective address is past the end of data memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfBoundsPolicy {
    /// Stop the run with an `OutOfBoundsMemoryAccess` error.
    #[default]
    Fault,
    /// Reduce the address modulo the data memory capacity.
    Wrap,
}

/// How the fetch loop moves the PC after an instruction that wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PcAdvance {
    /// Always add one after execution, so taken branches and jumps land one
    /// word past their nominal target.
    #[default]
    Legacy,
    /// Skip the trailing increment when the instruction redirected the PC.
    Exact,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{Config, OutOfBoundsPolicy, PcAdvance};
///
/// let json = r#"{
///     "memory": { "out_of_bounds": "wrap" },
///     "execution": { "pc_advance": "exact", "max_instructions": 10000 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.memory.out_of_bounds, OutOfBoundsPolicy::Wrap);
/// assert_eq!(config.memory.data_words, 1024);
/// assert_eq!(config.execution.pc_advance, PcAdvance::Exact);
/// assert_eq!(config.execution.max_instructions, Some(10000));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory capacities and access policy
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Fetch loop behavior
    #[serde(default)]
    pub execution: ExecutionConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid JSON or names
    /// an unknown policy.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction with its disassembly at debug level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Print the operands of every `sub` to stdout (installed by the front end)
    #[serde(default)]
    pub trace_sub_operands: bool,
}

/// Memory capacities and out-of-bounds behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Instruction memory capacity in words
    #[serde(default = "MemoryConfig::default_instruction_words")]
    pub instruction_words: usize,

    /// Data memory capacity in words
    #[serde(default = "MemoryConfig::default_data_words")]
    pub data_words: usize,

    /// Policy for load/store addresses past the end of data memory
    #[serde(default)]
    pub out_of_bounds: OutOfBoundsPolicy,
}

impl MemoryConfig {
    /// Returns the default instruction memory capacity.
    fn default_instruction_words() -> usize {
        defaults::INSTRUCTION_WORDS
    }

    /// Returns the default data memory capacity.
    fn default_data_words() -> usize {
        defaults::DATA_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            instruction_words: defaults::INSTRUCTION_WORDS,
            data_words: defaults::DATA_WORDS,
            out_of_bounds: OutOfBoundsPolicy::Fault,
        }
    }
}

/// Fetch loop settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionConfig {
    /// PC advance policy after control-flow instructions
    #[serde(default)]
    pub pc_advance: PcAdvance,

    /// Stop after this many instructions (None runs until halt or end of memory)
    #[serde(default)]
    pub max_instructions: Option<u64>,
}
