//! System construction and top-level `System` type.
//!
//! This module builds the machine's storage from configuration. It performs:
//! 1. **Sizing:** Allocates instruction and data memory at the configured capacities.
//! 2. **Loading:** Populates either memory from a word image before execution.

use crate::common::error::{LoadError, MemoryRegion};
use crate::config::Config;
use crate::soc::memory::WordMemory;

/// Top-level system instance holding the two disjoint memories.
#[derive(Clone, Debug)]
pub struct System {
    /// Instruction memory, indexed by the program counter.
    pub imem: WordMemory,
    /// Data memory, indexed by load/store effective addresses.
    pub dmem: WordMemory,
}

impl System {
    /// Builds a zero-filled system from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            imem: WordMemory::new(MemoryRegion::Instruction, config.memory.instruction_words),
            dmem: WordMemory::new(MemoryRegion::Data, config.memory.data_words),
        }
    }

    /// Loads a program image into instruction memory starting at word 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::CapacityExceeded`] if the image is larger than
    /// instruction memory; nothing is written in that case.
    pub fn load_program(&mut self, words: &[u32]) -> Result<(), LoadError> {
        self.imem.load(words)
    }

    /// Loads an initial data image into data memory starting at word 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::CapacityExceeded`] if the image is larger than
    /// data memory; nothing is written in that case.
    pub fn load_data(&mut self, words: &[u32]) -> Result<(), LoadError> {
        self.dmem.load(words)
    }
}
