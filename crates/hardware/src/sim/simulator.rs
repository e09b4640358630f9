//! Simulator: owns the CPU and drives a complete run.
//!
//! Wraps configuration, image loading, the fetch-execute loop, and the
//! register and memory dumps behind one type, so front ends only deal with
//! paths and outcomes.

use std::io::{self, Write};
use std::path::Path;

use crate::common::error::LoadError;
use crate::config::Config;
use crate::core::{Cpu, RunOutcome};
use crate::sim::loader;
use crate::soc::System;

/// Top-level simulator: CPU architectural state plus memories.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memories, stats).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a new simulator with zero-filled memories.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(System::new(config), config),
        }
    }

    /// Creates a simulator and loads both images from disk.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] from either file.
    pub fn from_files(
        config: &Config,
        instructions: impl AsRef<Path>,
        data: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let mut sim = Self::new(config);
        sim.load_instructions(instructions)?;
        sim.load_data_memory(data)?;
        Ok(sim)
    }

    /// Loads the instruction image file into instruction memory.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file is unreadable, malformed, or too large.
    pub fn load_instructions(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let imem = &self.cpu.system.imem;
        let words = loader::load_hex_file(path, imem.region(), imem.capacity())?;
        self.cpu.system.load_program(&words)
    }

    /// Loads the data image file into data memory.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file is unreadable, malformed, or too large.
    pub fn load_data_memory(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let dmem = &self.cpu.system.dmem;
        let words = loader::load_hex_file(path, dmem.region(), dmem.capacity())?;
        self.cpu.system.load_data(&words)
    }

    /// Runs the program to completion.
    pub fn run(&mut self) -> RunOutcome {
        self.cpu.run()
    }

    /// Writes the register dump.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn dump_registers<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.cpu.regs.dump(out)
    }

    /// Writes the data memory dump.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn dump_memory<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.cpu.system.dmem.dump(out)
    }
}
