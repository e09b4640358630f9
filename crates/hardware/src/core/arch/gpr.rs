//! MIPS General-Purpose Register File.
//!
//! This module implements the register file. It performs the following:
//! 1. **Storage:** Maintains 32 unsigned 32-bit registers (`$zero`-`$ra`).
//! 2. **No Zero Hardwiring:** Register 0 stores whatever is written to it.
//! 3. **Debugging:** Provides a named dump of the complete register state.

use std::io::{self, Write};

use crate::common::constants::NUM_REGISTERS;
use crate::isa::abi::reg_name;

/// General-Purpose Register file.
///
/// Contains 32 registers. Unlike hardware MIPS, `$zero` is an ordinary
/// register here: writes to it are kept and later reads observe them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Decoded fields are always in range.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Returns all register values in index order.
    pub fn as_array(&self) -> &[u32; NUM_REGISTERS] {
        &self.regs
    }

    /// Iterates over `(name, value)` pairs in index order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.regs.iter().enumerate().map(|(i, &v)| (reg_name(i), v))
    }

    /// Writes `<name>: <decimal value>` for every register.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Registers:")?;
        for (name, value) in self.named() {
            writeln!(out, "{name}: {value}")?;
        }
        Ok(())
    }
}
