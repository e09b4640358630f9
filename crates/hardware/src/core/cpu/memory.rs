//! Data Memory Access Helpers.
//!
//! This module provides the interface between load/store instructions and
//! data memory. It performs the following:
//! 1. **Address Formation:** `rs + imm`, wrapping at 32 bits.
//! 2. **Bounds Policy:** Fault or wrap when the address is past the end.
//! 3. **Access:** Word reads and writes that never touch memory on a fault.

use super::Cpu;
use crate::common::error::ExecError;
use crate::config::OutOfBoundsPolicy;
use crate::isa::instruction::Decoded;

impl Cpu {
    /// Computes the effective word address of a load or store.
    #[inline]
    pub fn effective_address(&self, d: &Decoded) -> u32 {
        self.regs.read(d.rs).wrapping_add(d.imm)
    }

    /// Maps an effective address to a data memory index under the current policy.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::OutOfBoundsMemoryAccess`] when the address is past
    /// the end and the policy is [`OutOfBoundsPolicy::Fault`], or when data
    /// memory has zero capacity.
    pub fn data_index(&self, addr: u32) -> Result<usize, ExecError> {
        let capacity = self.system.dmem.capacity();
        let fault = ExecError::OutOfBoundsMemoryAccess {
            address: addr,
            capacity,
        };
        let index = addr as usize;
        match self.out_of_bounds {
            _ if index < capacity => Ok(index),
            OutOfBoundsPolicy::Wrap if capacity > 0 => Ok(index % capacity),
            _ => Err(fault),
        }
    }

    /// Reads a data word.
    ///
    /// # Errors
    ///
    /// See [`Cpu::data_index`].
    pub fn load_word(&self, addr: u32) -> Result<u32, ExecError> {
        let index = self.data_index(addr)?;
        Ok(self.system.dmem[index])
    }

    /// Writes a data word.
    ///
    /// # Errors
    ///
    /// See [`Cpu::data_index`]. Memory is unchanged on error.
    pub fn store_word(&mut self, addr: u32, value: u32) -> Result<(), ExecError> {
        let index = self.data_index(addr)?;
        let capacity = self.system.dmem.capacity();
        self.system
            .dmem
            .write(index, value)
            .ok_or(ExecError::OutOfBoundsMemoryAccess {
                address: addr,
                capacity,
            })
    }
}
