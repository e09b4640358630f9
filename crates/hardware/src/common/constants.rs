//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Default capacities of the instruction and data memories.
//! 2. **Instruction Constants:** The special words recognised before decoding.
//! 3. **Register Constants:** The register count and word width.

/// Default capacity of instruction memory, in words.
pub const INSTRUCTION_MEMORY_WORDS: usize = 4096;

/// Default capacity of data memory, in words.
pub const DATA_MEMORY_WORDS: usize = 1024;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Encoding of the `syscall`-style halt word.
///
/// Only halts when `$v0` holds [`HALT_SERVICE`]; otherwise it decodes as an
/// ordinary (unsupported) R-type word.
pub const HALT_INSTRUCTION: u32 = 0x0000_000C;

/// Value `$v0` must hold for [`HALT_INSTRUCTION`] to stop the machine.
pub const HALT_SERVICE: u32 = 10;

/// Encoding of the canonical no-op.
pub const NOP_INSTRUCTION: u32 = 0;

/// Amount `jal` adds to the PC when forming the return address.
pub const LINK_OFFSET: u32 = 4;

/// Left shift applied to a branch immediate before it is added to the PC.
pub const BRANCH_OFFSET_SHIFT: u32 = 2;
