//! MIPS subset simulator library.
//!
//! This crate implements a functional simulator for a word-addressed MIPS
//! subset with the following:
//! 1. **Core:** Register file, program counter, run flag, ALU, and the fetch-execute loop.
//! 2. **ISA:** Field extraction, decoding, the (opcode, funct) dispatch table, and a disassembler.
//! 3. **System:** Fixed-capacity instruction and data memories.
//! 4. **Simulation:** Hex image loader, configuration, and statistics collection.
//!
//! # Example
//!
//! ```
//! use mipsim_core::{Config, Cpu, RunOutcome};
//!
//! let mut cpu = Cpu::from_config(&Config::default());
//! cpu.system
//!     .load_program(&[
//!         0x2002_000A, // addi $v0, $zero, 10
//!         0x0000_000C, // halt
//!     ])
//!     .unwrap();
//! assert_eq!(cpu.run(), RunOutcome::Halted);
//! ```

/// Common types and constants (errors, capacities, special words).
pub mod common;
/// Simulator configuration (defaults, policies, JSON loading).
pub mod config;
/// CPU core (register file, ALU, execution loop, data access).
pub mod core;
/// Instruction set (fields, decode, dispatch table, ABI names, disassembly).
pub mod isa;
/// Hex image loader and top-level simulator.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memories, and stats.
pub use crate::core::{Cpu, RunOutcome};
/// Top-level simulator wrapping a CPU with file loading and dumps.
pub use crate::sim::Simulator;
/// Instruction and data memories; construct with `System::new`.
pub use crate::soc::System;
