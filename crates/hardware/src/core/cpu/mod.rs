//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, and the run flag.
//! 2. **Memory:** The instruction and data memories, via [`System`].
//! 3. **Dispatch:** The operation table, built once here.
//! 4. **Observability:** Statistics, instruction tracing, and the `sub` operand hook.

/// Fetch-execute loop and instruction semantics.
pub mod execution;

/// Data memory access with bounds checking.
pub mod memory;

use std::fmt;

use crate::config::{Config, OutOfBoundsPolicy, PcAdvance};
use crate::core::arch::gpr::Gpr;
use crate::isa::table::DispatchTable;
use crate::soc::System;
use crate::stats::SimStats;

pub use self::execution::{Flow, RunOutcome};

/// Callback receiving the two operands of every executed `sub`.
pub type SubTraceHook = Box<dyn FnMut(u32, u32)>;

/// Main CPU structure containing all processor state.
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Program Counter, as a word index into instruction memory.
    pub pc: u32,
    /// Instruction and data memories.
    pub system: System,
    /// Cleared by the halt instruction.
    pub running: bool,

    /// Enable per-instruction tracing.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
    /// PC advance policy after control-flow instructions.
    pub pc_advance: PcAdvance,
    /// Policy for data accesses past the end of data memory.
    pub out_of_bounds: OutOfBoundsPolicy,
    /// Optional cap on executed instructions.
    pub max_instructions: Option<u64>,

    table: DispatchTable,
    sub_hook: Option<SubTraceHook>,
}

impl Cpu {
    /// Creates a new CPU with the given system and configuration.
    ///
    /// Registers and PC start at zero and the CPU is running.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            pc: 0,
            system,
            running: true,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            pc_advance: config.execution.pc_advance,
            out_of_bounds: config.memory.out_of_bounds,
            max_instructions: config.execution.max_instructions,
            table: DispatchTable::new(),
            sub_hook: None,
        }
    }

    /// Creates a CPU with zero-filled memories sized by `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(System::new(config), config)
    }

    /// Returns the dispatch table in use.
    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    /// Installs a hook called with `(rs, rt)` each time `sub` executes.
    pub fn set_sub_trace(&mut self, hook: impl FnMut(u32, u32) + 'static) {
        self.sub_hook = Some(Box::new(hook));
    }

    /// Removes the `sub` hook.
    pub fn clear_sub_trace(&mut self) {
        self.sub_hook = None;
    }

    /// Returns true when the halt instruction has fired.
    pub fn is_halted(&self) -> bool {
        !self.running
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("pc", &self.pc)
            .field("running", &self.running)
            .field("regs", &self.regs)
            .field("pc_advance", &self.pc_advance)
            .field("out_of_bounds", &self.out_of_bounds)
            .field("max_instructions", &self.max_instructions)
            .field("sub_hook", &self.sub_hook.is_some())
            .finish_non_exhaustive()
    }
}
