//! Core processor implementation.
//!
//! This module contains the CPU: its architectural state, the execution
//! units, and the fetch-execute loop that ties them together.

/// Architecture-specific components (register file).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, Flow, RunOutcome};
