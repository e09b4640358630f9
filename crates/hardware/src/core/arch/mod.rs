//! Architectural state components.
//!
//! Holds the programmer-visible register file. The program counter and run
//! flag live directly on [`Cpu`](crate::core::Cpu).

/// General-purpose register file.
pub mod gpr;
