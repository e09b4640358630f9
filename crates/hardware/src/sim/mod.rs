//! Simulation utilities and program loading.
//!
//! Provides the hex image loader and the top-level [`Simulator`] that wires
//! configuration, loading, execution, and reporting together.

pub mod loader;

/// Top-level simulator driving a single CPU.
pub mod simulator;

pub use simulator::Simulator;
