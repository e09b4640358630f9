//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Memory capacities and the special halt/no-op words.
//! 2. **Error Handling:** Load-time and execution-time error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for loading, configuration, and execution.
pub mod error;

pub use constants::{DATA_MEMORY_WORDS, INSTRUCTION_MEMORY_WORDS};
pub use error::{ConfigError, ExecError, LoadError, MemoryRegion, SimError};
