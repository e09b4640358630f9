//! System Components.
//!
//! This module organizes the storage that makes up the simulated machine:
//! the two disjoint word memories and the builder that sizes them from
//! configuration.

/// System builder for assembling the instruction and data memories.
pub mod builder;

/// Word-addressed memory implementation.
pub mod memory;

pub use builder::System;
pub use memory::WordMemory;
