//! Execution units.
//!
//! The simulator is purely functional, so the only unit is the integer ALU.

/// Integer arithmetic, logic, and shift unit.
pub mod alu;
