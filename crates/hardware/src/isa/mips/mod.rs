//! MIPS integer subset.
//!
//! Encodings of the primary opcodes (bits 31-26) and of the `SPECIAL`
//! function codes (bits 5-0) understood by the dispatch table.

/// Function codes for the `SPECIAL` (opcode 0) R-type group.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;
