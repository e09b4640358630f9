//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, field extraction,
//! decoding, the operation dispatch table, and the disassembler.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding into a structured `Decoded` form.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode and function code constants.
pub mod mips;

/// Declarative (opcode, funct) to operation dispatch table.
pub mod table;

pub use decode::decode;
pub use instruction::{Decoded, InstructionBits};
pub use table::{DispatchTable, InstClass, Op};
