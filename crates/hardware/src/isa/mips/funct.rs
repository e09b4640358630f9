//! MIPS `SPECIAL` Function Codes.
//!
//! Defines the funct field (bits 5-0) values for opcode 0.

/// Shift Left Logical.
pub const SLL: u32 = 0b000000;

/// Shift Right Logical.
pub const SRL: u32 = 0b000010;

/// Shift Right Arithmetic (executed as a logical shift).
pub const SRA: u32 = 0b000011;

/// Add.
pub const ADD: u32 = 0b100000;

/// Subtract.
pub const SUB: u32 = 0b100010;

/// Bitwise AND.
pub const AND: u32 = 0b100100;

/// Bitwise OR.
pub const OR: u32 = 0b100101;

/// Bitwise NOR.
pub const NOR: u32 = 0b100111;

/// Set on Less Than (unsigned comparison).
pub const SLT: u32 = 0b101010;
