//! MIPS Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26) for the supported instructions.

/// Register-register group; the operation is selected by the funct field.
pub const OP_SPECIAL: u32 = 0b000000;

/// Jump (J).
pub const OP_J: u32 = 0b000010;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b000011;

/// Branch on Equal (BEQ).
pub const OP_BEQ: u32 = 0b000100;

/// Branch on Not Equal (BNE).
pub const OP_BNE: u32 = 0b000101;

/// Add Immediate (ADDI).
pub const OP_ADDI: u32 = 0b001000;

/// AND Immediate (ANDI).
pub const OP_ANDI: u32 = 0b001100;

/// OR Immediate (ORI).
pub const OP_ORI: u32 = 0b001101;

/// Load Word (LW).
pub const OP_LW: u32 = 0b100011;

/// Store Word (SW).
pub const OP_SW: u32 = 0b101011;
