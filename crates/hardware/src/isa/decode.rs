//! MIPS Instruction Decoder.
//!
//! Splits a raw 32-bit word into the fields of a [`Decoded`]. Decoding is
//! total: every word decodes, and whether the result names a supported
//! operation is the dispatch table's concern.

use crate::isa::instruction::{Decoded, InstructionBits};

/// Decodes a raw instruction word.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::decode;
///
/// // addi $t0, $zero, 5
/// let d = decode(0x2008_0005);
/// assert_eq!(d.opcode, 8);
/// assert_eq!(d.rs, 0);
/// assert_eq!(d.rt, 8);
/// assert_eq!(d.imm, 5);
/// ```
#[inline]
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        shamt: inst.shamt(),
        funct: inst.funct(),
        imm: inst.imm(),
        target: inst.target(),
    }
}
