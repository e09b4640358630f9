//! ALU shift operations.
//!
//! The shift amount is the 5-bit `shamt` field, so it is always below 32.
//! `Sra` is a zero-filling shift, identical to `Srl`.

use super::AluOp;

/// Mask applied to the shift amount.
const SHAMT_MASK: u32 = 0x1F;

/// Shifts `value` by `shamt`.
///
/// Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, value: u32, shamt: u32) -> u32 {
    let shamt = shamt & SHAMT_MASK;
    match op {
        AluOp::Sll => value << shamt,
        AluOp::Srl | AluOp::Sra => value >> shamt,
        _ => 0,
    }
}
