//! ALU logic and comparison operations.

use super::AluOp;

/// Executes a bitwise or comparison operation.
///
/// `Slt` compares as unsigned: register values are never reinterpreted as
/// two's complement. Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => u32::from(a < b),
        _ => 0,
    }
}
