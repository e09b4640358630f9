//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used by the R-type and
//! immediate instructions. Every result is a `u32`, so wrapping to 32 bits
//! is implicit.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or, Nor, Slt
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, nor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

/// Operation selector for [`Alu::execute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise NOR.
    Nor,
    /// Unsigned set-less-than.
    Slt,
    /// Logical left shift.
    Sll,
    /// Logical right shift.
    Srl,
    /// Right shift that, like the reference machine, fills with zeros.
    Sra,
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (ignored by shifts)
    /// * `b`  - Second operand, or the value to shift
    /// * `shamt` - Shift amount (0-31; ignored by non-shifts)
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 2, 0), 1);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0, 0x8000_0001, 1), 2);
    /// ```
    #[inline]
    pub fn execute(op: AluOp, a: u32, b: u32, shamt: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Nor | AluOp::Slt => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, b, shamt),
        }
    }
}
