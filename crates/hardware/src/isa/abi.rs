//! MIPS Application Binary Interface (ABI) register names.
//!
//! Defines the conventional register names and the indices the simulator
//! gives special meaning to (`$v0` for the halt service, `$ra` for `jal`).

/// Register $zero (conventionally zero; not enforced by the simulator).
pub const REG_ZERO: usize = 0;
/// Register $v0 (return value / service number checked by halt).
pub const REG_V0: usize = 2;
/// Register $a0 (first argument).
pub const REG_A0: usize = 4;
/// Register $t0 (first temporary).
pub const REG_T0: usize = 8;
/// Register $s0 (first saved register).
pub const REG_S0: usize = 16;
/// Register $sp (stack pointer).
pub const REG_SP: usize = 29;
/// Register $ra (return address written by `jal`).
pub const REG_RA: usize = 31;

/// Display names for registers 0-31, in index order.
pub const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the display name for a register index, or `"$??"` when out of range.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}
