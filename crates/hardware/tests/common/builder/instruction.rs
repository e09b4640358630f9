//! Instruction encoders.
//!
//! Raw field packers (`r_type`, `i_type`, `j_type`) plus one helper per
//! supported mnemonic, so tests read like assembly.

use mipsim_core::isa::mips::{funct, opcodes::*};

/// Packs an R-type word.
pub fn r_type(rs: usize, rt: usize, rd: usize, shamt: u32, funct: u32) -> u32 {
    (OP_SPECIAL << 26)
        | ((rs as u32 & 0x1F) << 21)
        | ((rt as u32 & 0x1F) << 16)
        | ((rd as u32 & 0x1F) << 11)
        | ((shamt & 0x1F) << 6)
        | (funct & 0x3F)
}

/// Packs an I-type word.
pub fn i_type(opcode: u32, rs: usize, rt: usize, imm: u32) -> u32 {
    ((opcode & 0x3F) << 26)
        | ((rs as u32 & 0x1F) << 21)
        | ((rt as u32 & 0x1F) << 16)
        | (imm & 0xFFFF)
}

/// Packs a J-type word.
pub fn j_type(opcode: u32, target: u32) -> u32 {
    ((opcode & 0x3F) << 26) | (target & 0x03FF_FFFF)
}

pub fn add(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::ADD)
}

pub fn sub(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::SUB)
}

pub fn and(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::AND)
}

pub fn or(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::OR)
}

pub fn nor(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::NOR)
}

pub fn slt(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::SLT)
}

pub fn sll(rd: usize, rt: usize, shamt: u32) -> u32 {
    r_type(0, rt, rd, shamt, funct::SLL)
}

pub fn srl(rd: usize, rt: usize, shamt: u32) -> u32 {
    r_type(0, rt, rd, shamt, funct::SRL)
}

pub fn sra(rd: usize, rt: usize, shamt: u32) -> u32 {
    r_type(0, rt, rd, shamt, funct::SRA)
}

pub fn addi(rt: usize, rs: usize, imm: u32) -> u32 {
    i_type(OP_ADDI, rs, rt, imm)
}

pub fn andi(rt: usize, rs: usize, imm: u32) -> u32 {
    i_type(OP_ANDI, rs, rt, imm)
}

pub fn ori(rt: usize, rs: usize, imm: u32) -> u32 {
    i_type(OP_ORI, rs, rt, imm)
}

pub fn lw(rt: usize, rs: usize, imm: u32) -> u32 {
    i_type(OP_LW, rs, rt, imm)
}

pub fn sw(rt: usize, rs: usize, imm: u32) -> u32 {
    i_type(OP_SW, rs, rt, imm)
}

pub fn beq(rs: usize, rt: usize, imm: u32) -> u32 {
    i_type(OP_BEQ, rs, rt, imm)
}

pub fn bne(rs: usize, rt: usize, imm: u32) -> u32 {
    i_type(OP_BNE, rs, rt, imm)
}

pub fn j(target: u32) -> u32 {
    j_type(OP_J, target)
}

pub fn jal(target: u32) -> u32 {
    j_type(OP_JAL, target)
}

/// `addi $v0, $zero, 10` followed by the halt word.
pub fn halt_sequence() -> [u32; 2] {
    [addi(2, 0, 10), 0x0000_000C]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_matches_assembler_output() {
        // add $t2, $t0, $t1
        assert_eq!(add(10, 8, 9), 0x0109_5020);
    }

    #[test]
    fn addi_matches_assembler_output() {
        // addi $t0, $zero, 5
        assert_eq!(addi(8, 0, 5), 0x2008_0005);
    }

    #[test]
    fn jal_packs_target() {
        assert_eq!(jal(0x10), 0x0C00_0010);
    }
}
