//! Operation dispatch table.
//!
//! Maps a decoded (opcode, funct) pair to an [`Op`]. The table is built once
//! when the CPU is constructed and is read-only afterwards:
//! 1. **SPECIAL group:** opcode 0 is resolved through a 64-entry funct table.
//! 2. **Primary group:** every other opcode is resolved through a 64-entry opcode table.
//! 3. **Misses:** an empty slot means the encoding is unsupported.
//!
//! `slti` has no entry; see the crate's design notes.

use crate::isa::instruction::Decoded;
use crate::isa::mips::{funct, opcodes};

/// Number of slots in each table (both fields are 6 bits wide).
const TABLE_SIZE: usize = 64;

/// A supported operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// `rd = rs + rt`, wrapping.
    Add,
    /// `rd = rs & rt`.
    And,
    /// `rd = !(rs | rt)`.
    Nor,
    /// `rd = rs | rt`.
    Or,
    /// `rd = (rs < rt)`, unsigned.
    Slt,
    /// `rd = rt << shamt`.
    Sll,
    /// `rd = rt >> shamt`, logical despite the name.
    Sra,
    /// `rd = rt >> shamt`.
    Srl,
    /// `rd = rs - rt`, wrapping.
    Sub,
    /// `rt = rs + imm`, wrapping.
    Addi,
    /// `rt = rs & imm`.
    Andi,
    /// `rt = rs | imm`.
    Ori,
    /// `rt = data[rs + imm]`.
    Lw,
    /// `data[rs + imm] = rt`.
    Sw,
    /// Branch by `imm << 2` words when `rs == rt`.
    Beq,
    /// Branch by `imm << 2` words when `rs != rt`.
    Bne,
    /// `pc = target`.
    J,
    /// `ra = pc + 4; pc = target`.
    Jal,
}

/// Broad instruction category used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstClass {
    /// Register or immediate arithmetic, logic, and shifts.
    Alu,
    /// Data memory loads.
    Load,
    /// Data memory stores.
    Store,
    /// Conditional branches.
    Branch,
    /// Unconditional jumps.
    Jump,
}

impl Op {
    /// Every supported operation, in table order.
    pub const ALL: [Self; 18] = [
        Self::Add,
        Self::And,
        Self::Nor,
        Self::Or,
        Self::Slt,
        Self::Sll,
        Self::Sra,
        Self::Srl,
        Self::Sub,
        Self::Addi,
        Self::Andi,
        Self::Ori,
        Self::Lw,
        Self::Sw,
        Self::Beq,
        Self::Bne,
        Self::J,
        Self::Jal,
    ];

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::And => "and",
            Self::Nor => "nor",
            Self::Or => "or",
            Self::Slt => "slt",
            Self::Sll => "sll",
            Self::Sra => "sra",
            Self::Srl => "srl",
            Self::Sub => "sub",
            Self::Addi => "addi",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::J => "j",
            Self::Jal => "jal",
        }
    }

    /// Returns the statistics category of the operation.
    pub const fn class(self) -> InstClass {
        match self {
            Self::Lw => InstClass::Load,
            Self::Sw => InstClass::Store,
            Self::Beq | Self::Bne => InstClass::Branch,
            Self::J | Self::Jal => InstClass::Jump,
            _ => InstClass::Alu,
        }
    }

    /// Returns the (opcode, funct) key this operation is registered under.
    ///
    /// The funct component is `None` for operations outside the SPECIAL group.
    pub const fn key(self) -> (u32, Option<u32>) {
        match self {
            Self::Add => (opcodes::OP_SPECIAL, Some(funct::ADD)),
            Self::And => (opcodes::OP_SPECIAL, Some(funct::AND)),
            Self::Nor => (opcodes::OP_SPECIAL, Some(funct::NOR)),
            Self::Or => (opcodes::OP_SPECIAL, Some(funct::OR)),
            Self::Slt => (opcodes::OP_SPECIAL, Some(funct::SLT)),
            Self::Sll => (opcodes::OP_SPECIAL, Some(funct::SLL)),
            Self::Sra => (opcodes::OP_SPECIAL, Some(funct::SRA)),
            Self::Srl => (opcodes::OP_SPECIAL, Some(funct::SRL)),
            Self::Sub => (opcodes::OP_SPECIAL, Some(funct::SUB)),
            Self::Addi => (opcodes::OP_ADDI, None),
            Self::Andi => (opcodes::OP_ANDI, None),
            Self::Ori => (opcodes::OP_ORI, None),
            Self::Lw => (opcodes::OP_LW, None),
            Self::Sw => (opcodes::OP_SW, None),
            Self::Beq => (opcodes::OP_BEQ, None),
            Self::Bne => (opcodes::OP_BNE, None),
            Self::J => (opcodes::OP_J, None),
            Self::Jal => (opcodes::OP_JAL, None),
        }
    }
}

/// Two-level lookup table from encoding fields to operations.
#[derive(Clone, Debug)]
pub struct DispatchTable {
    special: [Option<Op>; TABLE_SIZE],
    primary: [Option<Op>; TABLE_SIZE],
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchTable {
    /// Builds the table from the keys declared by [`Op::key`].
    pub fn new() -> Self {
        let mut table = Self {
            special: [None; TABLE_SIZE],
            primary: [None; TABLE_SIZE],
        };
        for op in Op::ALL {
            match op.key() {
                (_, Some(f)) => table.special[f as usize] = Some(op),
                (opcode, None) => table.primary[opcode as usize] = Some(op),
            }
        }
        table
    }

    /// Resolves raw opcode and funct fields.
    ///
    /// Opcode 0 always resolves through the funct table, so a SPECIAL word
    /// with an unknown funct never falls through to the primary table.
    #[inline]
    pub fn resolve(&self, opcode: u32, funct: u32) -> Option<Op> {
        if opcode == opcodes::OP_SPECIAL {
            self.special.get(funct as usize).copied().flatten()
        } else {
            self.primary.get(opcode as usize).copied().flatten()
        }
    }

    /// Resolves a decoded instruction.
    #[inline]
    pub fn lookup(&self, d: &Decoded) -> Option<Op> {
        self.resolve(d.opcode, d.funct)
    }

    /// Number of operations registered in the table.
    pub fn len(&self) -> usize {
        self.special.iter().chain(self.primary.iter()).flatten().count()
    }

    /// Returns true when no operation is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
