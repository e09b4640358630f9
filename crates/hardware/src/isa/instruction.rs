//! Instruction encoding and field extraction utilities.
//!
//! Provides bit extraction functions and the `Decoded` structure for the
//! three MIPS layouts:
//!
//! ```text
//! R-type: | opcode:6 | rs:5 | rt:5 | rd:5 | shamt:5 | funct:6 |
//! I-type: | opcode:6 | rs:5 | rt:5 |        immediate:16      |
//! J-type: | opcode:6 |              target:26                  |
//! ```

/// Bit mask for the opcode field (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift for the opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for a register index field (5 bits).
pub const REG_MASK: u32 = 0x1F;
/// Bit shift for the rs field (bits 21-25).
pub const RS_SHIFT: u32 = 21;
/// Bit shift for the rt field (bits 16-20).
pub const RT_SHIFT: u32 = 16;
/// Bit shift for the rd field (bits 11-15).
pub const RD_SHIFT: u32 = 11;
/// Bit mask for the shift amount field (5 bits).
pub const SHAMT_MASK: u32 = 0x1F;
/// Bit shift for the shift amount field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for the funct field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the immediate field (bits 0-15).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the jump target field (bits 0-25).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every field is zero-extended; the simulator never sign-extends immediates.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the second register field (bits 16-20).
    ///
    /// Source for R-type and stores, destination for I-type ALU ops and loads.
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the funct field (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate (bits 0-15), zero-extended.
    fn imm(&self) -> u32;

    /// Extracts the 26-bit jump target (bits 0-25), zero-extended.
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & SHAMT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Every field is populated regardless of layout; handlers read only the
/// fields their format defines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Primary opcode (bits 26-31).
    pub opcode: u32,
    /// First source register index.
    pub rs: usize,
    /// Second register index.
    pub rt: usize,
    /// R-type destination register index.
    pub rd: usize,
    /// Shift amount.
    pub shamt: u32,
    /// R-type function code.
    pub funct: u32,
    /// Zero-extended 16-bit immediate.
    pub imm: u32,
    /// Zero-extended 26-bit jump target, in words.
    pub target: u32,
}
