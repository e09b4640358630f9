//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, the `disasm` command, and test diagnostics.
//!
//! Immediates and targets are printed in hex and never sign-extended, which
//! matches how the simulator executes them.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x0109_5020); // add $t2, $t0, $t1
//! assert_eq!(text, "add $t2, $t0, $t1");
//! ```

use crate::common::constants::{HALT_INSTRUCTION, NOP_INSTRUCTION};
use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::table::{DispatchTable, Op};

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// The halt word is shown as `halt` whatever `$v0` holds at run time.
/// Unrecognised encodings render as `unknown 0x...`.
pub fn disassemble(inst: u32) -> String {
    disassemble_with(&DispatchTable::new(), inst)
}

/// Disassembles using a caller-owned table, avoiding a rebuild per call.
pub fn disassemble_with(table: &DispatchTable, inst: u32) -> String {
    if inst == NOP_INSTRUCTION {
        return "nop".to_string();
    }
    if inst == HALT_INSTRUCTION {
        return "halt".to_string();
    }

    let d = decode(inst);
    let Some(op) = table.lookup(&d) else {
        return format!("unknown {inst:#010x}");
    };
    let m = op.mnemonic();

    match op {
        Op::Add | Op::And | Op::Nor | Op::Or | Op::Slt | Op::Sub => format!(
            "{m} {}, {}, {}",
            reg_name(d.rd),
            reg_name(d.rs),
            reg_name(d.rt)
        ),
        Op::Sll | Op::Sra | Op::Srl => {
            format!("{m} {}, {}, {}", reg_name(d.rd), reg_name(d.rt), d.shamt)
        }
        Op::Addi | Op::Andi | Op::Ori => format!(
            "{m} {}, {}, {:#x}",
            reg_name(d.rt),
            reg_name(d.rs),
            d.imm
        ),
        Op::Lw | Op::Sw => format!("{m} {}, {:#x}({})", reg_name(d.rt), d.imm, reg_name(d.rs)),
        Op::Beq | Op::Bne => format!(
            "{m} {}, {}, {:#x}",
            reg_name(d.rs),
            reg_name(d.rt),
            d.imm
        ),
        Op::J | Op::Jal => format!("{m} {:#x}", d.target),
    }
}
