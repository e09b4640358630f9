//! Dispatch table coverage.

use mipsim_core::isa::decode::decode;
use mipsim_core::isa::mips::{funct, opcodes};
use mipsim_core::isa::table::{DispatchTable, InstClass, Op};
use rstest::rstest;

use crate::common::builder::instruction::*;

#[test]
fn table_holds_every_operation() {
    let table = DispatchTable::new();
    assert_eq!(table.len(), Op::ALL.len());
    assert!(!table.is_empty());
}

#[test]
fn every_key_resolves_to_its_operation() {
    let table = DispatchTable::new();
    for op in Op::ALL {
        let (opcode, f) = op.key();
        assert_eq!(table.resolve(opcode, f.unwrap_or(0)), Some(op), "{op:?}");
    }
}

#[rstest]
#[case(add(1, 2, 3), Op::Add)]
#[case(sub(1, 2, 3), Op::Sub)]
#[case(and(1, 2, 3), Op::And)]
#[case(or(1, 2, 3), Op::Or)]
#[case(nor(1, 2, 3), Op::Nor)]
#[case(slt(1, 2, 3), Op::Slt)]
#[case(sll(1, 2, 3), Op::Sll)]
#[case(srl(1, 2, 3), Op::Srl)]
#[case(sra(1, 2, 3), Op::Sra)]
#[case(addi(1, 2, 3), Op::Addi)]
#[case(andi(1, 2, 3), Op::Andi)]
#[case(ori(1, 2, 3), Op::Ori)]
#[case(lw(1, 2, 3), Op::Lw)]
#[case(sw(1, 2, 3), Op::Sw)]
#[case(beq(1, 2, 3), Op::Beq)]
#[case(bne(1, 2, 3), Op::Bne)]
#[case(j(3), Op::J)]
#[case(jal(3), Op::Jal)]
fn encoded_words_dispatch(#[case] word: u32, #[case] expected: Op) {
    let table = DispatchTable::default();
    assert_eq!(table.lookup(&decode(word)), Some(expected));
}

#[test]
fn unknown_special_funct_misses() {
    let table = DispatchTable::new();
    // funct 0x0C is the halt word's funct; it is not a table entry.
    assert_eq!(table.resolve(opcodes::OP_SPECIAL, 0x0C), None);
    assert_eq!(table.resolve(opcodes::OP_SPECIAL, 0x3F), None);
}

#[test]
fn special_funct_codes_do_not_leak_into_primary_group() {
    let table = DispatchTable::new();
    // Opcode 0x20 (lb) shares its value with funct ADD but is not supported.
    assert_eq!(table.resolve(funct::ADD, 0), None);
}

#[test]
fn slti_is_not_supported() {
    let table = DispatchTable::new();
    assert_eq!(table.resolve(0b001010, 0), None);
}

#[test]
fn primary_opcode_ignores_low_bits() {
    let table = DispatchTable::new();
    // addi with funct-looking low bits still resolves as addi.
    assert_eq!(table.lookup(&decode(addi(1, 2, 0x0022))), Some(Op::Addi));
}

#[rstest]
#[case(Op::Add, InstClass::Alu)]
#[case(Op::Sll, InstClass::Alu)]
#[case(Op::Ori, InstClass::Alu)]
#[case(Op::Lw, InstClass::Load)]
#[case(Op::Sw, InstClass::Store)]
#[case(Op::Beq, InstClass::Branch)]
#[case(Op::Bne, InstClass::Branch)]
#[case(Op::J, InstClass::Jump)]
#[case(Op::Jal, InstClass::Jump)]
fn operation_classes(#[case] op: Op, #[case] class: InstClass) {
    assert_eq!(op.class(), class);
}
