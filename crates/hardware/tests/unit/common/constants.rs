//! # Constant Tests

use mipsim_core::common::constants::*;

#[test]
fn memory_capacities() {
    assert_eq!(INSTRUCTION_MEMORY_WORDS, 4096);
    assert_eq!(DATA_MEMORY_WORDS, 1024);
}

#[test]
fn special_words() {
    assert_eq!(NOP_INSTRUCTION, 0);
    assert_eq!(HALT_INSTRUCTION, 0xC);
    assert_eq!(HALT_SERVICE, 10);
}

#[test]
fn control_flow_constants() {
    assert_eq!(LINK_OFFSET, 4);
    assert_eq!(BRANCH_OFFSET_SHIFT, 2);
    assert_eq!(NUM_REGISTERS, 32);
}
