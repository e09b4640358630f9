//! Loads and stores, including both out-of-bounds policies.

use mipsim_core::RunOutcome;
use mipsim_core::common::ExecError;
use mipsim_core::config::{Config, OutOfBoundsPolicy};
use mipsim_core::isa::abi::{REG_T0, REG_ZERO};

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

const T1: usize = REG_T0 + 1;

fn wrapping() -> Config {
    let mut config = Config::default();
    config.memory.out_of_bounds = OutOfBoundsPolicy::Wrap;
    config
}

#[test]
fn sw_then_lw_round_trips() {
    let mut ctx = TestContext::new().load_program(&[
        addi(REG_T0, 0, 42),
        sw(REG_T0, REG_ZERO, 5),
        lw(T1, REG_ZERO, 5),
    ]);
    for _ in 0..3 {
        assert_eq!(ctx.step(), None);
    }
    assert_eq!(ctx.data(5), 42);
    assert_eq!(ctx.get_reg(T1), 42);
    assert_eq!(ctx.cpu.stats.inst_load, 1);
    assert_eq!(ctx.cpu.stats.inst_store, 1);
}

#[test]
fn effective_address_is_base_plus_offset() {
    let mut ctx = TestContext::new()
        .load_program(&[lw(T1, REG_T0, 3)])
        .load_data(&[0, 0, 0, 0, 0, 0, 0, 99]);
    ctx.set_reg(REG_T0, 4);
    ctx.step();
    assert_eq!(ctx.get_reg(T1), 99);
}

#[test]
fn last_data_word_is_addressable() {
    let mut ctx = TestContext::new().load_program(&[sw(REG_T0, REG_ZERO, 1023)]);
    ctx.set_reg(REG_T0, 7);
    assert_eq!(ctx.step(), None);
    assert_eq!(ctx.data(1023), 7);
}

#[test]
fn lw_past_end_faults_without_side_effects() {
    let mut ctx = TestContext::new().load_program(&[addi(T1, 0, 1), lw(REG_T0, REG_ZERO, 0x400)]);
    let outcome = ctx.run();
    assert_eq!(
        outcome,
        RunOutcome::Fault(ExecError::OutOfBoundsMemoryAccess {
            address: 0x400,
            capacity: 1024,
        })
    );
    assert_eq!(ctx.cpu.pc, 1);
    assert_eq!(ctx.get_reg(REG_T0), 0);
    assert!(!outcome.is_halted());
}

#[test]
fn sw_past_end_leaves_memory_untouched() {
    let mut ctx = TestContext::new().load_program(&[sw(REG_T0, T1, 0)]);
    ctx.set_reg(REG_T0, 0xAAAA);
    ctx.set_reg(T1, 0xFFFF_FFFF);
    assert!(matches!(ctx.run(), RunOutcome::Fault(_)));
    assert!(ctx.cpu.system.dmem.as_slice().iter().all(|&w| w == 0));
    assert_eq!(ctx.cpu.system.dmem.high_water(), 0);
}

#[test]
fn effective_address_wraps_at_32_bits() {
    // 0xFFFF_FFFF + 2 wraps to word 1.
    let mut ctx = TestContext::new()
        .load_program(&[lw(T1, REG_T0, 2)])
        .load_data(&[0, 55]);
    ctx.set_reg(REG_T0, 0xFFFF_FFFF);
    assert_eq!(ctx.step(), None);
    assert_eq!(ctx.get_reg(T1), 55);
}

#[test]
fn wrap_policy_reduces_modulo_capacity() {
    let mut ctx = TestContext::with_config(&wrapping())
        .load_program(&[lw(T1, REG_ZERO, 1025), sw(T1, REG_ZERO, 2050)])
        .load_data(&[0, 77]);
    ctx.step();
    assert_eq!(ctx.get_reg(T1), 77);
    ctx.step();
    assert_eq!(ctx.data(2), 77);
}

#[test]
fn data_index_policy() {
    let ctx = TestContext::with_config(&wrapping());
    assert_eq!(ctx.cpu.data_index(10), Ok(10));
    assert_eq!(ctx.cpu.data_index(1024), Ok(0));

    let ctx = TestContext::new();
    assert_eq!(ctx.cpu.data_index(1023), Ok(1023));
    assert!(ctx.cpu.data_index(1024).is_err());
}

#[test]
fn wrap_with_empty_data_memory_still_faults() {
    let mut config = wrapping();
    config.memory.data_words = 0;
    let ctx = TestContext::with_config(&config);
    assert_eq!(
        ctx.cpu.data_index(0),
        Err(ExecError::OutOfBoundsMemoryAccess {
            address: 0,
            capacity: 0,
        })
    );
}
