use std::cell::RefCell;
use std::rc::Rc;

use mipsim_core::config::Config;
use mipsim_core::core::{Cpu, RunOutcome};

/// A CPU plus convenience accessors for driving short programs.
#[derive(Debug)]
pub struct TestContext {
    pub cpu: Cpu,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("warn")
            .try_init();
        Self {
            cpu: Cpu::from_config(config),
        }
    }

    /// Loads `words` into instruction memory starting at word 0.
    pub fn load_program(mut self, words: &[u32]) -> Self {
        self.cpu.system.load_program(words).unwrap();
        self
    }

    /// Loads `words` into data memory starting at word 0.
    pub fn load_data(mut self, words: &[u32]) -> Self {
        self.cpu.system.load_data(words).unwrap();
        self
    }

    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.cpu.regs.write(reg, val);
    }

    pub fn get_reg(&self, reg: usize) -> u32 {
        self.cpu.regs.read(reg)
    }

    pub fn data(&self, idx: usize) -> u32 {
        self.cpu.system.dmem.read(idx).unwrap()
    }

    pub fn run(&mut self) -> RunOutcome {
        self.cpu.run()
    }

    /// Executes a single instruction through the fetch loop.
    pub fn step(&mut self) -> Option<RunOutcome> {
        self.cpu.step()
    }

    /// Installs a `sub` hook and returns the shared list it appends to.
    pub fn capture_sub_operands(&mut self) -> Rc<RefCell<Vec<(u32, u32)>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        self.cpu
            .set_sub_trace(move |a, b| sink.borrow_mut().push((a, b)));
        seen
    }
}
