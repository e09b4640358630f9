//! Main Execution Loop.
//!
//! This module implements the fetch-execute cycle of the CPU. It performs the following:
//! 1. **Special Words:** Recognises the no-op and halt words before decoding.
//! 2. **Dispatch:** Resolves the decoded word through the dispatch table and applies its semantics.
//! 3. **PC Advance:** Adds one to the PC after every instruction (see [`PcAdvance`]).
//! 4. **Termination:** Stops on halt, on running off instruction memory, on an
//!    instruction cap, or on a data memory fault.

use tracing::{debug, error, info, warn};

use super::Cpu;
use crate::common::constants::{
    BRANCH_OFFSET_SHIFT, HALT_INSTRUCTION, HALT_SERVICE, LINK_OFFSET, NOP_INSTRUCTION,
};
use crate::common::error::ExecError;
use crate::config::PcAdvance;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::abi::{REG_RA, REG_V0};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble_with;
use crate::isa::instruction::Decoded;
use crate::isa::table::Op;

/// What an executed instruction did to the PC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// The PC was left alone.
    Next,
    /// The instruction wrote the PC (taken branch or jump).
    Redirect,
}

/// Why a run stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The halt instruction fired.
    Halted,
    /// The PC ran past the end of instruction memory while still running.
    ProgramNeverTerminated,
    /// The configured instruction cap was reached.
    InstructionLimit(u64),
    /// A data access faulted; the PC still points at the faulting instruction.
    Fault(ExecError),
}

impl RunOutcome {
    /// Returns true for a normal halt.
    pub fn is_halted(&self) -> bool {
        matches!(self, Self::Halted)
    }
}

impl Cpu {
    /// Runs until the machine halts or a stop condition is met.
    pub fn run(&mut self) -> RunOutcome {
        loop {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
    }

    /// Fetches, executes, and retires one instruction.
    ///
    /// Returns `None` while the machine should keep running, or the reason it
    /// stopped. Unsupported words are logged and skipped.
    pub fn step(&mut self) -> Option<RunOutcome> {
        if !self.running {
            return Some(RunOutcome::Halted);
        }
        if let Some(limit) = self.max_instructions
            && self.stats.instructions_retired >= limit
        {
            warn!(limit, pc = self.pc, "instruction limit reached");
            return Some(RunOutcome::InstructionLimit(limit));
        }
        let Some(inst) = self.system.imem.read(self.pc as usize) else {
            error!(pc = self.pc, "Program was never terminated");
            return Some(RunOutcome::ProgramNeverTerminated);
        };

        if self.trace {
            debug!(
                pc = self.pc,
                "{inst:#010x}  {}",
                disassemble_with(&self.table, inst)
            );
        }

        self.stats.instructions_retired += 1;
        let flow = match self.execute(inst) {
            Ok(flow) => flow,
            Err(ExecError::UnsupportedInstruction(raw)) => {
                warn!(pc = self.pc, "Unsupported instruction: {raw:#x}");
                Flow::Next
            }
            Err(e) => {
                error!(pc = self.pc, "{e}");
                return Some(RunOutcome::Fault(e));
            }
        };

        if !(self.pc_advance == PcAdvance::Exact && flow == Flow::Redirect) {
            self.pc = self.pc.wrapping_add(1);
        }

        if self.running {
            None
        } else {
            info!(
                instructions = self.stats.instructions_retired,
                "program halted"
            );
            Some(RunOutcome::Halted)
        }
    }

    /// Applies the semantics of one instruction word.
    ///
    /// The PC is not advanced here; the fetch loop does that. Taken branches
    /// and jumps write the PC and report [`Flow::Redirect`].
    ///
    /// # Errors
    ///
    /// - [`ExecError::UnsupportedInstruction`] when the word has no table entry.
    /// - [`ExecError::OutOfBoundsMemoryAccess`] when a load or store faults;
    ///   no register or memory is modified.
    pub fn execute(&mut self, inst: u32) -> Result<Flow, ExecError> {
        if inst == NOP_INSTRUCTION {
            self.stats.inst_nop += 1;
            return Ok(Flow::Next);
        }
        if inst == HALT_INSTRUCTION && self.regs.read(REG_V0) == HALT_SERVICE {
            self.running = false;
            return Ok(Flow::Next);
        }

        let d = decode(inst);
        let Some(op) = self.table.lookup(&d) else {
            self.stats.unsupported += 1;
            return Err(ExecError::UnsupportedInstruction(inst));
        };
        self.stats.record(op.class());

        match op {
            Op::Add => self.exec_r(&d, AluOp::Add),
            Op::And => self.exec_r(&d, AluOp::And),
            Op::Nor => self.exec_r(&d, AluOp::Nor),
            Op::Or => self.exec_r(&d, AluOp::Or),
            Op::Slt => self.exec_r(&d, AluOp::Slt),
            Op::Sll => self.exec_r(&d, AluOp::Sll),
            Op::Sra => self.exec_r(&d, AluOp::Sra),
            Op::Srl => self.exec_r(&d, AluOp::Srl),
            Op::Sub => {
                let (a, b) = (self.regs.read(d.rs), self.regs.read(d.rt));
                debug!(target: "mipsim::sub", rs = a, rt = b, "sub operands");
                if let Some(hook) = self.sub_hook.as_mut() {
                    hook(a, b);
                }
                self.exec_r(&d, AluOp::Sub);
            }
            Op::Addi => self.exec_i(&d, AluOp::Add),
            Op::Andi => self.exec_i(&d, AluOp::And),
            Op::Ori => self.exec_i(&d, AluOp::Or),
            Op::Lw => {
                let value = self.load_word(self.effective_address(&d))?;
                self.regs.write(d.rt, value);
            }
            Op::Sw => {
                self.store_word(self.effective_address(&d), self.regs.read(d.rt))?;
            }
            Op::Beq | Op::Bne => {
                let equal = self.regs.read(d.rs) == self.regs.read(d.rt);
                if equal == (op == Op::Beq) {
                    self.stats.branches_taken += 1;
                    self.pc = self.pc.wrapping_add(d.imm << BRANCH_OFFSET_SHIFT);
                    return Ok(Flow::Redirect);
                }
            }
            Op::J => {
                self.pc = d.target;
                return Ok(Flow::Redirect);
            }
            Op::Jal => {
                self.regs.write(REG_RA, self.pc.wrapping_add(LINK_OFFSET));
                self.pc = d.target;
                return Ok(Flow::Redirect);
            }
        }
        Ok(Flow::Next)
    }

    /// Register-register form: `rd = rs op rt`, or `rd = rt shift shamt`.
    #[inline]
    fn exec_r(&mut self, d: &Decoded, op: AluOp) {
        let result = Alu::execute(op, self.regs.read(d.rs), self.regs.read(d.rt), d.shamt);
        self.regs.write(d.rd, result);
    }

    /// Register-immediate form: `rt = rs op imm`, with `imm` zero-extended.
    #[inline]
    fn exec_i(&mut self, d: &Decoded, op: AluOp) {
        let result = Alu::execute(op, self.regs.read(d.rs), d.imm, 0);
        self.regs.write(d.rt, result);
    }
}
