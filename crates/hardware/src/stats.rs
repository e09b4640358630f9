//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Throughput:** Retired instructions and host execution time.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump, nop).
//! 3. **Control flow:** Taken branches.
//! 4. **Anomalies:** Unsupported encodings skipped by the fetch loop.

use std::io::{self, Write};
use std::time::Instant;

use crate::isa::table::InstClass;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of words fetched and executed, including nops, halts, and skipped words.
    pub instructions_retired: u64,

    /// Count of ALU (arithmetic, logic, shift) instructions.
    pub inst_alu: u64,
    /// Count of `lw` instructions.
    pub inst_load: u64,
    /// Count of `sw` instructions.
    pub inst_store: u64,
    /// Count of conditional branches.
    pub inst_branch: u64,
    /// Count of `j`/`jal` instructions.
    pub inst_jump: u64,
    /// Count of no-op words.
    pub inst_nop: u64,

    /// Number of conditional branches whose condition held.
    pub branches_taken: u64,
    /// Number of words with no dispatch table entry.
    pub unsupported: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_nop: 0,
            branches_taken: 0,
            unsupported: 0,
        }
    }
}

impl SimStats {
    /// Records one executed operation of the given class.
    #[inline]
    pub fn record(&mut self, class: InstClass) {
        match class {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Branch => self.inst_branch += 1,
            InstClass::Jump => self.inst_jump += 1,
        }
    }

    /// Writes the statistics report.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;
        let kips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        writeln!(out, "\n==========================================================")?;
        writeln!(out, "MIPS SIMULATION STATISTICS")?;
        writeln!(out, "==========================================================")?;
        writeln!(out, "host_seconds             {seconds:.4} s")?;
        writeln!(out, "sim_insts                {}", self.instructions_retired)?;
        writeln!(out, "sim_kips                 {kips:.2}")?;
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "INSTRUCTION MIX")?;
        writeln!(out, "  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu))?;
        writeln!(out, "  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load))?;
        writeln!(out, "  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store))?;
        writeln!(out, "  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch))?;
        writeln!(out, "  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump))?;
        writeln!(out, "  op.nop                 {} ({:.2}%)", self.inst_nop, pct(self.inst_nop))?;
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "CONTROL FLOW")?;
        writeln!(out, "  branch.taken           {}", self.branches_taken)?;
        writeln!(out, "  inst.unsupported       {}", self.unsupported)?;
        writeln!(out, "==========================================================")?;
        Ok(())
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let stdout = io::stdout();
        let _ = self.report(&mut stdout.lock());
    }
}
