//! Execution statistics collection and reporting.
//!
//! This module tracks what the engine has done across every `execute_all` call. It provides:
//! 1. **Retirement:** Instructions that completed without a fault.
//! 2. **Instruction mix:** Counts by category (move, ALU, load, store).
//! 3. **Lane activity:** Lanes evaluated versus lanes skipped by the mask.
//! 4. **Faults:** Runs aborted by a fault.

use std::fmt;

use serde::Serialize;

use crate::isa::Opcode;

/// Cumulative execution counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecStats {
    /// Number of instructions that completed without a fault.
    pub instructions_retired: u64,

    /// Count of `MOV` instructions retired.
    pub inst_move: u64,
    /// Count of arithmetic (`ADD`, `SUB`, `MUL`, `DIV`) instructions retired.
    pub inst_alu: u64,
    /// Count of `LOAD` instructions retired.
    pub inst_load: u64,
    /// Count of `STORE` instructions retired.
    pub inst_store: u64,

    /// Lanes whose mask bit was set and that completed without a fault.
    pub lanes_active: u64,
    /// Lanes skipped because their mask bit was clear.
    pub lanes_masked: u64,

    /// Bytes read from data memory.
    pub bytes_loaded: u64,
    /// Bytes written to data memory.
    pub bytes_stored: u64,

    /// Number of `execute_all` runs aborted by a fault.
    pub faults: u64,
}

impl ExecStats {
    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records one retired instruction of kind `op`.
    ///
    /// Unsupported opcodes never retire and are ignored.
    pub(crate) const fn retire(&mut self, op: Opcode) {
        match op {
            Opcode::Mov => self.inst_move += 1,
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div => self.inst_alu += 1,
            Opcode::Load => self.inst_load += 1,
            Opcode::Store => self.inst_store += 1,
            Opcode::And | Opcode::Or | Opcode::Xor | Opcode::Not | Opcode::Shl | Opcode::Shr => {
                return;
            }
        }
        self.instructions_retired += 1;
    }

    /// Fraction of evaluated lanes among all lanes visited, or 0 if none were visited.
    pub fn lane_utilization(&self) -> f64 {
        let total = self.lanes_active + self.lanes_masked;
        if total == 0 {
            0.0
        } else {
            self.lanes_active as f64 / total as f64
        }
    }
}

impl fmt::Display for ExecStats {
    /// Formats a plain-text report, one counter per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "insts_retired            {}", self.instructions_retired)?;
        writeln!(f, "  mov                    {}", self.inst_move)?;
        writeln!(f, "  alu                    {}", self.inst_alu)?;
        writeln!(f, "  load                   {}", self.inst_load)?;
        writeln!(f, "  store                  {}", self.inst_store)?;
        writeln!(f, "lanes_active             {}", self.lanes_active)?;
        writeln!(f, "lanes_masked             {}", self.lanes_masked)?;
        writeln!(
            f,
            "lane_utilization         {:.2}%",
            self.lane_utilization() * 100.0
        )?;
        writeln!(f, "bytes_loaded             {}", self.bytes_loaded)?;
        writeln!(f, "bytes_stored             {}", self.bytes_stored)?;
        write!(f, "faults                   {}", self.faults)
    }
}
