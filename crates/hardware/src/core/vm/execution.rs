//! Program Execution.
//!
//! This module implements the run loop of the engine. It performs the following:
//! 1. **Validation:** Checks every register operand of an instruction before any lane runs.
//! 2. **Dispatch:** Maps the opcode onto a lane operation, rejecting opcodes without semantics.
//! 3. **Masked Evaluation:** Evaluates each lane whose mask bit is set on the destination register.
//! 4. **Observability:** Emits tracing events and updates execution statistics.
//!
//! Execution is fail-fast. The first fault aborts the run; nothing after the faulting
//! instruction executes, and lanes the faulting instruction already wrote keep their values.

use super::{Vm, VmState};
use crate::common::error::{ExecError, Fault};
use crate::core::arch::mask::LaneMask;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::{Instruction, Opcode, Operand};

/// Per-lane behavior of an executable opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LaneOp {
    Move,
    Alu(AluOp),
    Load,
    Store,
}

impl LaneOp {
    /// Resolves the lane behavior of `op`.
    const fn decode(op: Opcode) -> Result<Self, Fault> {
        match op {
            Opcode::Mov => Ok(Self::Move),
            Opcode::Add => Ok(Self::Alu(AluOp::Add)),
            Opcode::Sub => Ok(Self::Alu(AluOp::Sub)),
            Opcode::Mul => Ok(Self::Alu(AluOp::Mul)),
            Opcode::Div => Ok(Self::Alu(AluOp::Div)),
            Opcode::Load => Ok(Self::Load),
            Opcode::Store => Ok(Self::Store),
            Opcode::And | Opcode::Or | Opcode::Xor | Opcode::Not | Opcode::Shl | Opcode::Shr => {
                Err(Fault::UnsupportedInstruction(op))
            }
        }
    }
}

impl Vm {
    /// Runs every appended instruction once, in program order.
    ///
    /// May be called repeatedly; each call re-applies the whole program to the current
    /// register and memory state.
    ///
    /// # Returns
    ///
    /// `Ok(())` if every instruction completed, otherwise the first [`ExecError`]. On error
    /// the engine stays in [`VmState::Building`].
    pub fn execute_all(&mut self) -> Result<(), ExecError> {
        tracing::debug!(instructions = self.program.len(), "executing program");

        let program = std::mem::take(&mut self.program);
        let result = program
            .iter()
            .enumerate()
            .try_for_each(|(index, inst)| self.step(index, inst));
        self.program = program;

        match &result {
            Ok(()) => {
                self.state = VmState::Executed;
                tracing::debug!(
                    retired = self.stats.instructions_retired,
                    lanes_active = self.stats.lanes_active,
                    "program complete"
                );
                self.regs.dump();
            }
            Err(err) => {
                self.stats.faults += 1;
                tracing::warn!(
                    index = err.index,
                    opcode = %err.opcode,
                    fault = %err.fault,
                    "execution aborted"
                );
            }
        }
        result
    }

    /// Validates and executes a single instruction.
    fn step(&mut self, index: usize, inst: &Instruction) -> Result<(), ExecError> {
        if self.trace {
            tracing::info!(index, "{inst}");
        } else {
            tracing::trace!(index, %inst, "execute");
        }

        self.validate(inst)
            .and_then(|()| self.execute_lanes(inst))
            .map_err(|fault| ExecError::new(index, inst.opcode, fault))?;

        self.stats.retire(inst.opcode);
        Ok(())
    }

    /// Checks the destination, then each register source, in that order.
    ///
    /// Immediates are unconstrained scalars and are not checked.
    fn validate(&self, inst: &Instruction) -> Result<(), Fault> {
        inst.registers().try_for_each(|idx| self.regs.check(idx))
    }

    /// Evaluates every active lane of `inst`.
    fn execute_lanes(&mut self, inst: &Instruction) -> Result<(), Fault> {
        let op = LaneOp::decode(inst.opcode)?;
        let mask: LaneMask = self.regs.mask(inst.dst)?.clone();

        for lane in 0..self.regs.lane_count() {
            if !mask.is_active(lane) {
                self.stats.lanes_masked += 1;
                continue;
            }
            match op {
                LaneOp::Move => {
                    let val = self.operand(inst.src1, lane)?;
                    self.regs.write_masked(inst.dst, lane, val)?;
                }
                LaneOp::Alu(alu_op) => {
                    let a = self.operand(inst.src1, lane)?;
                    let b = self.operand(inst.src2, lane)?;
                    let val = Alu::execute(alu_op, a, b, lane)?;
                    self.regs.write_masked(inst.dst, lane, val)?;
                }
                LaneOp::Load => {
                    let addr = i64::from(self.operand(inst.src1, lane)?);
                    let val = self.memory.load_byte(addr)?;
                    self.stats.bytes_loaded += 1;
                    self.regs.write_masked(inst.dst, lane, val)?;
                }
                LaneOp::Store => {
                    let addr = i64::from(self.operand(inst.src1, lane)?);
                    let val = self.regs.lane(inst.dst, lane)?;
                    self.memory.store_byte(addr, val)?;
                    self.stats.bytes_stored += 1;
                }
            }
            self.stats.lanes_active += 1;
        }
        Ok(())
    }

    /// Resolves `operand` for `lane`: the immediate itself, or the register's lane value.
    #[inline]
    fn operand(&self, operand: Operand, lane: usize) -> Result<i32, Fault> {
        match operand {
            Operand::Imm(val) => Ok(val),
            Operand::Reg(idx) => self.regs.lane(idx, lane),
        }
    }
}
