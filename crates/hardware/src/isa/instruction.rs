//! Decoded instruction records.
//!
//! An [`Instruction`] is the immutable description of one operation: opcode, lane data
//! type, destination register, two source operands, and the mask intended for the
//! destination register. Installing that mask is a separate, explicit step
//! (see [`Vm::install_instruction_mask`](crate::core::Vm::install_instruction_mask)).

use crate::core::arch::mask::LaneMask;
use crate::isa::opcode::{DataType, Opcode};

/// A source operand: a register index or an immediate scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Per-lane value read from vector register `n`.
    Reg(usize),
    /// Scalar broadcast identically to every active lane.
    Imm(i32),
}

impl Operand {
    /// Returns the register index if this is a register operand.
    pub const fn register(self) -> Option<usize> {
        match self {
            Self::Reg(idx) => Some(idx),
            Self::Imm(_) => None,
        }
    }

    /// Returns `true` for immediate operands.
    pub const fn is_immediate(self) -> bool {
        matches!(self, Self::Imm(_))
    }
}

impl Default for Operand {
    fn default() -> Self {
        Self::Imm(0)
    }
}

/// One decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Operation to perform.
    pub opcode: Opcode,
    /// Lane data type tag (carried but not used by execution).
    pub data_type: DataType,
    /// Destination register; the data source for `STORE`.
    pub dst: usize,
    /// First source operand; the address for `LOAD` and `STORE`.
    pub src1: Operand,
    /// Second source operand.
    pub src2: Operand,
    /// Mask to install on `dst` before the instruction runs.
    pub mask: LaneMask,
}

impl Instruction {
    /// Creates an instruction with the default [`DataType::S32`] tag.
    pub const fn new(
        opcode: Opcode,
        dst: usize,
        src1: Operand,
        src2: Operand,
        mask: LaneMask,
    ) -> Self {
        Self {
            opcode,
            data_type: DataType::S32,
            dst,
            src1,
            src2,
            mask,
        }
    }

    /// Replaces the data type tag.
    #[must_use]
    pub const fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// `dst = src`
    pub const fn mov(dst: usize, src: Operand, mask: LaneMask) -> Self {
        Self::new(Opcode::Mov, dst, src, Operand::Imm(0), mask)
    }

    /// `dst = a + b`
    pub const fn add(dst: usize, a: Operand, b: Operand, mask: LaneMask) -> Self {
        Self::new(Opcode::Add, dst, a, b, mask)
    }

    /// `dst = a - b`
    pub const fn sub(dst: usize, a: Operand, b: Operand, mask: LaneMask) -> Self {
        Self::new(Opcode::Sub, dst, a, b, mask)
    }

    /// `dst = a * b`
    pub const fn mul(dst: usize, a: Operand, b: Operand, mask: LaneMask) -> Self {
        Self::new(Opcode::Mul, dst, a, b, mask)
    }

    /// `dst = a / b`
    pub const fn div(dst: usize, a: Operand, b: Operand, mask: LaneMask) -> Self {
        Self::new(Opcode::Div, dst, a, b, mask)
    }

    /// `dst = sign_extend(memory[addr])`
    pub const fn load(dst: usize, addr: Operand, mask: LaneMask) -> Self {
        Self::new(Opcode::Load, dst, addr, Operand::Imm(0), mask)
    }

    /// `memory[addr] = low_byte(src)`
    pub const fn store(src: usize, addr: Operand, mask: LaneMask) -> Self {
        Self::new(Opcode::Store, src, addr, Operand::Imm(0), mask)
    }

    /// Register indices this instruction names, destination first.
    pub fn registers(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.dst).chain(
            [self.src1, self.src2]
                .into_iter()
                .filter_map(Operand::register),
        )
    }
}
