//! Instruction Disassembler.
//!
//! Renders a decoded [`Instruction`] as a human-readable line for debug tracing,
//! logging, and test diagnostics.
//!
//! # Format
//!
//! `<mnemonic>.<type> v<dst>, <src1>[, <src2>]` where register operands print as `vN`
//! and immediates as `#N`. The second source is omitted for opcodes that do not read it.
//!
//! ```
//! use simdvm_core::core::arch::LaneMask;
//! use simdvm_core::isa::{Instruction, Operand};
//!
//! let inst = Instruction::add(1, Operand::Imm(9), Operand::Reg(3), LaneMask::all(4));
//! assert_eq!(inst.to_string(), "add.s32 v1, #9, v3");
//! ```

use std::fmt;

use crate::isa::instruction::{Instruction, Operand};

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reg(idx) => write!(f, "v{idx}"),
            Self::Imm(val) => write!(f, "#{val}"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} v{}, {}",
            self.opcode, self.data_type, self.dst, self.src1
        )?;
        if self.opcode.reads_src2() {
            write!(f, ", {}", self.src2)?;
        }
        Ok(())
    }
}

/// Disassembles a whole program, one numbered line per instruction.
pub fn disassemble(program: &[Instruction]) -> String {
    let mut out = String::new();
    for (i, inst) in program.iter().enumerate() {
        out.push_str(&format!("{i:4}: {inst}\n"));
    }
    out
}
