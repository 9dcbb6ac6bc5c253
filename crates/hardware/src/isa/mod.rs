//! Instruction Set Definitions.
//!
//! Contains the opcode set, the lane data type tag, decoded instruction records, and the
//! disassembler. Instructions arrive at the engine already decoded; there is no binary or
//! textual encoding here.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Decoded instruction records and operands.
pub mod instruction;

/// Opcode and data type enumerations.
pub mod opcode;

pub use disasm::disassemble;
pub use instruction::{Instruction, Operand};
pub use opcode::{DataType, Opcode};
