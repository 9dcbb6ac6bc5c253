//! Fault and Error definitions.
//!
//! This module defines the error handling for the virtual machine. It provides:
//! 1. **Faults:** The fatal conditions an instruction can raise during validation or execution.
//! 2. **Execution Errors:** A fault tagged with the program position of the instruction that raised it.
//! 3. **Configuration Errors:** Failures loading or validating a [`Config`](crate::config::Config).

use thiserror::Error;

use crate::isa::Opcode;

/// Fatal conditions raised by the register file, memory, or execution engine.
///
/// Every fault is non-recoverable at instruction granularity: the engine stops at the
/// first fault and executes nothing after it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Register operand index outside `[0, register_count)`.
    #[error("invalid register v{0}")]
    InvalidRegister(usize),

    /// Memory address outside `[0, memory_size)`.
    ///
    /// The address is carried as a signed value so that negative lane values used as
    /// addresses are reported as they were computed.
    #[error("memory address {0} out of bounds")]
    OutOfBoundsAccess(i64),

    /// An active lane of a `DIV` resolved a zero divisor.
    #[error("divide by zero in lane {lane}")]
    DivideByZero {
        /// Lane whose divisor was zero.
        lane: usize,
    },

    /// The opcode has no executable semantics.
    #[error("unsupported instruction `{0}`")]
    UnsupportedInstruction(Opcode),

    /// A mask was installed whose width does not match the lane count.
    #[error("mask width {actual} does not match lane count {expected}")]
    MaskWidthMismatch {
        /// Lane count of the register file.
        expected: usize,
        /// Width of the rejected mask.
        actual: usize,
    },
}

/// A fault raised while running a program, with the position of the faulting instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("instruction {index} ({opcode}): {fault}")]
pub struct ExecError {
    /// Zero-based position of the instruction in the program.
    pub index: usize,
    /// Opcode of the faulting instruction.
    pub opcode: Opcode,
    /// The underlying fault.
    #[source]
    pub fault: Fault,
}

impl ExecError {
    /// Creates an execution error for the instruction at `index`.
    pub const fn new(index: usize, opcode: Opcode, fault: Fault) -> Self {
        Self {
            index,
            opcode,
            fault,
        }
    }
}

/// Errors produced while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration parsed but describes an unusable machine.
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}
