//! Core engine implementation.
//!
//! This module contains the execution engine, its architectural state, and the
//! functional units it dispatches lane operations to.

/// Architectural state (vector registers and activation masks).
pub mod arch;

/// Execution units (lane ALU).
pub mod units;

/// Execution engine and program run loop.
pub mod vm;

pub use self::vm::{Vm, VmState};
