//! Execution units.
//!
//! This module contains the functional units the engine dispatches lane operations to.
//! Byte loads and stores go straight to [`MemoryBuffer`](crate::memory::MemoryBuffer).

/// Arithmetic Logic Unit for lane operations.
pub mod alu;
