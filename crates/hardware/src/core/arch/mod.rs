//! Architectural state of the vector machine.
//!
//! This module contains the register-level building blocks of the engine:
//! 1. **Masks:** Per-lane activation vectors and the per-register mask table.
//! 2. **Vector Registers:** Lane storage for the register bank.

/// Lane activation masks and the per-register mask table.
pub mod mask;

/// Vector register lane storage.
pub mod vreg;

pub use mask::{LaneMask, MaskTable};
pub use vreg::VectorRegs;
