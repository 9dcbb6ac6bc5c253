//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which pairs the vector lane storage with
//! the per-register activation masks. It provides:
//! 1. **Unified Storage:** Register lanes and installed masks behind one interface.
//! 2. **Masked Writes:** Lane writes gated by the mask installed for the target register.
//! 3. **Observability:** Debugging utilities for dumping register state.

use crate::common::error::Fault;
use crate::core::arch::mask::{LaneMask, MaskTable};
use crate::core::arch::vreg::VectorRegs;

/// Vector registers plus one activation mask per register slot.
///
/// Created zeroed: every lane is 0 and every mask bit is inactive.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: VectorRegs,
    masks: MaskTable,
}

impl RegisterFile {
    /// Creates a zeroed register file.
    ///
    /// # Arguments
    ///
    /// * `register_count` - Number of vector registers.
    /// * `lane_count` - Number of lanes per register (and bits per mask).
    pub fn new(register_count: usize, lane_count: usize) -> Self {
        Self {
            regs: VectorRegs::new(register_count, lane_count),
            masks: MaskTable::new(register_count, lane_count),
        }
    }

    /// Number of registers.
    pub const fn register_count(&self) -> usize {
        self.regs.register_count()
    }

    /// Number of lanes per register.
    pub const fn lane_count(&self) -> usize {
        self.regs.lane_count()
    }

    /// Fails with [`Fault::InvalidRegister`] unless `idx` names a register.
    #[inline]
    pub const fn check(&self, idx: usize) -> Result<(), Fault> {
        self.regs.check(idx)
    }

    /// Reads the lanes of register `idx`.
    pub fn read(&self, idx: usize) -> Result<&[i32], Fault> {
        self.regs.read(idx)
    }

    /// Reads one lane of register `idx`.
    #[inline]
    pub fn lane(&self, idx: usize, lane: usize) -> Result<i32, Fault> {
        self.regs.lane(idx, lane)
    }

    /// Writes the leading lanes of register `idx`, ignoring its mask.
    pub fn write(&mut self, idx: usize, vals: &[i32]) -> Result<(), Fault> {
        self.regs.write(idx, vals)
    }

    /// Returns the mask currently installed for register `idx`.
    pub fn mask(&self, idx: usize) -> Result<&LaneMask, Fault> {
        self.masks.get(idx)
    }

    /// Installs `mask` for register `idx`, replacing the previous one.
    pub fn install_mask(&mut self, idx: usize, mask: LaneMask) -> Result<(), Fault> {
        self.masks.install(idx, mask)
    }

    /// Writes lane `lane` of register `idx` iff the installed mask has that lane active.
    ///
    /// Inactive lanes are left untouched, not zeroed.
    pub(crate) fn write_masked(&mut self, idx: usize, lane: usize, val: i32) -> Result<(), Fault> {
        if self.masks.get(idx)?.is_active(lane) {
            self.regs.write_lane(idx, lane, val)?;
        }
        Ok(())
    }

    /// Dumps every register and its mask at `trace` level.
    pub fn dump(&self) {
        for idx in 0..self.register_count() {
            if let (Ok(lanes), Ok(mask)) = (self.regs.read(idx), self.masks.get(idx)) {
                tracing::trace!(register = idx, ?mask, ?lanes, "register state");
            }
        }
    }
}
