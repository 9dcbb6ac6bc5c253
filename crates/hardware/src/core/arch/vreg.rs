//! Vector Register Storage.
//!
//! This module implements the lane storage of the vector register bank. It performs the following:
//! 1. **Storage:** Maintains `register_count` registers of `lane_count` signed 32-bit lanes.
//! 2. **Bounds Enforcement:** Rejects register indices outside the bank.

use crate::common::error::Fault;

/// Vector register bank.
///
/// Lanes are stored contiguously, register-major. All lanes start at zero.
#[derive(Clone, Debug)]
pub struct VectorRegs {
    lanes: Vec<i32>,
    register_count: usize,
    lane_count: usize,
}

impl VectorRegs {
    /// Creates a zeroed bank of `register_count` registers with `lane_count` lanes each.
    pub fn new(register_count: usize, lane_count: usize) -> Self {
        Self {
            lanes: vec![0; register_count * lane_count],
            register_count,
            lane_count,
        }
    }

    /// Number of registers in the bank.
    pub const fn register_count(&self) -> usize {
        self.register_count
    }

    /// Number of lanes per register.
    pub const fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// Fails with [`Fault::InvalidRegister`] unless `idx` names a register.
    #[inline]
    pub const fn check(&self, idx: usize) -> Result<(), Fault> {
        if idx < self.register_count {
            Ok(())
        } else {
            Err(Fault::InvalidRegister(idx))
        }
    }

    /// Returns the lanes of register `idx`.
    pub fn read(&self, idx: usize) -> Result<&[i32], Fault> {
        self.check(idx)?;
        let base = idx * self.lane_count;
        Ok(&self.lanes[base..base + self.lane_count])
    }

    /// Returns a single lane of register `idx`.
    ///
    /// Lanes beyond the register width read as zero.
    #[inline]
    pub fn lane(&self, idx: usize, lane: usize) -> Result<i32, Fault> {
        Ok(self.read(idx)?.get(lane).copied().unwrap_or(0))
    }

    /// Overwrites a single lane of register `idx`; out-of-range lanes are ignored.
    #[inline]
    pub fn write_lane(&mut self, idx: usize, lane: usize, val: i32) -> Result<(), Fault> {
        self.check(idx)?;
        if lane < self.lane_count {
            self.lanes[idx * self.lane_count + lane] = val;
        }
        Ok(())
    }

    /// Overwrites the leading lanes of register `idx` with `vals`.
    ///
    /// Extra values beyond the lane count are ignored; lanes past the end of `vals` keep
    /// their previous contents.
    pub fn write(&mut self, idx: usize, vals: &[i32]) -> Result<(), Fault> {
        self.check(idx)?;
        let base = idx * self.lane_count;
        let n = vals.len().min(self.lane_count);
        self.lanes[base..base + n].copy_from_slice(&vals[..n]);
        Ok(())
    }
}
