//! Lane Activation Masks.
//!
//! This module implements the per-register activation masks. It provides:
//! 1. **Lane Masks:** A fixed-width boolean vector gating which lanes an instruction may touch.
//! 2. **Mask Table:** One installed mask per register slot.
//!
//! Masks are keyed by register slot, not by instruction. Installing a mask for register
//! `r` affects every later instruction that targets `r` until another mask is installed.

use std::fmt;

use crate::common::error::Fault;

/// A boolean activation vector, one bit per lane.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct LaneMask {
    bits: Vec<bool>,
}

impl LaneMask {
    /// Creates a mask of `width` lanes with every lane active.
    pub fn all(width: usize) -> Self {
        Self {
            bits: vec![true; width],
        }
    }

    /// Creates a mask of `width` lanes with every lane inactive.
    pub fn none(width: usize) -> Self {
        Self {
            bits: vec![false; width],
        }
    }

    /// Creates a mask from the low bits of `word`; lane `i` is active iff bit `i` is set.
    ///
    /// Lanes at positions 64 and above are inactive.
    pub fn from_word(word: u64, width: usize) -> Self {
        Self {
            bits: (0..width).map(|i| i < 64 && (word >> i) & 1 == 1).collect(),
        }
    }

    /// Number of lanes covered by the mask.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the mask covers no lanes.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns `true` if `lane` is active. Lanes beyond the mask width are inactive.
    #[inline]
    pub fn is_active(&self, lane: usize) -> bool {
        self.bits.get(lane).copied().unwrap_or(false)
    }

    /// Sets the activation bit of `lane`; out-of-range lanes are ignored.
    pub fn set(&mut self, lane: usize, active: bool) {
        if let Some(bit) = self.bits.get_mut(lane) {
            *bit = active;
        }
    }

    /// Number of active lanes.
    pub fn count_active(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Activation bits in lane order.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Iterates over the indices of active lanes.
    pub fn active_lanes(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }
}

impl From<Vec<bool>> for LaneMask {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<&[bool]> for LaneMask {
    fn from(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }
}

impl<const N: usize> From<[bool; N]> for LaneMask {
    fn from(bits: [bool; N]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }
}

impl fmt::Debug for LaneMask {
    /// Formats as a lane-ordered bit string, lane 0 first (e.g. `LaneMask(1100)`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LaneMask(")?;
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        f.write_str(")")
    }
}

/// The currently installed mask of every register slot.
#[derive(Clone, Debug)]
pub struct MaskTable {
    masks: Vec<LaneMask>,
    lane_count: usize,
}

impl MaskTable {
    /// Creates a table of `register_count` all-inactive masks of width `lane_count`.
    pub fn new(register_count: usize, lane_count: usize) -> Self {
        Self {
            masks: vec![LaneMask::none(lane_count); register_count],
            lane_count,
        }
    }

    /// Returns the mask installed for register `index`.
    pub fn get(&self, index: usize) -> Result<&LaneMask, Fault> {
        self.masks.get(index).ok_or(Fault::InvalidRegister(index))
    }

    /// Replaces the mask installed for register `index`.
    ///
    /// Fails with [`Fault::InvalidRegister`] for an out-of-range slot and
    /// [`Fault::MaskWidthMismatch`] if `mask` does not cover exactly `lane_count` lanes.
    pub fn install(&mut self, index: usize, mask: LaneMask) -> Result<(), Fault> {
        let lane_count = self.lane_count;
        let slot = self
            .masks
            .get_mut(index)
            .ok_or(Fault::InvalidRegister(index))?;
        if mask.len() != lane_count {
            return Err(Fault::MaskWidthMismatch {
                expected: lane_count,
                actual: mask.len(),
            });
        }
        *slot = mask;
        Ok(())
    }
}
