//! # Register File Tests
//!
//! Verifies zero initialization, read/write consistency, mask installation, and
//! bounds enforcement of the unified `RegisterFile`.

use pretty_assertions::assert_eq;
use simdvm_core::common::{Fault, RegisterFile};
use simdvm_core::core::arch::LaneMask;

/// Ensures every lane and every mask bit starts cleared.
#[test]
fn initial_state_is_zeroed() {
    let regs = RegisterFile::new(32, 32);
    for i in 0..32 {
        assert_eq!(regs.read(i).unwrap(), &[0; 32][..], "v{i} should be zero");
        assert_eq!(regs.mask(i).unwrap().count_active(), 0, "v{i} mask should be clear");
    }
}

/// Verifies that written lanes read back unchanged.
#[test]
fn write_and_read() {
    let mut regs = RegisterFile::new(4, 4);
    regs.write(2, &[1, -2, 3, i32::MIN]).unwrap();
    assert_eq!(regs.read(2).unwrap(), &[1, -2, 3, i32::MIN]);
    assert_eq!(regs.lane(2, 3).unwrap(), i32::MIN);
}

/// A short write only replaces the leading lanes.
#[test]
fn partial_write_keeps_trailing_lanes() {
    let mut regs = RegisterFile::new(2, 4);
    regs.write(1, &[9, 9, 9, 9]).unwrap();
    regs.write(1, &[5]).unwrap();
    assert_eq!(regs.read(1).unwrap(), &[5, 9, 9, 9]);
}

/// Registers do not share storage.
#[test]
fn registers_are_independent() {
    let mut regs = RegisterFile::new(3, 2);
    regs.write(0, &[1, 1]).unwrap();
    regs.write(2, &[3, 3]).unwrap();
    assert_eq!(regs.read(0).unwrap(), &[1, 1]);
    assert_eq!(regs.read(1).unwrap(), &[0, 0]);
    assert_eq!(regs.read(2).unwrap(), &[3, 3]);
}

/// Index `N` is the first invalid register.
#[test]
fn out_of_range_register_faults() {
    let mut regs = RegisterFile::new(8, 4);
    assert_eq!(regs.read(8), Err(Fault::InvalidRegister(8)));
    assert_eq!(regs.write(9, &[1]), Err(Fault::InvalidRegister(9)));
    assert_eq!(regs.mask(8).err(), Some(Fault::InvalidRegister(8)));
    assert_eq!(
        regs.install_mask(100, LaneMask::all(4)),
        Err(Fault::InvalidRegister(100))
    );
    assert!(regs.check(7).is_ok());
}

/// An installed mask reads back exactly and only affects its own slot.
#[test]
fn install_mask_is_keyed_by_slot() {
    let mut regs = RegisterFile::new(4, 4);
    let mask = LaneMask::from([true, false, true, false]);
    regs.install_mask(1, mask.clone()).unwrap();
    assert_eq!(regs.mask(1).unwrap(), &mask);
    assert_eq!(regs.mask(0).unwrap(), &LaneMask::none(4));
    assert_eq!(regs.mask(2).unwrap(), &LaneMask::none(4));
}

/// A newer install replaces the previous mask.
#[test]
fn install_mask_overwrites() {
    let mut regs = RegisterFile::new(2, 3);
    regs.install_mask(0, LaneMask::all(3)).unwrap();
    regs.install_mask(0, LaneMask::from_word(0b010, 3)).unwrap();
    assert_eq!(regs.mask(0).unwrap().as_slice(), &[false, true, false]);
}

/// A mask of the wrong width is rejected and the old mask kept.
#[test]
fn install_mask_rejects_wrong_width() {
    let mut regs = RegisterFile::new(2, 4);
    regs.install_mask(0, LaneMask::all(4)).unwrap();
    assert_eq!(
        regs.install_mask(0, LaneMask::all(3)),
        Err(Fault::MaskWidthMismatch {
            expected: 4,
            actual: 3
        })
    );
    assert_eq!(regs.mask(0).unwrap(), &LaneMask::all(4));
}
