//! Global Machine Constants.
//!
//! This module defines the default dimensions of the virtual machine. It includes:
//! 1. **Register Bank:** The number of vector registers and lanes per register.
//! 2. **Memory:** The size of the flat byte-addressable memory.
//!
//! These values seed [`Config::default`](crate::config::Config); engines built from an
//! explicit configuration may use other dimensions.

/// Number of vector registers in the register bank.
pub const REGISTER_COUNT: usize = 32;

/// Number of lanes in each vector register (and bits in each activation mask).
///
/// Equal to [`REGISTER_COUNT`] by default, but the two are independent.
pub const LANE_COUNT: usize = 32;

/// Size of the flat data memory in bytes (1 GiB).
pub const MEMORY_SIZE: usize = 1024 * 1024 * 1024;
