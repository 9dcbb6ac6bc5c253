//! Common utilities and types used throughout the virtual machine.
//!
//! This module provides fundamental building blocks shared by all components. It includes:
//! 1. **Constants:** Default register bank and memory dimensions.
//! 2. **Error Handling:** Faults, execution errors, and configuration errors.
//! 3. **Register Management:** A unified interface for register lanes and masks.

/// Default machine dimensions.
pub mod constants;

/// Fault and error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{LANE_COUNT, MEMORY_SIZE, REGISTER_COUNT};
pub use error::{ConfigError, ExecError, Fault};
pub use reg::RegisterFile;
