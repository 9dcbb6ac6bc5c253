//! SIMD virtual machine library.
//!
//! This crate implements a masked, lane-wise vector machine with the following:
//! 1. **Registers:** A fixed bank of vector registers with one activation mask per register slot.
//! 2. **Memory:** A flat, zero-initialized, bounds-checked byte memory.
//! 3. **ISA:** Decoded instruction records (move, arithmetic, byte load/store) and a disassembler.
//! 4. **Engine:** Fail-fast validation and masked lane-wise execution of a static program.
//! 5. **Support:** Configuration, execution statistics, and typed faults.

/// Common types and constants (dimensions, faults, register file).
pub mod common;
/// Engine configuration (defaults and JSON loading).
pub mod config;
/// Execution engine (architectural state, units, run loop).
pub mod core;
/// Instruction set (opcodes, data types, instructions, disassembly).
pub mod isa;
/// Data memory.
pub mod memory;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main engine type; holds registers, masks, memory, and the program.
pub use crate::core::Vm;
/// Fault raised while running a program, tagged with the instruction index.
pub use crate::common::ExecError;
