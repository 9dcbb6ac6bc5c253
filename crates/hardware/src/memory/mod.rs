//! Data memory.
//!
//! Provides the flat, bounds-checked byte memory owned by the execution engine.
//! Transfers are strictly one byte wide regardless of an instruction's data type.

/// Contiguous byte buffer with bounds-checked access.
pub mod buffer;

pub use buffer::MemoryBuffer;
