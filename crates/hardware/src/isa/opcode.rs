//! Opcode and lane data type definitions.
//!
//! The opcode set is closed. Only the move, arithmetic, and byte load/store opcodes
//! have execution semantics; the bitwise and shift opcodes are part of the set but
//! fault with [`Fault::UnsupportedInstruction`](crate::common::error::Fault) when executed.

use std::fmt;

/// Operation performed by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `dst = src1`
    Mov,
    /// `dst = src1 + src2` (wrapping)
    Add,
    /// `dst = src1 - src2` (wrapping)
    Sub,
    /// `dst = src1 * src2` (wrapping)
    Mul,
    /// `dst = src1 / src2`, faulting on a zero divisor
    Div,
    /// `dst = sign_extend(memory[src1])`
    Load,
    /// `memory[src1] = low_byte(dst)`
    Store,
    /// Bitwise AND (no execution semantics).
    And,
    /// Bitwise OR (no execution semantics).
    Or,
    /// Bitwise XOR (no execution semantics).
    Xor,
    /// Bitwise NOT (no execution semantics).
    Not,
    /// Shift left (no execution semantics).
    Shl,
    /// Shift right (no execution semantics).
    Shr,
}

impl Opcode {
    /// Every opcode, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Mov,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Load,
        Self::Store,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::Shl,
        Self::Shr,
    ];

    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Mov => "mov",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Load => "ld",
            Self::Store => "st",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Not => "not",
            Self::Shl => "shl",
            Self::Shr => "shr",
        }
    }

    /// Returns `true` if the engine can execute this opcode.
    pub const fn is_supported(self) -> bool {
        matches!(
            self,
            Self::Mov | Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Load | Self::Store
        )
    }

    /// Returns `true` if the opcode reads a second source operand.
    pub const fn reads_src2(self) -> bool {
        !matches!(self, Self::Mov | Self::Load | Self::Store | Self::Not)
    }

    /// Returns `true` if the opcode touches data memory.
    pub const fn is_memory(self) -> bool {
        matches!(self, Self::Load | Self::Store)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Numeric representation tag carried by an instruction.
///
/// The tag is inert: lanes are always 32-bit signed integers and memory transfers are
/// always one byte. It is preserved on the instruction and shown by the disassembler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Signed 8-bit.
    S8,
    /// Signed 16-bit.
    S16,
    /// Signed 32-bit.
    #[default]
    S32,
    /// Unsigned 8-bit.
    U8,
    /// Unsigned 16-bit.
    U16,
    /// Unsigned 32-bit.
    U32,
    /// Half-precision float.
    F16,
    /// Single-precision float.
    F32,
}

impl DataType {
    /// Suffix used by the disassembler (e.g. `s32`).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::S8 => "s8",
            Self::S16 => "s16",
            Self::S32 => "s32",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::F16 => "f16",
            Self::F32 => "f32",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
