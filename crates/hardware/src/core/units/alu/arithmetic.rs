//! ALU arithmetic operations.
//!
//! Implements lane addition, subtraction, multiplication, and division on
//! 32-bit signed values. Overflow wraps in two's complement, including the
//! `i32::MIN / -1` case, so no lane operation can panic.

use super::AluOp;

/// Executes a lane arithmetic operation.
///
/// Returns `None` only for division by zero.
pub fn execute(op: AluOp, a: i32, b: i32) -> Option<i32> {
    match op {
        AluOp::Add => Some(a.wrapping_add(b)),
        AluOp::Sub => Some(a.wrapping_sub(b)),
        AluOp::Mul => Some(a.wrapping_mul(b)),
        AluOp::Div => (b != 0).then(|| a.wrapping_div(b)),
    }
}
