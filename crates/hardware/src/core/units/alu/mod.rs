//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the per-lane integer ALU used by the execution engine.
//! Lanes are 32-bit signed integers and all arithmetic wraps on overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

use crate::common::error::Fault;

/// Lane arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
    /// Truncating signed division.
    Div,
}

/// Arithmetic Logic Unit for lane operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on one lane.
    ///
    /// # Arguments
    ///
    /// * `op`   - The ALU operation to perform
    /// * `a`    - First operand
    /// * `b`    - Second operand (the divisor for `Div`)
    /// * `lane` - Lane being evaluated, reported on a divide-by-zero fault
    ///
    /// # Returns
    ///
    /// The wrapped 32-bit result, or [`Fault::DivideByZero`] when `op` is `Div` and `b` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use simdvm_core::core::units::alu::{Alu, AluOp};
    /// use simdvm_core::common::Fault;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 9, 8, 0), Ok(17));
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1, 0), Ok(i32::MIN));
    /// assert_eq!(Alu::execute(AluOp::Div, -7, 2, 0), Ok(-3));
    /// assert_eq!(Alu::execute(AluOp::Div, 1, 0, 5), Err(Fault::DivideByZero { lane: 5 }));
    /// ```
    #[inline]
    pub fn execute(op: AluOp, a: i32, b: i32, lane: usize) -> Result<i32, Fault> {
        arithmetic::execute(op, a, b).ok_or(Fault::DivideByZero { lane })
    }
}
