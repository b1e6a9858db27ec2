//! Operation for true division
//!
//! The quotient is always a float, even for evenly divisible integers.

use abacus_types::Number;

use crate::error::{CalculatorError, CalculatorResult};
use crate::operation::Operation;

/// Operation for division
///
/// # Errors
/// `CalculatorError::DivideByZero` when `b` is zero (including `-0.0`).
#[derive(Debug, Default)]
pub struct DivideOperation;

impl Operation for DivideOperation {
    fn name(&self) -> &'static str {
        "divide"
    }

    fn symbols(&self) -> &'static [&'static str] {
        &["/"]
    }

    fn description(&self) -> &'static str {
        "Division"
    }

    fn apply(&self, a: Number, b: Number) -> CalculatorResult<Number> {
        if b.is_zero() {
            return Err(CalculatorError::DivideByZero);
        }
        Ok(Number::Float(a.as_f64() / b.as_f64()))
    }
}
