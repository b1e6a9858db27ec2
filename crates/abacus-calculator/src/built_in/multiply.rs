//! Operation for multiplying two numeric values
//!
//! Integer operands keep an integer product unless it overflows `i64`.

use abacus_types::Number;

use crate::built_in::integer_or_float;
use crate::error::CalculatorResult;
use crate::operation::Operation;

/// Operation for multiplication
///
/// # Arguments
/// * `a` - First factor
/// * `b` - Second factor
///
/// # Returns
/// The product of `a` and `b`
#[derive(Debug, Default)]
pub struct MultiplyOperation;

impl Operation for MultiplyOperation {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn symbols(&self) -> &'static [&'static str] {
        &["*"]
    }

    fn description(&self) -> &'static str {
        "Multiplication"
    }

    fn apply(&self, a: Number, b: Number) -> CalculatorResult<Number> {
        Ok(integer_or_float(a, b, i64::checked_mul, |x, y| x * y))
    }
}
