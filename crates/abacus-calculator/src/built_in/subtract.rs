//! Operation for subtracting the second operand from the first

use abacus_types::Number;

use crate::built_in::integer_or_float;
use crate::error::CalculatorResult;
use crate::operation::Operation;

#[derive(Debug, Default)]
pub struct SubtractOperation;

impl Operation for SubtractOperation {
    fn name(&self) -> &'static str {
        "subtract"
    }

    fn symbols(&self) -> &'static [&'static str] {
        &["-"]
    }

    fn description(&self) -> &'static str {
        "Subtraction"
    }

    fn apply(&self, a: Number, b: Number) -> CalculatorResult<Number> {
        Ok(integer_or_float(a, b, i64::checked_sub, |x, y| x - y))
    }
}
