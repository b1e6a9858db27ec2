//! Add Operation
//!
//! Keys: `add`, `+`
//!
use abacus_types::Number;

use crate::built_in::integer_or_float;
use crate::error::CalculatorResult;
use crate::operation::Operation;

#[derive(Debug, Default)]
pub struct AddOperation;

impl Operation for AddOperation {
    fn name(&self) -> &'static str {
        "add"
    }

    fn symbols(&self) -> &'static [&'static str] {
        &["+"]
    }

    fn description(&self) -> &'static str {
        "Addition"
    }

    fn apply(&self, a: Number, b: Number) -> CalculatorResult<Number> {
        Ok(integer_or_float(a, b, i64::checked_add, |x, y| x + y))
    }
}
