//! Power Operation
//!
//! Keys: `power`, `**`, `^`
//!
//! An integer base with a non-negative integer exponent stays exact while
//! the result fits in `i64`. Everything else goes through `f64::powf`, so
//! negative and fractional exponents work and a negative base with a
//! fractional exponent yields NaN.
//!
use abacus_types::Number;

use crate::error::CalculatorResult;
use crate::operation::Operation;

#[derive(Debug, Default)]
pub struct PowerOperation;

impl Operation for PowerOperation {
    fn name(&self) -> &'static str {
        "power"
    }

    fn symbols(&self) -> &'static [&'static str] {
        &["**", "^"]
    }

    fn description(&self) -> &'static str {
        "Exponentiation"
    }

    fn apply(&self, a: Number, b: Number) -> CalculatorResult<Number> {
        if let (Number::Integer(base), Number::Integer(exp)) = (a, b) {
            if let Some(result) = u32::try_from(exp).ok().and_then(|e| base.checked_pow(e)) {
                return Ok(Number::Integer(result));
            }
        }
        Ok(Number::Float(a.as_f64().powf(b.as_f64())))
    }
}
