//! Built-in operations provided by the Abacus calculator.

use abacus_types::Number;

pub mod add;
pub mod divide;
pub mod multiply;
pub mod power;
pub mod subtract;

/// Applies `int_op` when both operands are integers and the result fits,
/// otherwise `float_op` on the widened operands.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn integer_or_float(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Integer(x), Number::Integer(y)) = (a, b) {
        if let Some(result) = int_op(x, y) {
            return Number::Integer(result);
        }
    }
    Number::Float(float_op(a.as_f64(), b.as_f64()))
}
