use abacus_types::Number;

use crate::error::CalculatorResult;

/// A trait for binary arithmetic operations.
/// Operations are stateless and thread-safe.
pub trait Operation: Send + Sync {
    /// The word key of the operation, e.g. `add`.
    fn name(&self) -> &'static str;

    /// Symbol keys that also select this operation, e.g. `+`.
    fn symbols(&self) -> &'static [&'static str];

    /// One-line description shown in help output.
    fn description(&self) -> &'static str;

    /// Applies the operation to two operands.
    fn apply(&self, a: Number, b: Number) -> CalculatorResult<Number>;

    /// Every key that selects this operation, word form first.
    fn keys(&self) -> Vec<&'static str> {
        std::iter::once(self.name()).chain(self.symbols().iter().copied()).collect()
    }
}
