use abacus_types::Number;
use tracing::debug;

use crate::error::CalculatorResult;
use crate::factory::OperationFactory;
use crate::history::HistoryRecord;

/// Applies operations by key and keeps an append-only log of every
/// successful calculation. The log lives and dies with the instance.
#[derive(Debug)]
pub struct Calculator<'r> {
    factory: OperationFactory<'r>,
    history: Vec<HistoryRecord>,
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator<'static> {
    pub fn new() -> Self {
        Self::with_factory(OperationFactory::new())
    }
}

impl<'r> Calculator<'r> {
    pub fn with_factory(factory: OperationFactory<'r>) -> Self {
        Self { factory, history: Vec::new() }
    }

    /// Resolve `key`, apply it to `(a, b)`, and record the calculation.
    ///
    /// Failures from resolution or evaluation are returned unchanged and
    /// leave the history untouched.
    pub fn calculate(
        &mut self,
        key: &str,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> CalculatorResult<Number> {
        let (a, b) = (a.into(), b.into());
        let result = self.factory.resolve(key).and_then(|operation| operation.apply(a, b));

        match result {
            Ok(value) => {
                let record = HistoryRecord::new(key, a, b, value);
                debug!(record = %record, entries = self.history.len() + 1, "Calculation recorded");
                self.history.push(record);
                Ok(value)
            }
            Err(err) => {
                debug!(key, %a, %b, category = err.category(), error = %err, "Calculation failed");
                Err(err)
            }
        }
    }

    /// Past calculations in call order
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// The most recent calculation, if any
    pub fn last(&self) -> Option<&HistoryRecord> {
        self.history.last()
    }

    pub fn factory(&self) -> &OperationFactory<'r> {
        &self.factory
    }
}
