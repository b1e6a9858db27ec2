use std::fmt;

use abacus_types::Number;
use serde::Serialize;

/// One completed calculation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRecord {
    key: String,
    a: Number,
    b: Number,
    result: Number,
}

impl HistoryRecord {
    pub(crate) fn new(key: &str, a: Number, b: Number, result: Number) -> Self {
        Self { key: key.to_string(), a, b, result }
    }

    /// The operation key as it was invoked
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn a(&self) -> Number {
        self.a
    }

    pub fn b(&self) -> Number {
        self.b
    }

    pub fn result(&self) -> Number {
        self.result
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.key, self.a, self.b, self.result)
    }
}
