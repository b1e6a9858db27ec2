//! Operation table
//!
//! Maps every operation key, word and symbol alike, to a single registered
//! operation. Word keys are stored lowercase.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::warn;

use crate::built_in::{
    add::AddOperation, divide::DivideOperation, multiply::MultiplyOperation,
    power::PowerOperation, subtract::SubtractOperation,
};
use crate::operation::Operation;

static BUILTIN: LazyLock<OperationRegistry> = LazyLock::new(OperationRegistry::with_builtins);

/// Registry of operations keyed by word and symbol
#[derive(Default)]
pub struct OperationRegistry {
    operations: Vec<Box<dyn Operation>>,
    keys: HashMap<String, usize>,
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("operations", &self.operations.iter().map(|op| op.name()).collect::<Vec<_>>())
            .field("keys", &self.keys.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl OperationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { operations: Vec::new(), keys: HashMap::new() }
    }

    /// Create a registry holding the built-in arithmetic operations
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AddOperation));
        registry.register(Box::new(SubtractOperation));
        registry.register(Box::new(MultiplyOperation));
        registry.register(Box::new(DivideOperation));
        registry.register(Box::new(PowerOperation));
        registry
    }

    /// The shared, immutable table of built-in operations
    pub fn builtin() -> &'static OperationRegistry {
        &BUILTIN
    }

    /// Register an operation under its name and all of its symbols.
    /// A key already claimed by an earlier operation is reassigned.
    pub fn register(&mut self, operation: Box<dyn Operation>) {
        let index = self.operations.len();
        let word = operation.name().to_lowercase();
        let keys = std::iter::once(word).chain(operation.symbols().iter().map(|s| s.to_string()));
        for key in keys {
            if let Some(previous) = self.keys.insert(key.clone(), index) {
                warn!(
                    key = %key,
                    previous = self.operations[previous].name(),
                    replacement = operation.name(),
                    "Operation key registered twice"
                );
            }
        }
        self.operations.push(operation);
    }

    /// Exact-match lookup. Case normalization is the factory's job.
    pub fn get(&self, key: &str) -> Option<&dyn Operation> {
        self.keys.get(key).map(|&index| self.operations[index].as_ref())
    }

    /// Registered operations in registration order
    pub fn operations(&self) -> impl Iterator<Item = &dyn Operation> {
        self.operations.iter().map(|op| op.as_ref())
    }

    /// Number of distinct keys
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}
