//! Operation factory
//!
//! Resolves an operation key to its implementation. Word keys match
//! case-insensitively; symbol keys are unaffected by the lowercasing.

use tracing::trace;

use crate::error::{CalculatorError, CalculatorResult};
use crate::operation::Operation;
use crate::registry::OperationRegistry;

/// Resolves operation keys against a registry
#[derive(Debug, Clone, Copy)]
pub struct OperationFactory<'r> {
    registry: &'r OperationRegistry,
}

impl Default for OperationFactory<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationFactory<'static> {
    /// Factory over the built-in operation table
    pub fn new() -> Self {
        Self { registry: OperationRegistry::builtin() }
    }
}

impl<'r> OperationFactory<'r> {
    /// Factory over a caller-supplied registry
    pub fn with_registry(registry: &'r OperationRegistry) -> Self {
        Self { registry }
    }

    /// The registry this factory resolves against
    pub fn registry(&self) -> &'r OperationRegistry {
        self.registry
    }

    /// Look up the operation for `key`.
    ///
    /// # Errors
    /// `CalculatorError::UnknownOperation` carrying `key` exactly as given.
    pub fn resolve(&self, key: &str) -> CalculatorResult<&'r dyn Operation> {
        let normalized = key.to_lowercase();
        trace!(key, normalized = %normalized, "Resolving operation");
        self.registry.get(&normalized).ok_or_else(|| CalculatorError::unknown_operation(key))
    }
}

/// Resolve `key` against the built-in operation table
pub fn resolve(key: &str) -> CalculatorResult<&'static dyn Operation> {
    OperationFactory::new().resolve(key)
}
