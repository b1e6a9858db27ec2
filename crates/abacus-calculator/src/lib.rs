#![deny(warnings)]
//! The calculator core for Abacus.
//!
//! This crate provides the `Operation` trait, the built-in arithmetic
//! operations, the `OperationFactory` that resolves an operation key to its
//! implementation, and the history-tracking `Calculator`.

pub mod built_in;
pub mod calculator;
pub mod error;
pub mod factory;
pub mod history;
pub mod operation;
pub mod registry;

pub use abacus_types::Number;
pub use calculator::Calculator;
pub use error::{CalculatorError, CalculatorResult};
pub use factory::{OperationFactory, resolve};
pub use history::HistoryRecord;
pub use operation::Operation;
pub use registry::OperationRegistry;
