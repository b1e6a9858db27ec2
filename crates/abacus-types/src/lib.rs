//! Abacus Types
//!
//! This crate defines the value types shared across the Abacus workspace
//! (currently `abacus-calculator` and `abacus-cli`). Keeping `Number` here
//! lets the shell parse operands without depending on calculator internals.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod types;
pub use types::{Number, ParseNumberError};
