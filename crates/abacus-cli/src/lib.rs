//! Command-line front end for Abacus.
//!
//! The binary in `main.rs` is a thin wrapper; everything it wires together
//! lives here so the shell can be driven from tests.

pub mod cli;
pub mod config;
pub mod logging;
pub mod repl;

pub use cli::{Cli, Commands, run};
pub use config::{AbacusConfig, ConfigSource};
pub use repl::Repl;
