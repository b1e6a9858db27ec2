//! Structured logging setup
//!
//! Logs go to stderr so they never interleave with shell output on stdout.
//! `RUST_LOG` directives take precedence over the configured level.

use std::sync::Once;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Build the filter for `config`, letting `RUST_LOG` add or override directives
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let level = config.level_filter()?;
    Ok(EnvFilter::builder().with_default_directive(level.into()).from_env_lossy())
}

/// Initialize the global subscriber. Only the first call takes effect.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        if config.json {
            registry.with(fmt::layer().json().with_writer(std::io::stderr)).init();
        } else {
            registry.with(fmt::layer().with_target(false).with_writer(std::io::stderr)).init();
        }
    });
    Ok(())
}
