use abacus_cli::{AbacusConfig, Cli, logging};
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, source) = AbacusConfig::load(cli.config.as_deref())?;
    let config = config.with_log_level(cli.log_level.clone());
    logging::init_logging(&config.logging)?;
    source.report();

    info!(version = env!("CARGO_PKG_VERSION"), config = %source, "Starting Abacus");

    abacus_cli::run(cli, &config)
}
