use std::io::{self, Write};
use std::path::PathBuf;

use abacus_calculator::{Calculator, OperationRegistry};
use abacus_types::Number;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::AbacusConfig;
use crate::repl::Repl;

/// Basic arithmetic calculator with calculation history
#[derive(Parser, Debug)]
#[command(name = "abacus", version)]
pub struct Cli {
    /// Configuration file (defaults to $ABACUS_CONFIG_PATH, then ./abacus.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive shell (the default)
    Repl,
    /// Evaluate a single calculation
    Eval(EvalArgs),
    /// List supported operations and their keys
    Operations,
}

/// Arguments for eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Operation key, e.g. `add` or `+`
    #[arg(allow_hyphen_values = true)]
    pub operation: String,

    /// First operand
    #[arg(allow_negative_numbers = true)]
    pub a: Number,

    /// Second operand
    #[arg(allow_negative_numbers = true)]
    pub b: Number,

    /// Print the calculation record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the parsed command against stdin/stdout
pub fn run(cli: Cli, config: &AbacusConfig) -> Result<()> {
    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let stdin = io::stdin();
            let mut repl = Repl::new(config.repl.clone(), stdin.lock(), io::stdout());
            repl.run().context("Shell I/O failed")
        }
        Commands::Eval(args) => eval(&args, &mut io::stdout().lock()),
        Commands::Operations => list_operations(&mut io::stdout().lock()),
    }
}

/// Perform one calculation and print its result
pub fn eval(args: &EvalArgs, out: &mut impl Write) -> Result<()> {
    let mut calculator = Calculator::new();
    let result = calculator.calculate(&args.operation, args.a, args.b)?;

    if args.json {
        let record = calculator.last().context("Calculation was not recorded")?;
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{result}")?;
    }
    Ok(())
}

/// Print every operation with its keys
pub fn list_operations(out: &mut impl Write) -> Result<()> {
    for operation in OperationRegistry::builtin().operations() {
        writeln!(
            out,
            "{:<10} {:<12} {}",
            operation.name(),
            operation.symbols().join(" "),
            operation.description()
        )?;
    }
    Ok(())
}
