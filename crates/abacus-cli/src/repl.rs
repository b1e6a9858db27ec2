//! Interactive calculator shell
//!
//! Reads one command per line: `<operation> <a> <b>`, or one of the bare
//! commands `help`, `history` and `exit`. Errors are reported on the output
//! and the loop keeps going; only I/O failures end the session early.

use std::io::{self, BufRead, Write};

use abacus_calculator::Calculator;
use abacus_types::{Number, ParseNumberError};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ReplConfig;

/// Why the operand part of a command line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperandError {
    #[error("Error: You must provide exactly 2 numbers.")]
    WrongCount(usize),
    #[error("Error: Invalid number format.")]
    InvalidNumber(#[source] ParseNumberError),
}

/// Parse exactly two operands, checking the count before parsing anything
pub fn parse_operands(tokens: &[&str]) -> Result<(Number, Number), OperandError> {
    let [a, b] = tokens else {
        return Err(OperandError::WrongCount(tokens.len()));
    };
    let a = a.parse().map_err(OperandError::InvalidNumber)?;
    let b = b.parse().map_err(OperandError::InvalidNumber)?;
    Ok((a, b))
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive shell over any line source and output sink
pub struct Repl<R, W> {
    calculator: Calculator<'static>,
    config: ReplConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(config: ReplConfig, input: R, output: W) -> Self {
        Self { calculator: Calculator::new(), config, input, output }
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        if self.config.banner {
            writeln!(self.output, "Welcome to Abacus! Type 'help' for commands.")?;
        }

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                writeln!(self.output, "Goodbye!")?;
                break;
            }

            if let Flow::Exit = self.handle_line(&line)? {
                break;
            }
        }

        info!(calculations = self.calculator.history().len(), "Shell session ended");
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((first, rest)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };
        let command = first.to_lowercase();
        debug!(command = %command, args = rest.len(), "Dispatching shell command");

        match command.as_str() {
            "exit" | "quit" => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
            "help" => self.show_help()?,
            "history" => self.show_history()?,
            _ => self.evaluate(&command, rest)?,
        }
        Ok(Flow::Continue)
    }

    fn evaluate(&mut self, command: &str, operands: &[&str]) -> io::Result<()> {
        let (a, b) = match parse_operands(operands) {
            Ok(operands) => operands,
            Err(err) => return writeln!(self.output, "{err}"),
        };

        match self.calculator.calculate(command, a, b) {
            Ok(result) => writeln!(self.output, "Result: {result}"),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    fn show_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available commands:")?;
        for operation in self.calculator.factory().registry().operations() {
            let keys = operation.keys().join(", ");
            writeln!(self.output, "  {keys:<16} : {}", operation.description())?;
        }
        writeln!(self.output, "  {:<16} : Show past calculations", "history")?;
        writeln!(self.output, "  {:<16} : Show this message", "help")?;
        writeln!(self.output, "  {:<16} : Exit the calculator", "exit")?;
        writeln!(self.output, "Usage:")?;
        writeln!(self.output, "  Enter operation followed by two numbers separated by space.")?;
        writeln!(self.output, "Example:")?;
        writeln!(self.output, "  add 5 10")
    }

    fn show_history(&mut self) -> io::Result<()> {
        let history = self.calculator.history();
        if history.is_empty() {
            return writeln!(self.output, "No calculations yet.");
        }
        for (i, record) in history.iter().enumerate() {
            writeln!(self.output, "{}: {record}", i + 1)?;
        }
        Ok(())
    }

    pub fn calculator(&self) -> &Calculator<'static> {
        &self.calculator
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
