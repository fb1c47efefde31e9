//! Helper functions that are common to CLI apps

use crate::cli::constants::*;
use crate::errors::BankingError;
use std::io::{self, BufRead, Write};

/// **Contains all menu lines.**
///
/// Wrapped by `menu()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added option.
fn menu_contents() -> String {
    MENU_ITEMS
        .iter()
        .map(|(number, label)| format!("{}. {}", number, label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// **A line-oriented console**
///
/// Reads answers from `input` and writes prompts and messages to `output`,
/// so it works the same over standard streams and over in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Gives back the output, e.g., to inspect what was written to a buffer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// **Prints all menu options.**
    pub fn menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", menu_contents())
    }

    /// Writes a line.
    pub fn say(&mut self, msg: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", msg)
    }

    /// **Writes `label` and reads one line of input.**
    ///
    /// The trailing line break is stripped, other whitespace is kept.
    ///
    /// Returns `None` at the end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }
}

/// **Parses a menu choice**
///
/// # Errors
/// - Not an integer, `BankingError::InvalidNumericInput`
pub fn parse_choice(text: &str) -> Result<i64, BankingError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| BankingError::InvalidNumericInput(text.trim().to_string()))
}

/// **Parses an amount or a rate**
///
/// Anything that reads as a floating-point number is accepted here,
/// including negative numbers; it is up to the core to judge the value.
///
/// # Errors
/// - Not a number, `BankingError::InvalidNumericInput`
pub fn parse_amount(text: &str) -> Result<f64, BankingError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| BankingError::InvalidNumericInput(text.trim().to_string()))
}
