//! Prompting helpers
//!
//! Every `read_*` keeps asking until the answer parses. End of input is an
//! `UnexpectedEof` I/O error so a closed stdin ends the session instead of
//! spinning.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::error::Result;

/// Date format accepted at prompts
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where prompts and messages go
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Non-empty, trimmed text
    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let value = self.read_line(prompt)?;
            if !value.is_empty() {
                return Ok(value);
            }
            writeln!(self.output, "Value cannot be empty.")?;
        }
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let value = self.read_line(prompt)?;
            match value.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    /// Decimal score in 0..=100
    pub fn read_score(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let value = self.read_line(prompt)?;
            match value.parse::<f64>() {
                Ok(score) if (0.0..=100.0).contains(&score) => return Ok(score),
                Ok(_) => writeln!(self.output, "Please enter a score between 0 and 100.")?,
                Err(_) => writeln!(self.output, "Please enter a valid decimal number.")?,
            }
        }
    }

    /// Calendar date as YYYY-MM-DD
    pub fn read_date(&mut self, prompt: &str) -> Result<NaiveDate> {
        loop {
            let value = self.read_line(prompt)?;
            match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
                Ok(date) => return Ok(date),
                Err(_) => writeln!(self.output, "Invalid date format. Use YYYY-MM-DD.")?,
            }
        }
    }

    /// y / yes / n / no, any case
    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let value = self.read_line(prompt)?.to_lowercase();
            match value.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y/n.")?,
            }
        }
    }

    /// Print `prompt`, read one line, trim it
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim().to_string())
    }
}
