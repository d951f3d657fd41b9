//! Console prompts with membership validation.
//!
//! [`Console`] wraps any buffered reader and writer so the interactive flow can
//! run against stdin/stdout or against scripted input in tests.

use crate::error::{BikeshareError, Result};
use std::io::{self, BufRead, Write};

pub const DEFAULT_INVALID_INPUT: &str = "\ninvalid input, check your input and try again...\n";

/// Answer that declines a yes/no question. Anything else counts as yes.
pub const DECLINE: &str = "no";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one answer, trimmed and lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`BikeshareError::InputClosed`] when the input stream is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Re-prompts until the answer is one of `allowed`, then returns it.
    ///
    /// There is no retry limit; only a closed input stream ends the loop early.
    pub fn choose(&mut self, allowed: &[&str], prompt: &str, invalid: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if allowed.contains(&answer.as_str()) {
                return Ok(answer);
            }
            tracing::debug!(answer = %answer, "rejected answer outside the allowed set");
            writeln!(self.output, "{invalid}")?;
        }
    }

    /// Typed form of [`Console::choose`] over a `(key, value)` lookup table.
    pub fn choose_from<T: Copy>(
        &mut self,
        options: &[(&str, T)],
        prompt: &str,
        invalid: &str,
    ) -> Result<T> {
        let allowed: Vec<&str> = options.iter().map(|(key, _)| *key).collect();
        let answer = self.choose(&allowed, prompt, invalid)?;
        options
            .iter()
            .find(|(key, _)| *key == answer)
            .map(|(_, value)| *value)
            .ok_or_else(|| BikeshareError::Other(format!("no option named '{answer}'")))
    }

    /// Yes/no question where only the literal `no` declines.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)? != DECLINE)
    }
}
