use std::io::{BufRead, Write};

use crate::utils::error::{Result, SetupError};

/// Default number of attempts for a yes/no question
pub const DEFAULT_RETRY_LIMIT: u32 = 3;

/// Line-oriented terminal prompts over any reader/writer pair
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    retry_limit: u32,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_retry_limit(input, output, DEFAULT_RETRY_LIMIT)
    }

    /// A retry limit of zero is treated as one attempt
    pub fn with_retry_limit(input: R, output: W, retry_limit: u32) -> Self {
        Self {
            input,
            output,
            retry_limit: retry_limit.max(1),
        }
    }

    pub fn retry_limit(&self) -> u32 {
        self.retry_limit
    }

    /// Show `prompt` and return the answer with surrounding whitespace removed
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::error!("No input received.");
            return Err(SetupError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question until a recognised answer or the retry limit.
    ///
    /// "yes"/"y" map to `true` and "no"/"n" to `false`, case-insensitively.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        for _ in 0..self.retry_limit {
            let response = self.ask(prompt)?.to_lowercase();
            match parse_yes_no(&response) {
                Some(answer) => return Ok(answer),
                None => tracing::warn!("Invalid input. Please answer 'yes' or 'no'."),
            }
        }

        tracing::error!("Too many invalid inputs.");
        Err(SetupError::RetriesExhausted {
            attempts: self.retry_limit,
        })
    }

    /// Give back the underlying reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn parse_yes_no(response: &str) -> Option<bool> {
    match response {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}
