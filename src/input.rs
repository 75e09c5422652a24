//! Line-oriented console prompts over injectable streams.
//!
//! All reads and writes go through a [`Prompter`] that owns a `BufRead`
//! input and a `Write` output. The binary hands it locked stdin/stdout;
//! tests hand it scripted byte buffers, so every prompt sequence can be
//! exercised without a console.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Why an integer prompt failed.
///
/// Every variant is recoverable: callers re-prompt or fall back to a
/// default, they never abort.
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// The input stream is closed (end of input).
    #[error("input stream closed")]
    Eof,
    /// Reading or writing the underlying stream failed.
    #[error("stream error: {0}")]
    Io(#[from] io::Error),
    /// The line was empty or contained only whitespace.
    #[error("empty input")]
    Empty,
    /// The trimmed line is not a single integer within `i32` bounds.
    #[error("not a valid integer: {0:?}")]
    Invalid(String),
}

/// Prompt/read pair bound to one input and one output stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `prompt`, read one line, and parse it as an `i32`.
    ///
    /// Whitespace around the number is tolerated; anything else on the
    /// line is not. `"  42  "` parses, `"12a"`, `"a12"` and `"1 2"` do
    /// not, and neither does text whose magnitude exceeds `i32`.
    pub fn read_integer(&mut self, prompt: &str) -> Result<i32, ParseFailure> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ParseFailure::Eof);
        }

        let text = line.trim();
        if text.is_empty() {
            return Err(ParseFailure::Empty);
        }

        text.parse()
            .map_err(|_| ParseFailure::Invalid(text.to_owned()))
    }

    /// Write `prompt`, read one line, and interpret it as yes/no.
    ///
    /// Affirmative only when the first non-whitespace character is `y` or
    /// `Y`. Read failure, closed input, and blank lines all count as no.
    pub fn ask_yes_no(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{prompt}").is_err() || self.output.flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => line
                .trim_start()
                .chars()
                .next()
                .is_some_and(|c| c.eq_ignore_ascii_case(&'y')),
        }
    }

    /// Write one message line to the output stream.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    /// Tear down the prompter, returning the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
