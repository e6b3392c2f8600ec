//! Confirmation prompt
//!
//! The confirmation gate is the only point where a run waits for the user.
//! Only `y`/`Y` is affirmative; anything else, including EOF, declines.

use std::io::{self, BufRead, Write};

/// Source of the yes/no decision
pub trait Confirm {
    /// Ask the question and block until an answer is available
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Returns true only for a `y`/`Y` answer, ignoring surrounding whitespace
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Prompt that writes the question to `output` and reads one line from `input`
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Create a prompt over arbitrary reader/writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt bound to the process terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{} [y/N] ", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer)?;
        if read == 0 {
            // EOF: finish the prompt line so later output starts cleanly
            writeln!(self.output)?;
            return Ok(false);
        }

        Ok(is_affirmative(&answer))
    }
}
