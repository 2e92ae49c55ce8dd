//! Secret line input backends.
//!
//! Reading a secret line is one capability with two backends: masked entry on
//! an interactive terminal, and a direct line read from a piped or redirected
//! stream. A single interactivity check on stdin picks the backend at startup;
//! from then on the resolution pipeline only sees the [`SecretSource`] trait.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;

use crate::resolver::ResolveError;

/// One blocking "read a secret line" capability.
pub trait SecretSource {
    /// Block until one secret line is available and return it without its
    /// trailing line terminator. Empty input comes back as an empty string;
    /// emptiness is judged by the caller, not here.
    fn read_secret(&mut self) -> Result<String, ResolveError>;
}

/// Masked (non-echoing) entry on the user's terminal.
///
/// The prompt renders on stderr, keeping stdout free for the secret itself.
pub struct TerminalPrompt {
    prompt: String,
}

impl TerminalPrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl SecretSource for TerminalPrompt {
    fn read_secret(&mut self) -> Result<String, ResolveError> {
        // Empty entry is accepted here so the pipeline validates emptiness in
        // one place; dialoguer would otherwise re-prompt in a loop.
        let secret = Password::new()
            .with_prompt(self.prompt.clone())
            .allow_empty_password(true)
            .interact()?;
        Ok(secret)
    }
}

/// Exactly one line from a non-interactive stream.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> SecretSource for LineSource<R> {
    fn read_secret(&mut self) -> Result<String, ResolveError> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Pick the backend for this process: masked entry when stdin is a real
/// terminal, otherwise one line straight from stdin.
pub fn detect_source(prompt: &str) -> Box<dyn SecretSource> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompt::new(prompt))
    } else {
        Box::new(LineSource::new(io::stdin().lock()))
    }
}
