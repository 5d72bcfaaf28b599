//! `Confirmer` implementations.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::application::ports::Confirmer;
use crate::domain::is_affirmative;

/// Prompts on stdout and reads one line from stdin.
///
/// End of input counts as "no".
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{prompt} ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("reading confirmation")?;
        Ok(is_affirmative(&line))
    }
}

/// Answers "yes" without prompting (`--yes`, `RELEASE_YES`).
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        tracing::debug!(prompt, "confirmation skipped");
        Ok(true)
    }
}
