//! `TagInspector` backed by the system `git` binary.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, TagInspector};

/// Queries tags with `git describe --exact-match`.
pub struct GitTagInspector<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> GitTagInspector<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> TagInspector for GitTagInspector<R> {
    async fn exact_tag(&self, pattern: &str) -> Result<Option<String>> {
        let match_arg = format!("--match={pattern}");
        let output = self
            .runner
            .run("git", &["describe", "--exact-match", &match_arg])
            .await
            .context("running git describe")?;

        // git exits 128 when no tag points at HEAD; that is an answer, not a failure.
        if !output.status.success() {
            tracing::debug!(
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "no exact tag"
            );
            return Ok(None);
        }

        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!tag.is_empty()).then_some(tag))
    }
}
