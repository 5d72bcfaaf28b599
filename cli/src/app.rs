//! Application context — unified state passed to the command handler.
//!
//! `AppContext` owns the output context and the production adapters, so the
//! command handler only wires them into the publish service.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::Confirmer;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::confirm::{AssumeYes, StdinConfirmer};
use crate::infra::git::GitTagInspector;
use crate::infra::keys::{ConfiguredKeyLocator, FixedKeyLocator, RadKeyLocator};
use crate::infra::ssh::SshRemoteShell;
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip the confirmation prompt (also set by `RELEASE_YES`).
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to the command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// `git`-backed release tag lookup.
    pub tags: GitTagInspector<TokioCommandRunner>,
    /// `ssh`-backed remote execution.
    pub remote: SshRemoteShell<TokioCommandRunner>,
    /// When `true`, the confirmation prompt is answered "yes" without asking.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            tags: GitTagInspector::new(TokioCommandRunner::default()),
            remote: SshRemoteShell::new(TokioCommandRunner::default()),
            non_interactive: flags.behaviour.yes,
        }
    }

    /// Key locator honoring an explicit `--ssh-key` / `SSH_KEY` path.
    ///
    /// Without one (or with an empty one), the key is found through `rad path`.
    #[must_use]
    pub fn key_locator(explicit: Option<PathBuf>) -> ConfiguredKeyLocator<TokioCommandRunner> {
        match explicit.filter(|path| !path.as_os_str().is_empty()) {
            Some(path) => ConfiguredKeyLocator::Fixed(FixedKeyLocator::new(path)),
            None => ConfiguredKeyLocator::Rad(RadKeyLocator::new(TokioCommandRunner::default())),
        }
    }
}

impl Confirmer for AppContext {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.non_interactive {
            return AssumeYes.confirm(prompt);
        }
        StdinConfirmer.confirm(prompt)
    }
}
