//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::time::Duration;

use anyhow::Result;

use crate::domain::SshTarget;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
    /// Run a program with inherited stdio and return only its exit status.
    ///
    /// No timeout applies: the call returns when the program exits.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        (**self).run(program, args).await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        (**self).run_with_timeout(program, args, timeout).await
    }

    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        (**self).run_status(program, args).await
    }
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Release Ports ─────────────────────────────────────────────────────────────

/// Asks the operator to confirm the release.
pub trait Confirmer {
    /// Show `prompt` and return whether the answer was affirmative.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Version-control queries about the commit being released.
#[allow(async_fn_in_trait)]
pub trait TagInspector {
    /// Return the tag pointing exactly at the current commit and matching
    /// the glob `pattern`, or `None` if there is no such tag.
    ///
    /// # Errors
    ///
    /// Returns an error only if the query itself could not be run.
    async fn exact_tag(&self, pattern: &str) -> Result<Option<String>>;
}

/// Locates the private key used to authenticate against the file server.
#[allow(async_fn_in_trait)]
pub trait KeyLocator {
    /// Resolve the private key file path.
    async fn private_key(&self) -> Result<PathBuf>;
}

/// Executes a command line on a remote host.
#[allow(async_fn_in_trait)]
pub trait RemoteShell {
    /// Run `command` on `target`, authenticating with `key`.
    ///
    /// The command line is handed to the remote login shell verbatim.
    async fn exec(&self, target: &SshTarget, key: &Path, command: &str) -> Result<ExitStatus>;
}
