//! `RemoteShell` backed by the system `ssh` binary.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::Result;

use crate::application::ports::{CommandRunner, RemoteShell};
use crate::domain::SshTarget;
use crate::domain::release::ssh_args;

/// Runs remote commands through `ssh -i <key> <address> <command>`.
///
/// Stdio is inherited so key passphrase and host-key prompts reach the
/// operator.
pub struct SshRemoteShell<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SshRemoteShell<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> RemoteShell for SshRemoteShell<R> {
    async fn exec(&self, target: &SshTarget, key: &Path, command: &str) -> Result<ExitStatus> {
        anyhow::ensure!(
            key.to_str().is_some(),
            "SSH key path {} is not valid UTF-8",
            key.display()
        );
        let args = ssh_args(target, key, command);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner.run_status("ssh", &args).await
    }
}
