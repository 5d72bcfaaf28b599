//! Application service — publish-latest use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{
    Confirmer, KeyLocator, ProgressReporter, RemoteShell, TagInspector,
};
use crate::domain::release::RELEASE_TAG_PATTERN;
use crate::domain::{ReleaseError, RemoteLink, SshTarget, Version, is_release_tag};

/// Inputs for [`publish_latest`].
pub struct PublishOptions<'a, R: ProgressReporter> {
    pub reporter: &'a R,
    pub version: &'a Version,
    pub target: &'a SshTarget,
    /// Stop after resolving the key; nothing is run on the remote host.
    pub dry_run: bool,
}

/// Outcome of the `publish_latest` use-case.
#[derive(Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The remote `latest` link now points at the release.
    Published { tag: String, command: String },
    /// Every check passed; the remote command was not run.
    DryRun {
        tag: String,
        key: PathBuf,
        command: String,
    },
}

/// Confirm, verify the release tag, and repoint the remote `latest` link.
///
/// Steps run strictly in order and the first failure ends the run: the
/// remote host is never contacted unless the operator confirmed and the
/// current commit carries a `v*` tag.
///
/// # Errors
///
/// Returns [`ReleaseError::Aborted`] if the operator declines,
/// [`ReleaseError::MissingReleaseTag`] if the commit is not tagged,
/// [`ReleaseError::CommandFailed`] if the remote command exits non-zero,
/// and any error raised by the ports themselves.
pub async fn publish_latest(
    confirmer: &impl Confirmer,
    tags: &impl TagInspector,
    keys: &impl KeyLocator,
    remote: &impl RemoteShell,
    opts: PublishOptions<'_, impl ProgressReporter>,
) -> Result<PublishOutcome> {
    let PublishOptions {
        reporter,
        version,
        target,
        dry_run,
    } = opts;

    let prompt = format!("Release version {version} as latest? [y/N]");
    if !confirmer.confirm(&prompt)? {
        return Err(ReleaseError::Aborted.into());
    }

    let tag = tags
        .exact_tag(RELEASE_TAG_PATTERN)
        .await
        .context("checking release tag")?
        .filter(|tag| is_release_tag(tag))
        .ok_or(ReleaseError::MissingReleaseTag)?;
    reporter.success(&format!("Commit is tagged {tag}"));
    if !version.matches_tag(&tag) {
        reporter.warn(&format!(
            "Tag {tag} does not match version {version}; continuing"
        ));
    }

    let command = RemoteLink::new(version).command()?;
    let key = keys.private_key().await.context("resolving SSH key")?;

    if dry_run {
        return Ok(PublishOutcome::DryRun { tag, key, command });
    }

    reporter.step(&format!(
        "Pointing {} at {version} on {}",
        RemoteLink::link_path(),
        target.address
    ));
    let status = remote
        .exec(target, &key, &command)
        .await
        .with_context(|| format!("connecting to {}", target.address))?;
    if !status.success() {
        return Err(ReleaseError::CommandFailed {
            program: "ssh".to_string(),
            code: status.code(),
        }
        .into());
    }

    Ok(PublishOutcome::Published { tag, command })
}
