//! Release domain types: the version being published, the SSH login target,
//! and the remote `latest` link command.

use std::fmt;
use std::path::Path;

use crate::domain::error::ReleaseError;

/// Directory on the file server holding one subdirectory per release.
pub const RELEASES_DIR: &str = "/mnt/radicle/files/releases";

/// Name of the link inside [`RELEASES_DIR`] that tracks the newest release.
pub const LATEST_LINK: &str = "latest";

/// Glob the current commit's exact tag must match.
pub const RELEASE_TAG_PATTERN: &str = "v*";

/// Login used when `SSH_LOGIN` is unset.
pub const DEFAULT_SSH_LOGIN: &str = "release";

/// File server host used when `SSH_ADDRESS` is unset.
pub const DEFAULT_SSH_HOST: &str = "files.radicle.xyz";

/// Private key location relative to the directory printed by `rad path`.
pub const KEY_SUBPATH: &str = "keys/radicle";

// ── Version ───────────────────────────────────────────────────────────────────

/// A non-empty release version, e.g. `1.2.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    /// Validate a raw version argument.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::EmptyVersion`] for an empty string and
    /// [`ReleaseError::InvalidVersion`] if it contains a NUL byte, which no
    /// remote shell can carry.
    pub fn parse(raw: &str) -> Result<Self, ReleaseError> {
        if raw.is_empty() {
            return Err(ReleaseError::EmptyVersion);
        }
        if raw.contains('\0') {
            return Err(ReleaseError::InvalidVersion(raw.escape_default().to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `tag` names this version, with or without the `v` prefix.
    #[must_use]
    pub fn matches_tag(&self, tag: &str) -> bool {
        tag == self.0 || tag.strip_prefix('v') == Some(self.0.as_str())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a tag reported by git qualifies as a release tag.
#[must_use]
pub fn is_release_tag(tag: &str) -> bool {
    tag.starts_with('v')
}

/// Whether a confirmation line counts as "yes".
///
/// Only the first character is inspected: `y`, `Y`, `yes`, `Yep` all
/// qualify; an empty line (or end of input) does not.
#[must_use]
pub fn is_affirmative(line: &str) -> bool {
    line.starts_with(['y', 'Y'])
}

// ── SSH target ────────────────────────────────────────────────────────────────

/// Remote login target (`login@host`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshTarget {
    /// Login name, used to derive the default address.
    pub login: String,
    /// Address handed to `ssh`, normally `login@host`.
    pub address: String,
}

impl SshTarget {
    /// Resolve the target from optional overrides.
    ///
    /// Empty values count as unset. Without an explicit address the login
    /// is combined with [`DEFAULT_SSH_HOST`].
    #[must_use]
    pub fn resolve(login: Option<&str>, address: Option<&str>) -> Self {
        let login = login
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_SSH_LOGIN)
            .to_string();
        let address = match address.filter(|a| !a.is_empty()) {
            Some(address) => address.to_string(),
            None => format!("{login}@{DEFAULT_SSH_HOST}"),
        };
        Self { login, address }
    }
}

impl Default for SshTarget {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

// ── Remote link ───────────────────────────────────────────────────────────────

/// The `latest` link on the file server, pointed at one release directory.
#[derive(Debug, Clone, Copy)]
pub struct RemoteLink<'a> {
    version: &'a Version,
}

impl<'a> RemoteLink<'a> {
    #[must_use]
    pub fn new(version: &'a Version) -> Self {
        Self { version }
    }

    /// Absolute path of the release directory the link will point at.
    #[must_use]
    pub fn target_path(&self) -> String {
        format!("{RELEASES_DIR}/{}", self.version)
    }

    /// Absolute path of the link itself.
    #[must_use]
    pub fn link_path() -> String {
        format!("{RELEASES_DIR}/{LATEST_LINK}")
    }

    /// Command line executed by the remote login shell.
    ///
    /// `-n` keeps `ln` from descending into the directory an existing
    /// `latest` link points at, so the link itself is replaced. The target
    /// path is quoted only when it holds shell metacharacters.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::InvalidVersion`] if the version cannot be
    /// quoted for a POSIX shell.
    pub fn command(&self) -> Result<String, ReleaseError> {
        let target = self.target_path();
        let quoted = shlex::try_quote(&target).map_err(|_| {
            ReleaseError::InvalidVersion(self.version.as_str().escape_default().to_string())
        })?;
        Ok(format!("ln -snf {quoted} {}", Self::link_path()))
    }
}

/// Argument vector for the `ssh` invocation that runs `command` on `target`.
#[must_use]
pub fn ssh_args(target: &SshTarget, key: &Path, command: &str) -> Vec<String> {
    vec![
        "-i".to_string(),
        key.display().to_string(),
        target.address.clone(),
        command.to_string(),
    ]
}
