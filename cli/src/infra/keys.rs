//! `KeyLocator` implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, KeyLocator};
use crate::domain::ReleaseError;
use crate::domain::release::KEY_SUBPATH;

/// Derives the key from the Radicle home reported by `rad path`.
pub struct RadKeyLocator<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> RadKeyLocator<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> KeyLocator for RadKeyLocator<R> {
    async fn private_key(&self) -> Result<PathBuf> {
        let output = self
            .runner
            .run("rad", &["path"])
            .await
            .context("running rad path")?;

        if !output.status.success() {
            return Err(ReleaseError::CommandFailed {
                program: "rad path".to_string(),
                code: output.status.code(),
            }
            .into());
        }

        let home = String::from_utf8(output.stdout).context("rad path printed invalid UTF-8")?;
        let home = home.trim();
        anyhow::ensure!(!home.is_empty(), "rad path printed an empty path");

        Ok(PathBuf::from(home).join(KEY_SUBPATH))
    }
}

/// A key path given explicitly through `--ssh-key` / `SSH_KEY`.
pub struct FixedKeyLocator(PathBuf);

impl FixedKeyLocator {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }
}

impl KeyLocator for FixedKeyLocator {
    async fn private_key(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Either an explicit key or one found through `rad path`.
pub enum ConfiguredKeyLocator<R: CommandRunner> {
    Fixed(FixedKeyLocator),
    Rad(RadKeyLocator<R>),
}

impl<R: CommandRunner> KeyLocator for ConfiguredKeyLocator<R> {
    async fn private_key(&self) -> Result<PathBuf> {
        match self {
            Self::Fixed(locator) => locator.private_key().await,
            Self::Rad(locator) => locator.private_key().await,
        }
    }
}
