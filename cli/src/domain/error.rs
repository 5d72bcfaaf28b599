//! Typed release failures.
//!
//! Every user-facing way a release run can stop short of `Done.` is a
//! variant here. Variants convert to `anyhow::Error` via `?` and are
//! recovered in `main` with `downcast_ref` to pick the stream and exit code.

use thiserror::Error;

/// A release run that did not complete.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReleaseError {
    #[error("fatal: empty version number")]
    EmptyVersion,

    #[error("fatal: invalid version number '{0}'")]
    InvalidVersion(String),

    #[error("Operation aborted.")]
    Aborted,

    #[error("fatal: release tag must start with 'v'")]
    MissingReleaseTag,

    #[error("fatal: `{program}` {}", describe_exit(*.code))]
    CommandFailed { program: String, code: Option<i32> },
}

impl ReleaseError {
    /// Process exit code for this failure.
    ///
    /// A failed external command hands its own non-zero code through;
    /// everything else exits with `1`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::CommandFailed {
                code: Some(code), ..
            } => u8::try_from(*code)
                .ok()
                .filter(|c| *c != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }

    /// Whether the message belongs on stdout rather than stderr.
    ///
    /// A declined prompt and an untagged commit are ordinary outcomes of an
    /// interactive run, so they are reported alongside the prompt.
    #[must_use]
    pub fn reports_to_stdout(&self) -> bool {
        matches!(self, Self::Aborted | Self::MissingReleaseTag)
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}
