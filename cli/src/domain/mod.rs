//! Domain layer — release types, validation, and the typed failure result.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod release;

pub use error::ReleaseError;
pub use release::{RemoteLink, SshTarget, Version, is_affirmative, is_release_tag};
