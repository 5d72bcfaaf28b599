//! Property-based tests for confirmation parsing and remote command rendering.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use release_latest::domain::{RemoteLink, SshTarget, Version, is_affirmative};

proptest! {
    /// Anything starting with `y` or `Y` confirms, whatever follows.
    #[test]
    fn prop_y_prefix_confirms(first in "[yY]", rest in "\\PC{0,20}") {
        let line = format!("{first}{rest}");
        prop_assert!(is_affirmative(&line), "rejected: {line:?}");
    }

    /// Anything not starting with `y` or `Y` declines.
    #[test]
    fn prop_other_prefix_declines(line in "[^yY]\\PC{0,20}") {
        prop_assert!(!is_affirmative(&line), "accepted: {line:?}");
    }

    /// Ordinary version strings appear verbatim in the remote command.
    #[test]
    fn prop_plain_versions_render_verbatim(raw in "v?[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}(-rc\\.[0-9])?") {
        let version = Version::parse(&raw).expect("valid version");
        let command = RemoteLink::new(&version).command().expect("command");
        prop_assert_eq!(
            command,
            format!("ln -snf /mnt/radicle/files/releases/{raw} /mnt/radicle/files/releases/latest")
        );
    }

    /// Any printable version is accepted and reaches the remote shell as a
    /// single word, metacharacters included.
    #[test]
    fn prop_printable_versions_quote_to_one_word(raw in "[ -~]{1,24}") {
        let version = Version::parse(&raw).expect("valid version");
        let command = RemoteLink::new(&version).command().expect("command");
        let words = shlex::split(&command).expect("command splits");
        prop_assert_eq!(words.len(), 4);
        prop_assert_eq!(&words[2], &format!("/mnt/radicle/files/releases/{raw}"));
    }

    /// Without an explicit address the login always targets the file server.
    #[test]
    fn prop_login_derives_address(login in "[a-z][a-z0-9_-]{0,15}") {
        let target = SshTarget::resolve(Some(&login), None);
        prop_assert_eq!(target.address, format!("{login}@files.radicle.xyz"));
    }
}
