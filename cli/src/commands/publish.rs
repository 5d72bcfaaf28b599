//! `release-latest <VERSION>` — confirm, check the tag, repoint `latest`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use clap::builder::FalseyValueParser;

use crate::app::AppContext;
use crate::application::services::publish::{PublishOptions, PublishOutcome, publish_latest};
use crate::domain::release::ssh_args;
use crate::domain::{SshTarget, Version};
use crate::output::TerminalReporter;

/// Arguments for publishing a release as `latest`.
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Release version to point `latest` at, e.g. 1.2.0
    #[arg(value_name = "VERSION")]
    pub release: String,

    /// Skip the confirmation prompt
    #[arg(short, long, env = "RELEASE_YES", value_parser = FalseyValueParser::new())]
    pub yes: bool,

    /// Run every check and print the ssh command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Login on the file server
    #[arg(long, env = "SSH_LOGIN", value_name = "LOGIN")]
    pub ssh_login: Option<String>,

    /// SSH destination [default: <LOGIN>@files.radicle.xyz]
    #[arg(long, env = "SSH_ADDRESS", value_name = "ADDRESS")]
    pub ssh_address: Option<String>,

    /// Private key file [default: $(rad path)/keys/radicle]
    #[arg(long, env = "SSH_KEY", value_name = "PATH")]
    pub ssh_key: Option<PathBuf>,
}

impl PublishArgs {
    /// Remote target from `--ssh-login` / `--ssh-address` and their env vars.
    #[must_use]
    pub fn target(&self) -> SshTarget {
        SshTarget::resolve(self.ssh_login.as_deref(), self.ssh_address.as_deref())
    }
}

/// Run the publish command.
///
/// # Errors
///
/// Returns a `ReleaseError` for every validation, abort, or remote failure,
/// and an `anyhow` error if an external program cannot be run at all.
pub async fn run(app: &AppContext, args: PublishArgs) -> Result<()> {
    let version = Version::parse(&args.release)?;
    let target = args.target();
    let keys = AppContext::key_locator(args.ssh_key);
    let reporter = TerminalReporter::new(&app.output);

    let outcome = publish_latest(
        app,
        &app.tags,
        &keys,
        &app.remote,
        PublishOptions {
            reporter: &reporter,
            version: &version,
            target: &target,
            dry_run: args.dry_run,
        },
    )
    .await?;

    match outcome {
        PublishOutcome::Published { .. } => {}
        PublishOutcome::DryRun { key, command, .. } => {
            let mut argv = vec!["ssh".to_string()];
            argv.extend(ssh_args(&target, &key, &command));
            let rendered = shlex::try_join(argv.iter().map(String::as_str))
                .unwrap_or_else(|_| argv.join(" "));
            app.output.kv("Would run:", &rendered);
        }
    }

    app.output.line("Done.");
    Ok(())
}
