//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;
use clap::builder::FalseyValueParser;

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Point the file server's `latest` release link at a tagged version
#[derive(Parser, Debug)]
#[command(name = "release-latest", version)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    #[command(flatten)]
    pub publish: commands::publish::PublishArgs,
}

impl Cli {
    /// Execute the release.
    ///
    /// # Errors
    ///
    /// Returns an error if any step of the release fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            publish,
        } = self;
        let app = AppContext::new(&AppFlags {
            output: OutputFlags { no_color, quiet },
            behaviour: BehaviourFlags { yes: publish.yes },
        });
        commands::publish::run(&app, publish).await
    }
}
