//! release-latest — confirm a tagged release and repoint `latest` on the file server

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;
use release_latest::cli::Cli;
use release_latest::domain::ReleaseError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1; --help and --version keep clap's exit 0.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::from(1);
        }
        Err(e) => e.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(release) = err.downcast_ref::<ReleaseError>() {
        if release.reports_to_stdout() {
            println!("{release}");
        } else {
            eprintln!("{release}");
        }
        return ExitCode::from(release.exit_code());
    }
    eprintln!("fatal: {err:#}");
    ExitCode::from(1)
}
