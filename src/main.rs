#[macro_use]
extern crate tracing;

use clap::Parser;
use eyre::Result;
use service_external_ips::{
    config::{
        Args,
        Config,
    },
    error::Error,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::from_args(&args)?;
    debug!(?config, "resolved configuration");

    let mut stdout = std::io::stdout().lock();
    let result = service_external_ips::run(&config, &mut stdout).await;
    Ok(exit_status(result))
}

/// Logs a terminal error and maps it to its exit code.
fn exit_status(result: Result<usize, Error>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(exit_code = err.exit_code(), "{err}");
            debug!(?err, "run failed");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Logs go to stderr so that stdout only carries the report.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("service_external_ips=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
