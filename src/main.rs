//! qxp-admin - QuickXPos admin console

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quickxpos_admin::cli;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = cli::Cli::parse();
    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, so multi-line messages keep their shape
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
