use std::process::ExitCode;

use clap::Parser;
use lmist_cli::cli::Cli;
use lmist_cli::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("lmist: {err:#}");
    }

    match lmist_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("✖ {err:#}");
            ExitCode::FAILURE
        }
    }
}
