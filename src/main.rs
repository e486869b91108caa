//! Gleaner CLI entrypoint for review-comment collection.

use std::io::{self, Write};
use std::process::ExitCode;

use gleaner::{GleanerConfig, IntakeError};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "error: {}", cli::error_chain(&error)).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), cli::CliError> {
    let config = load_config()?;
    cli::logging::init(config.verbose);

    let summary = cli::collect::run(&config).await?;

    let mut stdout = io::stdout().lock();
    cli::output::write_summary(&mut stdout, &summary)?;
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<GleanerConfig, IntakeError> {
    GleanerConfig::load().map_err(|error| IntakeError::Configuration {
        message: error.to_string(),
    })
}
