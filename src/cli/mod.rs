//! CLI wiring for the collection binary.
//!
//! - [`collect`]: builds the GitHub-backed pipeline and runs it
//! - [`logging`]: installs the stderr `tracing` subscriber
//! - [`output`]: formats the run summary

use gleaner::{CollectionError, IntakeError};
use thiserror::Error;

pub mod collect;
pub mod logging;
pub mod output;

pub use gleaner::collection::error_chain;

/// Failure that ends the process with a non-zero status.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration, credential, or output failure.
    #[error(transparent)]
    Intake(#[from] IntakeError),

    /// The collection run aborted during discovery.
    #[error(transparent)]
    Collection(#[from] CollectionError),
}
