//! Errors raised by the collection pipeline.

use thiserror::Error;

use crate::github::{IntakeError, RepositoryIdentifier};

/// Failure while discovering candidate pull requests. Always fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The repository could not be opened.
    #[error("cannot access repository {repository}")]
    RepositoryAccess {
        /// Repository that was requested.
        repository: RepositoryIdentifier,
        /// Underlying GitHub failure.
        #[source]
        source: IntakeError,
    },

    /// A page of the pull request listing could not be read.
    #[error("failed to list closed pull requests of {repository}")]
    Enumeration {
        /// Repository being scanned.
        repository: RepositoryIdentifier,
        /// Underlying GitHub failure.
        #[source]
        source: IntakeError,
    },
}

/// Failure while fetching one pull request. Recoverable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The pull request record could not be retrieved.
    #[error("failed to fetch pull request #{number}")]
    Request {
        /// Pull request number.
        number: u64,
        /// Underlying GitHub failure.
        #[source]
        source: IntakeError,
    },

    /// GitHub reports the pull request as open.
    #[error("pull request #{number} has no close timestamp")]
    NotClosed {
        /// Pull request number.
        number: u64,
    },
}

/// Run-level failure of a collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// Discovery failed; no further candidates were processed.
    #[error("collection aborted")]
    Scan(#[from] ScanError),
}

/// Joins an error's message with the messages of its sources, outermost
/// first, separated by `": "`.
#[must_use]
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
