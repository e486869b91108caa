//! Incremental collection of review comments from closed pull requests.
//!
//! A run scans closed pull requests newest-closed first, keeps those whose
//! close instant falls within a [`DateRange`] of the reporting timezone, and
//! fetches and stores only the ones not already present in a
//! [`ReviewStore`](crate::persistence::ReviewStore).

mod date_range;
mod error;
mod fetch;
mod filter;
mod model;
mod orchestrator;
mod scanner;

pub use date_range::{DEFAULT_TIMEZONE, DateRange, DateRangeError, ReportingTimezone};
pub use error::{CollectionError, FetchError, ScanError, error_chain};
pub use fetch::{GatewayFetcher, PullRequestFetcher};
pub use filter::{AuthorDenylistFilter, CommentFilter, DEFAULT_EXCLUDED_AUTHORS};
pub use model::{
    GHOST_AUTHOR, PullRequestBasicInfo, PullRequestMetadata, ReviewComment, display_position,
};
pub use orchestrator::{CollectionOrchestrator, CollectionSummary};
pub use scanner::ClosedPullRequestScan;

#[cfg(test)]
pub use fetch::MockPullRequestFetcher;
