//! Gleaner library crate: incremental collection of GitHub pull request
//! review comments.
//!
//! The library scans a repository's closed pull requests within a date
//! window, skips those already stored locally, and fetches, filters, and
//! persists the rest. GitHub access is wrapped by Octocrab-backed gateways so
//! every stage can be exercised against mocks or a local HTTP server.

pub mod collection;
pub mod config;
pub mod export;
pub mod github;
pub mod persistence;
pub mod telemetry;

pub use collection::{
    AuthorDenylistFilter, CollectionError, CollectionOrchestrator, CollectionSummary, DateRange,
    GatewayFetcher, ReportingTimezone,
};
pub use config::GleanerConfig;
pub use github::{IntakeError, OctocrabGateway, PersonalAccessToken, RepositoryIdentifier};
pub use persistence::{FilesystemReviewStore, ReviewStore};
