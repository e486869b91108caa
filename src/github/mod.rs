//! GitHub access layer.
//!
//! This module wraps Octocrab behind small gateway traits, validates
//! repository identifiers and tokens, and maps Octocrab failures into
//! [`IntakeError`] variants so callers can surface precise messages without
//! depending on Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use error::IntakeError;
pub use gateway::{
    ListPullRequestsParams, OctocrabGateway, PaginatedPullRequests, PullRequestGateway,
    RepositoryGateway, ReviewCommentGateway,
};
pub use locator::{
    DEFAULT_API_BASE, PersonalAccessToken, RepositoryIdentifier, RepositoryName, RepositoryOwner,
    parse_api_base,
};
pub use models::{PullRequestDetail, PullRequestSummary, RemoteReviewComment};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::{MockPullRequestGateway, MockRepositoryGateway, MockReviewCommentGateway};
