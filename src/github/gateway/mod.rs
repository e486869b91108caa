//! Gateways for reading repositories, pull requests, and review comments.
//!
//! The traits are the seams the collection pipeline depends on; the Octocrab
//! implementation handles the real HTTP requests, and mocks stand in for it
//! in tests.

mod client;
mod error_mapping;
mod pull_request;
mod repository;
mod review_comments;
mod types;

pub use pull_request::OctocrabGateway;
pub use types::{ListPullRequestsParams, PaginatedPullRequests};

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::RepositoryIdentifier;
use crate::github::models::{PullRequestDetail, RemoteReviewComment};

/// Gateway for repository-level operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Confirms the repository exists and is readable with the current token.
    async fn check_repository(&self, repository: &RepositoryIdentifier) -> Result<(), IntakeError>;

    /// Fetches one page of the repository's pull request listing.
    async fn list_pull_requests(
        &self,
        repository: &RepositoryIdentifier,
        params: &ListPullRequestsParams,
    ) -> Result<PaginatedPullRequests, IntakeError>;
}

/// Gateway that can load a single pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch the full pull request record.
    async fn pull_request(
        &self,
        repository: &RepositoryIdentifier,
        number: u64,
    ) -> Result<PullRequestDetail, IntakeError>;
}

/// Gateway for fetching PR review comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCommentGateway: Send + Sync {
    /// Fetch every inline review comment of the pull request, across all pages.
    async fn list_review_comments(
        &self,
        repository: &RepositoryIdentifier,
        number: u64,
    ) -> Result<Vec<RemoteReviewComment>, IntakeError>;
}
