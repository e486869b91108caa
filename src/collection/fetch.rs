//! Full fetch of one pull request and its inline review comments.

use async_trait::async_trait;

use crate::github::{PullRequestGateway, RepositoryIdentifier, ReviewCommentGateway};

use super::date_range::ReportingTimezone;
use super::error::FetchError;
use super::model::{PullRequestMetadata, ReviewComment};

/// Retrieves the complete record of a pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestFetcher: Send + Sync {
    /// Fetches metadata and every review comment of pull request `number`.
    async fn fetch(
        &self,
        number: u64,
        repository: &RepositoryIdentifier,
    ) -> Result<PullRequestMetadata, FetchError>;
}

/// [`PullRequestFetcher`] backed by the GitHub gateways.
pub struct GatewayFetcher<'a> {
    pull_requests: &'a dyn PullRequestGateway,
    review_comments: &'a dyn ReviewCommentGateway,
    timezone: ReportingTimezone,
}

impl<'a> GatewayFetcher<'a> {
    /// Creates a fetcher reporting timestamps in `timezone`.
    #[must_use]
    pub const fn new(
        pull_requests: &'a dyn PullRequestGateway,
        review_comments: &'a dyn ReviewCommentGateway,
        timezone: ReportingTimezone,
    ) -> Self {
        Self {
            pull_requests,
            review_comments,
            timezone,
        }
    }

    async fn review_comments(
        &self,
        number: u64,
        repository: &RepositoryIdentifier,
    ) -> Vec<ReviewComment> {
        match self
            .review_comments
            .list_review_comments(repository, number)
            .await
        {
            Ok(comments) => comments
                .into_iter()
                .map(|remote| ReviewComment::from_remote(remote, self.timezone))
                .collect(),
            Err(error) => {
                tracing::warn!(
                    pr = number,
                    %repository,
                    "failed to list review comments, recording none: {error}"
                );
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl PullRequestFetcher for GatewayFetcher<'_> {
    async fn fetch(
        &self,
        number: u64,
        repository: &RepositoryIdentifier,
    ) -> Result<PullRequestMetadata, FetchError> {
        let detail = self
            .pull_requests
            .pull_request(repository, number)
            .await
            .map_err(|source| FetchError::Request { number, source })?;
        let closed_at = detail
            .closed_at
            .map(|instant| self.timezone.localise(instant))
            .ok_or(FetchError::NotClosed { number })?;

        let review_comments = self.review_comments(number, repository).await;

        Ok(PullRequestMetadata {
            number: detail.number,
            title: detail.title.unwrap_or_default(),
            closed_at,
            is_merged: detail.merged,
            repository: repository.clone(),
            review_comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    use super::{GatewayFetcher, PullRequestFetcher};
    use crate::collection::date_range::ReportingTimezone;
    use crate::collection::error::FetchError;
    use crate::github::models::test_support::{merged_detail, review_comment};
    use crate::github::{
        IntakeError, MockPullRequestGateway, MockReviewCommentGateway, PullRequestDetail,
        RepositoryIdentifier,
    };

    #[fixture]
    fn repository() -> RepositoryIdentifier {
        RepositoryIdentifier::new("acme", "widgets").expect("identifier should be valid")
    }

    #[rstest]
    #[tokio::test]
    async fn fetch_combines_detail_and_comments(repository: RepositoryIdentifier) {
        let mut pulls = MockPullRequestGateway::new();
        pulls
            .expect_pull_request()
            .with(eq(repository.clone()), eq(10))
            .times(1)
            .returning(|_, number| Ok(merged_detail(number, "2024-01-01T14:59:59Z")));
        let mut comments = MockReviewCommentGateway::new();
        comments
            .expect_list_review_comments()
            .with(eq(repository.clone()), eq(10))
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    review_comment(1, "alice", "Rename this"),
                    review_comment(2, "Copilot", "Consider refactoring"),
                ])
            });

        let fetcher = GatewayFetcher::new(&pulls, &comments, ReportingTimezone::default());
        let metadata = fetcher
            .fetch(10, &repository)
            .await
            .expect("fetch should succeed");

        assert_eq!(metadata.number, 10);
        assert_eq!(metadata.title, "PR 10");
        assert!(metadata.is_merged);
        assert_eq!(metadata.closed_at.to_rfc3339(), "2024-01-01T23:59:59+09:00");
        assert_eq!(metadata.repository, repository);
        let authors: Vec<&str> = metadata
            .review_comments
            .iter()
            .map(|comment| comment.author.as_str())
            .collect();
        assert_eq!(authors, vec!["alice", "Copilot"]);
    }

    #[rstest]
    #[tokio::test]
    async fn comment_failure_degrades_to_empty_list(repository: RepositoryIdentifier) {
        let mut pulls = MockPullRequestGateway::new();
        pulls
            .expect_pull_request()
            .returning(|_, number| Ok(merged_detail(number, "2024-01-01T00:00:00Z")));
        let mut comments = MockReviewCommentGateway::new();
        comments.expect_list_review_comments().returning(|_, _| {
            Err(IntakeError::Network {
                message: "timed out".to_owned(),
            })
        });

        let fetcher = GatewayFetcher::new(&pulls, &comments, ReportingTimezone::default());
        let metadata = fetcher
            .fetch(7, &repository)
            .await
            .expect("fetch should still succeed");

        assert!(metadata.review_comments.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn request_failure_is_fetch_error(repository: RepositoryIdentifier) {
        let mut pulls = MockPullRequestGateway::new();
        pulls.expect_pull_request().returning(|_, _| {
            Err(IntakeError::Api {
                message: "pull request failed with status 502".to_owned(),
            })
        });
        let mut comments = MockReviewCommentGateway::new();
        comments.expect_list_review_comments().never();

        let fetcher = GatewayFetcher::new(&pulls, &comments, ReportingTimezone::default());
        let error = fetcher
            .fetch(42, &repository)
            .await
            .expect_err("fetch should fail");

        assert!(
            matches!(error, FetchError::Request { number: 42, .. }),
            "unexpected error: {error:?}"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn reopened_pull_request_is_not_closed(repository: RepositoryIdentifier) {
        let mut pulls = MockPullRequestGateway::new();
        pulls.expect_pull_request().returning(|_, number| {
            Ok(PullRequestDetail {
                number,
                title: Some("Reopened".to_owned()),
                closed_at: None,
                merged: false,
            })
        });
        let mut comments = MockReviewCommentGateway::new();
        comments.expect_list_review_comments().never();

        let fetcher = GatewayFetcher::new(&pulls, &comments, ReportingTimezone::default());

        assert_eq!(
            fetcher.fetch(5, &repository).await,
            Err(FetchError::NotClosed { number: 5 })
        );
    }
}
