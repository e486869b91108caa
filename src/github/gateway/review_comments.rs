//! Review comment listing with automatic pagination.

use async_trait::async_trait;
use octocrab::Page;

use crate::github::error::IntakeError;
use crate::github::locator::RepositoryIdentifier;
use crate::github::models::{ApiReviewComment, RemoteReviewComment};
use crate::github::pagination::MAX_PER_PAGE;

use super::error_mapping::map_octocrab_error_with_rate_limit;
use super::{OctocrabGateway, ReviewCommentGateway};

#[async_trait]
impl ReviewCommentGateway for OctocrabGateway {
    /// Follows `Link` headers until every page has been read.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError`] when the first or any subsequent page fails,
    /// including [`IntakeError::RateLimitExceeded`] with reset information
    /// when GitHub throttles the request.
    async fn list_review_comments(
        &self,
        repository: &RepositoryIdentifier,
        number: u64,
    ) -> Result<Vec<RemoteReviewComment>, IntakeError> {
        let per_page = MAX_PER_PAGE.to_string();
        let query_params = [("per_page", per_page.as_str())];

        let page: Page<ApiReviewComment> = match self
            .client
            .get(repository.review_comments_path(number), Some(&query_params))
            .await
        {
            Ok(page) => page,
            Err(error) => {
                return Err(
                    map_octocrab_error_with_rate_limit(&self.client, "review comments", &error)
                        .await,
                );
            }
        };

        match self.client.all_pages(page).await {
            Ok(comments) => Ok(comments.into_iter().map(Into::into).collect()),
            Err(error) => {
                Err(map_octocrab_error_with_rate_limit(&self.client, "review comments", &error)
                    .await)
            }
        }
    }
}
