//! Repository access check and pull request listing.

use async_trait::async_trait;
use octocrab::Page;
use serde::de::IgnoredAny;

use crate::github::error::IntakeError;
use crate::github::locator::RepositoryIdentifier;
use crate::github::models::{ApiPullRequestSummary, PullRequestSummary};
use crate::github::pagination::{MAX_PER_PAGE, PageInfo};

use super::error_mapping::map_octocrab_error_with_rate_limit;
use super::{ListPullRequestsParams, OctocrabGateway, PaginatedPullRequests, RepositoryGateway};

#[async_trait]
impl RepositoryGateway for OctocrabGateway {
    async fn check_repository(&self, repository: &RepositoryIdentifier) -> Result<(), IntakeError> {
        match self
            .client
            .get::<IgnoredAny, _, _>(repository.repository_path(), None::<&()>)
            .await
        {
            Ok(_) => Ok(()),
            Err(error) => {
                Err(map_octocrab_error_with_rate_limit(&self.client, "open repository", &error)
                    .await)
            }
        }
    }

    async fn list_pull_requests(
        &self,
        repository: &RepositoryIdentifier,
        params: &ListPullRequestsParams,
    ) -> Result<PaginatedPullRequests, IntakeError> {
        validate_pagination_params(params.page, params.per_page)?;

        let page_str = params.page.to_string();
        let per_page_str = params.per_page.to_string();
        let query_params = [
            ("state", "closed"),
            ("sort", "updated"),
            ("direction", "desc"),
            ("page", page_str.as_str()),
            ("per_page", per_page_str.as_str()),
        ];

        let page_result: Page<ApiPullRequestSummary> = match self
            .client
            .get(repository.pulls_path(), Some(&query_params))
            .await
        {
            Ok(page_result) => page_result,
            Err(error) => {
                return Err(
                    map_octocrab_error_with_rate_limit(&self.client, "list pulls", &error).await,
                );
            }
        };

        let page_info = PageInfo::new(params.page).with_has_next(page_result.next.is_some());
        let items: Vec<PullRequestSummary> = page_result
            .items
            .into_iter()
            .map(ApiPullRequestSummary::into)
            .collect();

        Ok(PaginatedPullRequests { items, page_info })
    }
}

fn validate_pagination_params(page: u32, per_page: u8) -> Result<(), IntakeError> {
    if page == 0 {
        return Err(IntakeError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if per_page == 0 {
        return Err(IntakeError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if per_page > MAX_PER_PAGE {
        return Err(IntakeError::InvalidPagination {
            message: format!("per_page must not exceed {MAX_PER_PAGE}"),
        });
    }

    Ok(())
}
