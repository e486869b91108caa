//! Public types for repository gateway operations.

use crate::github::models::PullRequestSummary;
use crate::github::pagination::PageInfo;

/// Page selection for listing closed pull requests.
///
/// The listing is always closed pull requests, most recently updated first,
/// which is the order the discovery scan relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPullRequestsParams {
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (max 100).
    pub per_page: u8,
}

impl ListPullRequestsParams {
    /// Returns a copy of these parameters targeting another page.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

impl Default for ListPullRequestsParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 30,
        }
    }
}

/// One page of a pull request listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedPullRequests {
    /// Pull request summaries on this page, in API order.
    pub items: Vec<PullRequestSummary>,
    /// Pagination state.
    pub page_info: PageInfo,
}
