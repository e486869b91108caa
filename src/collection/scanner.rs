//! Lazy discovery of closed pull requests within a date window.

use std::collections::VecDeque;

use crate::github::pagination::MAX_PER_PAGE;
use crate::github::{
    ListPullRequestsParams, PullRequestSummary, RepositoryGateway, RepositoryIdentifier,
};

use super::date_range::DateRange;
use super::error::ScanError;
use super::model::PullRequestBasicInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unopened,
    Listing { next_page: Option<u32> },
    Finished,
}

enum Verdict {
    Yield(PullRequestBasicInfo),
    Skip,
    Stop,
}

/// Pull-based cursor over the closed pull requests of one repository whose
/// close instant falls inside a [`DateRange`].
///
/// Candidates are listed most recently updated first, and the scan stops at
/// the first candidate closed before the window starts. GitHub orders by
/// update time rather than close time, so a pull request updated after a
/// later-closed one can be hidden behind the stop point. That ordering is
/// not verified.
///
/// A page is requested only once the previous one has been consumed. After
/// the scan ends, by exhaustion, early stop, or error, every further call
/// returns `Ok(None)`.
pub struct ClosedPullRequestScan<'a> {
    gateway: &'a dyn RepositoryGateway,
    repository: &'a RepositoryIdentifier,
    range: &'a DateRange,
    params: ListPullRequestsParams,
    state: ScanState,
    buffer: VecDeque<PullRequestSummary>,
}

impl<'a> ClosedPullRequestScan<'a> {
    /// Prepares a scan; nothing is requested until the first
    /// [`next_candidate`](Self::next_candidate) call.
    #[must_use]
    pub fn new(
        gateway: &'a dyn RepositoryGateway,
        repository: &'a RepositoryIdentifier,
        range: &'a DateRange,
    ) -> Self {
        Self {
            gateway,
            repository,
            range,
            params: ListPullRequestsParams {
                per_page: MAX_PER_PAGE,
                ..ListPullRequestsParams::default()
            },
            state: ScanState::Unopened,
            buffer: VecDeque::new(),
        }
    }

    /// Overrides the listing page size.
    #[must_use]
    pub const fn with_page_size(mut self, per_page: u8) -> Self {
        self.params.per_page = per_page;
        self
    }

    /// Returns the next in-range pull request, or `None` once the scan is over.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RepositoryAccess`] when the repository cannot be
    /// opened and [`ScanError::Enumeration`] when a listing page fails.
    pub async fn next_candidate(&mut self) -> Result<Option<PullRequestBasicInfo>, ScanError> {
        loop {
            match self.state {
                ScanState::Finished => return Ok(None),
                ScanState::Unopened => self.open().await?,
                ScanState::Listing { next_page } => {
                    if let Some(summary) = self.buffer.pop_front() {
                        match self.classify(summary) {
                            Verdict::Yield(info) => return Ok(Some(info)),
                            Verdict::Skip => {}
                            Verdict::Stop => self.finish(),
                        }
                    } else if let Some(page) = next_page {
                        self.load_page(page).await?;
                    } else {
                        self.finish();
                    }
                }
            }
        }
    }

    async fn open(&mut self) -> Result<(), ScanError> {
        if let Err(source) = self.gateway.check_repository(self.repository).await {
            self.finish();
            return Err(ScanError::RepositoryAccess {
                repository: self.repository.clone(),
                source,
            });
        }
        tracing::debug!(repository = %self.repository, "opened repository");
        self.state = ScanState::Listing { next_page: Some(1) };
        Ok(())
    }

    async fn load_page(&mut self, page: u32) -> Result<(), ScanError> {
        let params = self.params.with_page(page);
        match self.gateway.list_pull_requests(self.repository, &params).await {
            Ok(listing) => {
                tracing::debug!(
                    repository = %self.repository,
                    page,
                    candidates = listing.items.len(),
                    "listed closed pull requests"
                );
                self.buffer.extend(listing.items);
                self.state = ScanState::Listing {
                    next_page: listing.page_info.next_page(),
                };
                Ok(())
            }
            Err(source) => {
                self.finish();
                Err(ScanError::Enumeration {
                    repository: self.repository.clone(),
                    source,
                })
            }
        }
    }

    fn classify(&self, summary: PullRequestSummary) -> Verdict {
        let number = summary.number;
        let Some(info) =
            PullRequestBasicInfo::from_summary(summary, self.repository, self.range.timezone())
        else {
            tracing::debug!(pr = number, "skipping pull request without close time");
            return Verdict::Skip;
        };

        if self.range.contains(&info.closed_at) {
            Verdict::Yield(info)
        } else if self.range.is_before(&info.closed_at) {
            tracing::debug!(
                pr = number,
                closed_at = %info.closed_at,
                "reached pull request closed before the window, stopping scan"
            );
            Verdict::Stop
        } else {
            Verdict::Skip
        }
    }

    fn finish(&mut self) {
        self.state = ScanState::Finished;
        self.buffer.clear();
    }
}
