//! Collection run: scan, skip known, fetch, filter, persist.

use thiserror::Error;

use crate::github::{RepositoryGateway, RepositoryIdentifier};
use crate::persistence::{PersistenceError, ReviewStore};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

use super::date_range::DateRange;
use super::error::{CollectionError, FetchError, error_chain};
use super::fetch::PullRequestFetcher;
use super::filter::CommentFilter;
use super::model::PullRequestBasicInfo;
use super::scanner::ClosedPullRequestScan;

/// Counts reported at the end of a run.
///
/// # Example
///
/// ```
/// use gleaner::collection::CollectionSummary;
///
/// let summary = CollectionSummary { found: 5, processed: 2, skipped: 2 };
/// assert_eq!(summary.errored(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Candidates discovered in the window.
    pub found: u64,
    /// Candidates fetched and stored during this run.
    pub processed: u64,
    /// Candidates already stored by an earlier run.
    pub skipped: u64,
}

impl CollectionSummary {
    /// Candidates that failed to fetch or persist.
    #[must_use]
    pub const fn errored(&self) -> u64 {
        self.found
            .saturating_sub(self.processed)
            .saturating_sub(self.skipped)
    }
}

enum Outcome {
    Processed,
    Skipped,
}

#[derive(Debug, Error)]
enum StageError {
    #[error(transparent)]
    Fetch(FetchError),
    #[error(transparent)]
    Persist(PersistenceError),
}

impl StageError {
    const fn stage(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Persist(_) => "persist",
        }
    }
}

/// Runs the collection pipeline over one repository and date window.
///
/// Candidates flow through one at a time. A candidate already in the store is
/// skipped without fetching; a failure to fetch or persist one candidate is
/// logged and the run moves on. Only a discovery failure aborts the run.
pub struct CollectionOrchestrator<'a> {
    repositories: &'a dyn RepositoryGateway,
    fetcher: &'a dyn PullRequestFetcher,
    store: &'a dyn ReviewStore,
    filter: &'a dyn CommentFilter,
    telemetry: &'a dyn TelemetrySink,
}

impl<'a> CollectionOrchestrator<'a> {
    /// Wires the pipeline collaborators together.
    #[must_use]
    pub const fn new(
        repositories: &'a dyn RepositoryGateway,
        fetcher: &'a dyn PullRequestFetcher,
        store: &'a dyn ReviewStore,
        filter: &'a dyn CommentFilter,
        telemetry: &'a dyn TelemetrySink,
    ) -> Self {
        Self {
            repositories,
            fetcher,
            store,
            filter,
            telemetry,
        }
    }

    /// Collects every closed pull request of `repository` within `range`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Scan`] when the repository cannot be opened
    /// or its pull requests cannot be listed. Records persisted before the
    /// failure stay on disk.
    pub async fn collect(
        &self,
        repository: &RepositoryIdentifier,
        range: &DateRange,
    ) -> Result<CollectionSummary, CollectionError> {
        tracing::info!(
            %repository,
            start = %range.start().to_rfc3339(),
            end = %range.end().to_rfc3339(),
            "collecting closed pull requests"
        );

        let mut scan = ClosedPullRequestScan::new(self.repositories, repository, range);
        let mut summary = CollectionSummary::default();

        while let Some(info) = scan.next_candidate().await? {
            summary.found += 1;
            match self.collect_one(&info).await {
                Ok(Outcome::Skipped) => summary.skipped += 1,
                Ok(Outcome::Processed) => summary.processed += 1,
                Err(error) => self.report_failure(&info, &error),
            }
        }

        tracing::info!(
            %repository,
            found = summary.found,
            processed = summary.processed,
            skipped = summary.skipped,
            errored = summary.errored(),
            "Found {} PRs, processed {}, skipped {}",
            summary.found,
            summary.processed,
            summary.skipped
        );
        self.telemetry.record(TelemetryEvent::CollectionCompleted {
            repository: repository.to_string(),
            found: summary.found,
            processed: summary.processed,
            skipped: summary.skipped,
        });
        Ok(summary)
    }

    async fn collect_one(&self, info: &PullRequestBasicInfo) -> Result<Outcome, StageError> {
        if self.store.exists(info) {
            tracing::info!(pr = info.number, "skipping already collected pull request");
            return Ok(Outcome::Skipped);
        }

        let mut metadata = self
            .fetcher
            .fetch(info.number, &info.repository)
            .await
            .map_err(StageError::Fetch)?;
        let comments = std::mem::take(&mut metadata.review_comments);
        let filtered = metadata.with_review_comments(self.filter.filter(comments));

        self.store.persist(&filtered).map_err(StageError::Persist)?;
        tracing::info!(
            pr = info.number,
            comments = filtered.review_comments.len(),
            "saved pull request"
        );
        Ok(Outcome::Processed)
    }

    fn report_failure(&self, info: &PullRequestBasicInfo, error: &StageError) {
        tracing::error!(
            pr = info.number,
            stage = error.stage(),
            "failed to collect pull request: {error}"
        );
        self.telemetry.record(TelemetryEvent::PullRequestFailed {
            repository: info.repository.to_string(),
            number: info.number,
            stage: error.stage().to_owned(),
            message: error_chain(error),
        });
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
