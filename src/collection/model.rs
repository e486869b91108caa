//! Domain records flowing through the collection pipeline.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::github::models::RemoteReviewComment;
use crate::github::{PullRequestSummary, RepositoryIdentifier};

use super::date_range::ReportingTimezone;

/// Author recorded when GitHub no longer knows who wrote a comment.
pub const GHOST_AUTHOR: &str = "ghost";

/// Lightweight descriptor of a discovered closed pull request.
///
/// Carries exactly the fields needed to address its stored record, so the
/// idempotency check never needs the expensive fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestBasicInfo {
    /// Pull request number.
    pub number: u64,
    /// Title at discovery time.
    pub title: String,
    /// Close instant in the reporting timezone.
    pub closed_at: DateTime<Tz>,
    /// Whether the pull request was merged.
    pub is_merged: bool,
    /// Repository the pull request belongs to.
    pub repository: RepositoryIdentifier,
}

impl PullRequestBasicInfo {
    /// Builds a descriptor from a listing entry, or `None` when the entry has
    /// not been closed.
    #[must_use]
    pub fn from_summary(
        summary: PullRequestSummary,
        repository: &RepositoryIdentifier,
        timezone: ReportingTimezone,
    ) -> Option<Self> {
        let closed_at = timezone.localise(summary.closed_at?);
        let is_merged = summary.is_merged();
        Some(Self {
            number: summary.number,
            title: summary.title.unwrap_or_default(),
            closed_at,
            is_merged,
            repository: repository.clone(),
        })
    }
}

/// One inline review comment, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewComment {
    /// GitHub comment identifier.
    pub comment_id: u64,
    /// File the comment is attached to.
    pub file_path: String,
    /// Position in the diff the comment was made against.
    pub position: Option<u64>,
    /// Commit SHA the comment was made against.
    pub commit_id: String,
    /// Author login.
    pub author: String,
    /// Creation instant in the reporting timezone.
    pub created_at: DateTime<Tz>,
    /// Comment body.
    pub body: String,
    /// Diff hunk, or a synthesised position marker when GitHub sent none.
    pub diff_context: String,
}

impl ReviewComment {
    /// Converts a remote comment, expressing its timestamp in `timezone`.
    #[must_use]
    pub fn from_remote(remote: RemoteReviewComment, timezone: ReportingTimezone) -> Self {
        let file_path = remote.path.unwrap_or_default();
        let position = remote.original_position.or(remote.position);
        let diff_context = match remote.diff_hunk {
            Some(hunk) if !hunk.trim().is_empty() => hunk,
            _ => placeholder_context(position, &file_path),
        };

        Self {
            comment_id: remote.id,
            file_path,
            position,
            commit_id: remote.commit_id.unwrap_or_default(),
            author: remote.author.unwrap_or_else(|| GHOST_AUTHOR.to_owned()),
            created_at: timezone.localise(remote.created_at),
            body: remote.body.unwrap_or_default(),
            diff_context,
        }
    }
}

/// Renders an optional diff position the way the stored artefacts show it.
#[must_use]
pub fn display_position(position: Option<u64>) -> String {
    position.map_or_else(|| "None".to_owned(), |value| value.to_string())
}

fn placeholder_context(position: Option<u64>, file_path: &str) -> String {
    format!(
        "@@ Position: {} in {file_path} @@",
        display_position(position)
    )
}

/// Complete record of one closed pull request; the unit of persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestMetadata {
    /// Pull request number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Close instant in the reporting timezone.
    pub closed_at: DateTime<Tz>,
    /// Whether the pull request was merged.
    pub is_merged: bool,
    /// Repository the pull request belongs to.
    pub repository: RepositoryIdentifier,
    /// Inline review comments in API order.
    pub review_comments: Vec<ReviewComment>,
}

impl PullRequestMetadata {
    /// Returns the same record carrying `review_comments` instead.
    #[must_use]
    pub fn with_review_comments(self, review_comments: Vec<ReviewComment>) -> Self {
        Self {
            review_comments,
            ..self
        }
    }

    /// Descriptor addressing this record in a store.
    #[must_use]
    pub fn basic_info(&self) -> PullRequestBasicInfo {
        PullRequestBasicInfo {
            number: self.number,
            title: self.title.clone(),
            closed_at: self.closed_at,
            is_merged: self.is_merged,
            repository: self.repository.clone(),
        }
    }
}
