//! Pull request and review comment data as returned by the GitHub API.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into the public remote types below. Timestamps stay in UTC here;
//! conversion into the reporting timezone happens in the collection layer.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Pull request entry from a repository listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// Close instant; `None` while the pull request is open.
    pub closed_at: Option<DateTime<Utc>>,
    /// Merge instant; `None` when the pull request was closed unmerged.
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequestSummary {
    /// Returns true when the pull request was merged.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

/// Full pull request record from `GET /repos/{owner}/{name}/pulls/{number}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDetail {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// Close instant; `None` while the pull request is open.
    pub closed_at: Option<DateTime<Utc>>,
    /// Whether the pull request was merged.
    pub merged: bool,
}

/// Inline review comment attached to a pull request diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReviewComment {
    /// Comment identifier.
    pub id: u64,
    /// Comment body.
    pub body: Option<String>,
    /// Author login.
    pub author: Option<String>,
    /// File path the comment is attached to.
    pub path: Option<String>,
    /// Position in the current diff; `None` once the line is outdated.
    pub position: Option<u64>,
    /// Position in the diff the comment was originally made against.
    pub original_position: Option<u64>,
    /// Commit SHA this comment was made against.
    pub commit_id: Option<String>,
    /// Diff hunk surrounding the commented line.
    pub diff_hunk: Option<String>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

/// API response type for PR listing.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequestSummary {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) closed_at: Option<DateTime<Utc>>,
    pub(super) merged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) closed_at: Option<DateTime<Utc>>,
    pub(super) merged: Option<bool>,
    pub(super) merged_at: Option<DateTime<Utc>>,
}

/// API response type for PR review comments.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiReviewComment {
    pub(super) id: u64,
    pub(super) body: Option<String>,
    pub(super) user: Option<ApiUser>,
    pub(super) path: Option<String>,
    pub(super) position: Option<u64>,
    pub(super) original_position: Option<u64>,
    pub(super) commit_id: Option<String>,
    pub(super) diff_hunk: Option<String>,
    pub(super) created_at: DateTime<Utc>,
}

impl From<ApiPullRequestSummary> for PullRequestSummary {
    fn from(value: ApiPullRequestSummary) -> Self {
        Self {
            number: value.number,
            title: value.title,
            closed_at: value.closed_at,
            merged_at: value.merged_at,
        }
    }
}

impl From<ApiPullRequest> for PullRequestDetail {
    fn from(value: ApiPullRequest) -> Self {
        // Some GitHub Enterprise versions omit `merged`; fall back to the timestamp.
        let merged = value.merged.unwrap_or_else(|| value.merged_at.is_some());
        Self {
            number: value.number,
            title: value.title,
            closed_at: value.closed_at,
            merged,
        }
    }
}

impl From<ApiReviewComment> for RemoteReviewComment {
    fn from(value: ApiReviewComment) -> Self {
        Self {
            id: value.id,
            body: value.body,
            author: value.user.and_then(|user| user.login),
            path: value.path,
            position: value.position,
            original_position: value.original_position,
            commit_id: value.commit_id,
            diff_hunk: value.diff_hunk,
            created_at: value.created_at,
        }
    }
}
