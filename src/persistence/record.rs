//! JSON shape of a stored pull request record.

use serde::{Deserialize, Serialize};

use crate::collection::{PullRequestMetadata, ReviewComment};

/// Serialised form of [`PullRequestMetadata`].
///
/// Timestamps are RFC 3339 strings carrying the reporting timezone's offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPullRequest {
    /// Pull request number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Close instant.
    pub closed_at: String,
    /// Whether the pull request was merged.
    pub is_merged: bool,
    /// Repository as `owner/name`.
    pub repository: String,
    /// Retained review comments.
    pub review_comments: Vec<StoredReviewComment>,
}

/// Serialised form of [`ReviewComment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReviewComment {
    /// GitHub comment identifier.
    pub id: u64,
    /// File the comment is attached to.
    pub path: String,
    /// Diff position, `null` when unknown.
    pub position: Option<u64>,
    /// Commit SHA.
    pub commit_id: String,
    /// Author login.
    pub author: String,
    /// Creation instant.
    pub created_at: String,
    /// Comment body.
    pub body: String,
    /// Diff hunk or synthesised position marker.
    pub diff_context: String,
}

impl From<&ReviewComment> for StoredReviewComment {
    fn from(comment: &ReviewComment) -> Self {
        Self {
            id: comment.comment_id,
            path: comment.file_path.clone(),
            position: comment.position,
            commit_id: comment.commit_id.clone(),
            author: comment.author.clone(),
            created_at: comment.created_at.to_rfc3339(),
            body: comment.body.clone(),
            diff_context: comment.diff_context.clone(),
        }
    }
}

impl From<&PullRequestMetadata> for StoredPullRequest {
    fn from(metadata: &PullRequestMetadata) -> Self {
        Self {
            number: metadata.number,
            title: metadata.title.clone(),
            closed_at: metadata.closed_at.to_rfc3339(),
            is_merged: metadata.is_merged,
            repository: metadata.repository.to_string(),
            review_comments: metadata
                .review_comments
                .iter()
                .map(StoredReviewComment::from)
                .collect(),
        }
    }
}
