//! Test helpers for constructing remote pull request fixtures.
//!
//! # Examples
//!
//! ```
//! use gleaner::github::models::test_support::{closed_summary, review_comment};
//!
//! let summary = closed_summary(10, "2024-01-01T14:59:59Z");
//! assert_eq!(summary.number, 10);
//!
//! let comment = review_comment(1, "alice", "Looks good");
//! assert_eq!(comment.author.as_deref(), Some("alice"));
//! ```

use chrono::{DateTime, Utc};

use super::{PullRequestDetail, PullRequestSummary, RemoteReviewComment};

/// Parses an RFC 3339 instant, falling back to the Unix epoch for bad input.
#[must_use]
pub fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|parsed| parsed.with_timezone(&Utc))
        .unwrap_or_default()
}

/// Builds an unmerged closed pull request summary titled `PR {number}`.
#[must_use]
pub fn closed_summary(number: u64, closed_at: &str) -> PullRequestSummary {
    PullRequestSummary {
        number,
        title: Some(format!("PR {number}")),
        closed_at: Some(instant(closed_at)),
        merged_at: None,
    }
}

/// Builds a pull request summary that has not been closed.
#[must_use]
pub fn open_summary(number: u64) -> PullRequestSummary {
    PullRequestSummary {
        number,
        title: Some(format!("PR {number}")),
        closed_at: None,
        merged_at: None,
    }
}

/// Builds a merged pull request detail titled `PR {number}`.
#[must_use]
pub fn merged_detail(number: u64, closed_at: &str) -> PullRequestDetail {
    PullRequestDetail {
        number,
        title: Some(format!("PR {number}")),
        closed_at: Some(instant(closed_at)),
        merged: true,
    }
}

/// Builds a review comment on `src/lib.rs` with a diff hunk.
#[must_use]
pub fn review_comment(id: u64, author: &str, body: &str) -> RemoteReviewComment {
    RemoteReviewComment {
        id,
        body: Some(body.to_owned()),
        author: Some(author.to_owned()),
        path: Some("src/lib.rs".to_owned()),
        position: Some(3),
        original_position: Some(3),
        commit_id: Some("abc123".to_owned()),
        diff_hunk: Some("@@ -1,3 +1,4 @@\n+fn added() {}".to_owned()),
        created_at: instant("2024-01-01T00:00:00Z"),
    }
}
