//! Review comment filtering.

use std::collections::BTreeSet;

use super::model::ReviewComment;

/// Authors excluded when nothing else is configured: automated reviewers.
pub const DEFAULT_EXCLUDED_AUTHORS: &[&str] = &["Copilot"];

/// Pure, order-preserving selection over review comments.
pub trait CommentFilter: Send + Sync {
    /// Returns the retained comments, in their original order and unchanged.
    fn filter(&self, comments: Vec<ReviewComment>) -> Vec<ReviewComment>;
}

/// Drops comments whose author exactly matches a denylisted login.
///
/// # Example
///
/// ```
/// use gleaner::collection::AuthorDenylistFilter;
///
/// let filter = AuthorDenylistFilter::default();
/// assert!(filter.excludes("Copilot"));
/// assert!(!filter.excludes("copilot"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDenylistFilter {
    excluded: BTreeSet<String>,
}

impl AuthorDenylistFilter {
    /// Builds a filter excluding the given logins.
    #[must_use]
    pub fn new<I, S>(authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: authors.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true when comments by `author` are dropped.
    #[must_use]
    pub fn excludes(&self, author: &str) -> bool {
        self.excluded.contains(author)
    }
}

impl Default for AuthorDenylistFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_AUTHORS.iter().copied())
    }
}

impl CommentFilter for AuthorDenylistFilter {
    fn filter(&self, comments: Vec<ReviewComment>) -> Vec<ReviewComment> {
        comments
            .into_iter()
            .filter(|comment| !self.excludes(&comment.author))
            .collect()
    }
}
