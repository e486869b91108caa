//! Rate limit details attached to GitHub throttling errors.
//!
//! When GitHub answers with a rate limit error the gateways query the
//! `/rate_limit` endpoint and attach the result to
//! [`IntakeError::RateLimitExceeded`](super::IntakeError::RateLimitExceeded),
//! so the final error message can tell the operator when a rerun will succeed.

use chrono::{DateTime, Utc};

/// Quota snapshot for the core GitHub REST API.
///
/// # Example
///
/// ```
/// use gleaner::github::RateLimitInfo;
///
/// let info = RateLimitInfo::new(0, 1_700_000_000);
/// assert_eq!(info.remaining(), 0);
/// assert_eq!(info.reset_description(), "2023-11-14T22:13:20+00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    remaining: u32,
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a snapshot from the remaining quota and the reset Unix time.
    #[must_use]
    pub const fn new(remaining: u32, reset_at: u64) -> Self {
        Self {
            remaining,
            reset_at,
        }
    }

    /// Requests left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Reset instant as RFC 3339 UTC, or the raw Unix seconds when the
    /// value is out of range.
    #[must_use]
    pub fn reset_description(&self) -> String {
        i64::try_from(self.reset_at)
            .ok()
            .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0))
            .map_or_else(|| self.reset_at.to_string(), |reset| reset.to_rfc3339())
    }
}
