//! Error mapping helpers for the Octocrab GitHub gateway implementations.

use http::StatusCode;
use octocrab::Octocrab;

use crate::github::error::IntakeError;
use crate::github::rate_limit::RateLimitInfo;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> IntakeError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return if is_auth_failure(source.status_code) {
            IntakeError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            IntakeError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return IntakeError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    IntakeError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps an Octocrab error, querying `/rate_limit` when GitHub reports
/// throttling so the resulting error can say when the quota resets.
pub(super) async fn map_octocrab_error_with_rate_limit(
    client: &Octocrab,
    operation: &str,
    error: &octocrab::Error,
) -> IntakeError {
    match error {
        octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
            let rate_limit = fetch_rate_limit_info(client).await;
            let base_message = format!("{operation} failed: {message}", message = source.message);
            let message = match &rate_limit {
                Some(info) => format!(
                    "{base_message} ({remaining} requests left, resets at {reset})",
                    remaining = info.remaining(),
                    reset = info.reset_description()
                ),
                None => base_message,
            };

            IntakeError::RateLimitExceeded {
                rate_limit,
                message,
            }
        }
        _ => map_octocrab_error(operation, error),
    }
}

async fn fetch_rate_limit_info(client: &Octocrab) -> Option<RateLimitInfo> {
    let rate = client.ratelimit().get().await.ok()?.rate;
    let remaining = u32::try_from(rate.remaining).ok()?;
    Some(RateLimitInfo::new(remaining, rate.reset))
}
