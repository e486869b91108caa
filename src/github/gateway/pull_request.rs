//! Octocrab-backed gateway and its pull request endpoint.

use async_trait::async_trait;
use octocrab::Octocrab;
use url::Url;

use crate::github::error::IntakeError;
use crate::github::locator::{PersonalAccessToken, RepositoryIdentifier};
use crate::github::models::{ApiPullRequest, PullRequestDetail};

use super::PullRequestGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error_with_rate_limit;

/// Octocrab-backed gateway implementing every GitHub capability the
/// collector needs.
pub struct OctocrabGateway {
    pub(super) client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base URL.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
    /// `IntakeError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &Url) -> Result<Self, IntakeError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn pull_request(
        &self,
        repository: &RepositoryIdentifier,
        number: u64,
    ) -> Result<PullRequestDetail, IntakeError> {
        match self
            .client
            .get::<ApiPullRequest, _, _>(repository.pull_request_path(number), None::<&()>)
            .await
        {
            Ok(pull_request) => Ok(pull_request.into()),
            Err(error) => {
                Err(map_octocrab_error_with_rate_limit(&self.client, "pull request", &error).await)
            }
        }
    }
}
