//! Repository identity wrappers and API endpoint helpers.

use std::fmt;
use std::str::FromStr;

use url::Url;

use super::error::IntakeError;

/// Public GitHub REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const MAX_OWNER_LENGTH: usize = 39;
const MAX_NAME_LENGTH: usize = 100;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates an owner against GitHub login rules.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidOwner`] when the value is empty, longer
    /// than 39 characters, contains characters other than ASCII alphanumerics
    /// and hyphens, or has leading, trailing, or doubled hyphens.
    pub fn new(value: &str) -> Result<Self, IntakeError> {
        let reject = |reason| IntakeError::InvalidOwner {
            owner: value.to_owned(),
            reason,
        };

        if value.is_empty() {
            return Err(reject("must not be empty"));
        }
        if value.chars().count() > MAX_OWNER_LENGTH {
            return Err(reject("must be at most 39 characters"));
        }
        if !value.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-') {
            return Err(reject("may only contain alphanumerics and hyphens"));
        }
        if value.starts_with('-') || value.ends_with('-') {
            return Err(reject("must not start or end with a hyphen"));
        }
        if value.contains("--") {
            return Err(reject("must not contain consecutive hyphens"));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates a repository name against GitHub naming rules.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidRepositoryName`] when the value is
    /// empty, longer than 100 characters, a relative path component, or
    /// contains characters other than ASCII alphanumerics, `-`, `_`, `.`.
    pub fn new(value: &str) -> Result<Self, IntakeError> {
        let reject = |reason| IntakeError::InvalidRepositoryName {
            name: value.to_owned(),
            reason,
        };

        if value.is_empty() {
            return Err(reject("must not be empty"));
        }
        if value.chars().count() > MAX_NAME_LENGTH {
            return Err(reject("must be at most 100 characters"));
        }
        if value == "." || value == ".." {
            return Err(reject("must not be a relative path component"));
        }
        if !value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
        {
            return Err(reject(
                "may only contain alphanumerics, hyphens, underscores, and dots",
            ));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A GitHub repository addressed as `owner/name`.
///
/// Both segments are validated on construction, so an identifier can always
/// be used as a pair of path components in API routes and on disk.
///
/// # Example
///
/// ```
/// use gleaner::github::RepositoryIdentifier;
///
/// let id: RepositoryIdentifier = "acme/widgets".parse().expect("valid identifier");
/// assert_eq!(id.owner().as_str(), "acme");
/// assert_eq!(id.name().as_str(), "widgets");
/// assert_eq!(id.to_string(), "acme/widgets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentifier {
    owner: RepositoryOwner,
    name: RepositoryName,
}

impl RepositoryIdentifier {
    /// Builds an identifier from separate owner and name segments.
    ///
    /// # Errors
    ///
    /// Returns the validation error of whichever segment is rejected.
    pub fn new(owner: &str, name: &str) -> Result<Self, IntakeError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            name: RepositoryName::new(name)?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn name(&self) -> &RepositoryName {
        &self.name
    }

    pub(crate) fn repository_path(&self) -> String {
        format!("/repos/{}/{}", self.owner.as_str(), self.name.as_str())
    }

    pub(crate) fn pulls_path(&self) -> String {
        format!("{}/pulls", self.repository_path())
    }

    pub(crate) fn pull_request_path(&self, number: u64) -> String {
        format!("{}/pulls/{number}", self.repository_path())
    }

    pub(crate) fn review_comments_path(&self, number: u64) -> String {
        format!("{}/pulls/{number}/comments", self.repository_path())
    }
}

impl FromStr for RepositoryIdentifier {
    type Err = IntakeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (owner, name) = input
            .trim()
            .split_once('/')
            .ok_or_else(|| IntakeError::InvalidRepository {
                input: input.to_owned(),
            })?;
        if name.contains('/') {
            return Err(IntakeError::InvalidRepository {
                input: input.to_owned(),
            });
        }
        Self::new(owner, name)
    }
}

impl fmt::Display for RepositoryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner.as_str(), self.name.as_str())
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, IntakeError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IntakeError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PersonalAccessToken(<redacted>)")
    }
}

/// Parses an API base URL such as `https://api.github.com` or a GitHub
/// Enterprise `https://ghe.example.com/api/v3`.
///
/// # Errors
///
/// Returns [`IntakeError::InvalidUrl`] when the value is not an absolute
/// `http`/`https` URL.
pub fn parse_api_base(input: &str) -> Result<Url, IntakeError> {
    let parsed = Url::parse(input.trim())
        .map_err(|error| IntakeError::InvalidUrl(format!("{input}: {error}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(IntakeError::InvalidUrl(format!(
            "{input}: scheme must be http or https"
        )));
    }
    if parsed.host_str().is_none() {
        return Err(IntakeError::InvalidUrl(format!(
            "{input}: URL must include a host"
        )));
    }
    Ok(parsed)
}
