//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.gleaner.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GLEANER_REPO`, `GLEANER_TOKEN`, or legacy
//!    `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--repo`/`-r`, `--token`/`-t`, and friends
//!
//! # Configuration File
//!
//! ```toml
//! repo = "octocat/hello-world"
//! from_date = "2024-01-01"
//! to_date = "2024-01-31"
//! output_dir = "pullrequests"
//! timezone = "Asia/Tokyo"
//! exclude_authors = "Copilot,dependabot[bot]"
//! ```

use std::env;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::collection::{AuthorDenylistFilter, DEFAULT_TIMEZONE, DateRange, ReportingTimezone};
use crate::github::{
    DEFAULT_API_BASE, IntakeError, PersonalAccessToken, RepositoryIdentifier, parse_api_base,
};

/// Output root used when `output_dir` is not configured.
pub const DEFAULT_OUTPUT_DIR: &str = "pullrequests";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `GLEANER_REPO` or `--repo`: Repository as `owner/name`
/// - `GLEANER_FROM_DATE` / `GLEANER_TO_DATE`: Inclusive window, `YYYY-MM-DD`
/// - `GLEANER_OUTPUT_DIR` or `--output-dir`: Output root
/// - `GLEANER_TIMEZONE` or `--timezone`: IANA reporting timezone
/// - `GLEANER_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `GLEANER_API_BASE` or `--api-base`: GitHub API base URL
/// - `GLEANER_EXCLUDE_AUTHORS` or `--exclude-authors`: Comma-separated logins
///
/// # Example
///
/// ```no_run
/// use gleaner::GleanerConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = GleanerConfig::load().expect("failed to load configuration");
/// let repository = config.require_repository().expect("repository required");
/// let range = config.date_range().expect("dates required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GLEANER",
    discovery(
        dotfile_name = ".gleaner.toml",
        config_file_name = "gleaner.toml",
        app_name = "gleaner"
    )
)]
pub struct GleanerConfig {
    /// Repository to collect from, as `owner/name`.
    ///
    /// Can be provided via:
    /// - CLI: `--repo <OWNER/NAME>` or `-r <OWNER/NAME>`
    /// - Environment: `GLEANER_REPO`
    /// - Config file: `repo = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// First day of the collection window (`YYYY-MM-DD`, inclusive).
    #[ortho_config(cli_short = 'f')]
    pub from_date: Option<String>,

    /// Last day of the collection window (`YYYY-MM-DD`, inclusive).
    #[ortho_config(cli_short = 'T')]
    pub to_date: Option<String>,

    /// Directory records are written under. Defaults to `pullrequests`.
    #[ortho_config(cli_short = 'o')]
    pub output_dir: Option<String>,

    /// IANA timezone the window and stored timestamps are expressed in.
    /// Defaults to `Asia/Tokyo`.
    #[ortho_config(cli_short = 'z')]
    pub timezone: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `GLEANER_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise or test servers.
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Comma-separated comment authors to drop. Defaults to `Copilot`; an
    /// empty string keeps every author.
    #[ortho_config()]
    pub exclude_authors: Option<String>,

    /// Enables debug logging.
    ///
    /// Note: `GLEANER_VERBOSE` is not read because `ortho_config` does not
    /// load boolean values from the environment.
    #[ortho_config(cli_short = 'v')]
    pub verbose: bool,
}

impl GleanerConfig {
    /// Parses the configured repository.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when no repository is set, or
    /// the repository validation error when it is malformed.
    pub fn require_repository(&self) -> Result<RepositoryIdentifier, IntakeError> {
        self.repo
            .as_deref()
            .ok_or_else(|| IntakeError::Configuration {
                message: "repository is required (use --repo or -r)".to_owned(),
            })?
            .parse()
    }

    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingToken`] when no token source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, IntakeError> {
        let token = self
            .token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(IntakeError::MissingToken)?;
        PersonalAccessToken::new(token)
    }

    /// Timezone used for the window and for stored timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] for an unknown timezone name.
    pub fn reporting_timezone(&self) -> Result<ReportingTimezone, IntakeError> {
        self.timezone
            .as_deref()
            .unwrap_or(DEFAULT_TIMEZONE)
            .parse()
            .map_err(|error| configuration_error(&error))
    }

    /// Builds the inclusive collection window from `from_date` and `to_date`.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when a date is missing or
    /// malformed, when `from_date` is after `to_date`, or when the timezone
    /// is unknown.
    pub fn date_range(&self) -> Result<DateRange, IntakeError> {
        let from = parse_date("from_date", "--from-date", self.from_date.as_deref())?;
        let to = parse_date("to_date", "--to-date", self.to_date.as_deref())?;
        DateRange::from_dates(from, to, self.reporting_timezone()?)
            .map_err(|error| configuration_error(&error))
    }

    /// Directory records are written under.
    #[must_use]
    pub fn output_root(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }

    /// GitHub API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidUrl`] when `api_base` is not an
    /// `http(s)` URL with a host.
    pub fn api_base_url(&self) -> Result<Url, IntakeError> {
        parse_api_base(self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE))
    }

    /// Author denylist applied to fetched review comments.
    #[must_use]
    pub fn comment_filter(&self) -> AuthorDenylistFilter {
        self.exclude_authors.as_deref().map_or_else(
            AuthorDenylistFilter::default,
            |authors| {
                AuthorDenylistFilter::new(
                    authors
                        .split(',')
                        .map(str::trim)
                        .filter(|author| !author.is_empty()),
                )
            },
        )
    }
}

fn parse_date(field: &str, flag: &str, value: Option<&str>) -> Result<NaiveDate, IntakeError> {
    let raw = value.ok_or_else(|| IntakeError::Configuration {
        message: format!("{field} is required (use {flag})"),
    })?;
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|error| {
        IntakeError::Configuration {
            message: format!("{field} '{raw}' is not a YYYY-MM-DD date: {error}"),
        }
    })
}

fn configuration_error(error: &dyn std::error::Error) -> IntakeError {
    IntakeError::Configuration {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests;
