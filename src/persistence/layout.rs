//! Deterministic on-disk addressing of pull request records.

use camino::{Utf8Path, Utf8PathBuf};

use crate::collection::PullRequestBasicInfo;

/// Location of one pull request's files, relative to the output root:
/// `<owner>/<name>/<YYYY-MM-DD>/PR-<number>-*`.
///
/// The date is the calendar day of the close instant in the reporting
/// timezone. Only addressable fields feed the layout, so a record can be
/// located without fetching it.
///
/// # Example
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Tz;
/// use gleaner::collection::PullRequestBasicInfo;
/// use gleaner::github::RepositoryIdentifier;
/// use gleaner::persistence::RecordLayout;
///
/// let info = PullRequestBasicInfo {
///     number: 10,
///     title: "Add widgets".to_owned(),
///     closed_at: Tz::Asia__Tokyo
///         .with_ymd_and_hms(2024, 1, 1, 23, 59, 59)
///         .single()
///         .expect("valid instant"),
///     is_merged: true,
///     repository: "acme/widgets".parse::<RepositoryIdentifier>().expect("valid identifier"),
/// };
/// let layout = RecordLayout::for_pull_request(&info);
/// assert_eq!(layout.marker().as_str(), "acme/widgets/2024-01-01/PR-10-metadata.json");
/// assert_eq!(layout.excerpt().as_str(), "acme/widgets/2024-01-01/PR-10-diff.md");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    directory: Utf8PathBuf,
    number: u64,
}

impl RecordLayout {
    /// Computes the layout for a discovered pull request.
    #[must_use]
    pub fn for_pull_request(info: &PullRequestBasicInfo) -> Self {
        let directory = Utf8PathBuf::from(info.repository.owner().as_str())
            .join(info.repository.name().as_str())
            .join(info.closed_at.format("%Y-%m-%d").to_string());
        Self {
            directory,
            number: info.number,
        }
    }

    /// Directory holding the record's files.
    #[must_use]
    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    /// File name of the JSON record, whose presence marks the pull request
    /// as collected.
    #[must_use]
    pub fn marker_name(&self) -> String {
        format!("PR-{}-metadata.json", self.number)
    }

    /// File name of the Markdown diff excerpt.
    #[must_use]
    pub fn excerpt_name(&self) -> String {
        format!("PR-{}-diff.md", self.number)
    }

    /// File name the JSON record is staged under before it is renamed.
    #[must_use]
    pub fn staging_name(&self) -> String {
        format!(".PR-{}-metadata.json.tmp", self.number)
    }

    /// Path of the JSON record.
    #[must_use]
    pub fn marker(&self) -> Utf8PathBuf {
        self.directory.join(self.marker_name())
    }

    /// Path of the Markdown diff excerpt.
    #[must_use]
    pub fn excerpt(&self) -> Utf8PathBuf {
        self.directory.join(self.excerpt_name())
    }

    /// Path of the staged JSON record.
    #[must_use]
    pub fn staging(&self) -> Utf8PathBuf {
        self.directory.join(self.staging_name())
    }
}
