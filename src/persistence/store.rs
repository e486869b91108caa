//! Filesystem-backed idempotency store.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::collection::{PullRequestBasicInfo, PullRequestMetadata};
use crate::export::render_diff_excerpt;

use super::error::PersistenceError;
use super::layout::RecordLayout;
use super::record::StoredPullRequest;

/// Answers whether a pull request was already collected and stores new ones.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewStore: Send + Sync {
    /// Returns true when a complete record for `info` exists. Never fetches.
    fn exists(&self, info: &PullRequestBasicInfo) -> bool;

    /// Writes the record and its derived artefacts.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when a directory or file cannot be
    /// created, serialised, written, or moved into place.
    fn persist(&self, metadata: &PullRequestMetadata) -> Result<(), PersistenceError>;
}

/// Stores records under an output root following [`RecordLayout`].
///
/// The JSON record is the existence marker and is written last, staged under
/// a temporary name and renamed into place, so an interrupted write leaves no
/// marker and the pull request is collected again on the next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemReviewStore {
    root: Utf8PathBuf,
}

impl FilesystemReviewStore {
    /// Creates a store rooted at `root`; the directory is created on first write.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn open_root(&self) -> std::io::Result<Dir> {
        Dir::open_ambient_dir(&self.root, ambient_authority())
    }

    fn create_root(&self) -> Result<Dir, PersistenceError> {
        let open_root_error = |error: std::io::Error| PersistenceError::OpenRoot {
            path: self.root.clone(),
            message: error.to_string(),
        };
        Dir::create_ambient_dir_all(&self.root, ambient_authority()).map_err(open_root_error)?;
        self.open_root().map_err(open_root_error)
    }
}

impl ReviewStore for FilesystemReviewStore {
    fn exists(&self, info: &PullRequestBasicInfo) -> bool {
        let layout = RecordLayout::for_pull_request(info);
        self.open_root()
            .is_ok_and(|root| root.is_file(layout.marker()))
    }

    fn persist(&self, metadata: &PullRequestMetadata) -> Result<(), PersistenceError> {
        let layout = RecordLayout::for_pull_request(&metadata.basic_info());
        let root = self.create_root()?;

        let create_directory_error = |error: std::io::Error| PersistenceError::CreateDirectory {
            path: layout.directory().to_owned(),
            message: error.to_string(),
        };
        root.create_dir_all(layout.directory())
            .map_err(create_directory_error)?;
        let dir = root
            .open_dir(layout.directory())
            .map_err(create_directory_error)?;

        dir.write(layout.excerpt_name(), render_diff_excerpt(metadata))
            .map_err(|error| PersistenceError::Write {
                path: layout.excerpt(),
                message: error.to_string(),
            })?;

        let record = serde_json::to_vec_pretty(&StoredPullRequest::from(metadata)).map_err(
            |error| PersistenceError::Serialise {
                path: layout.marker(),
                message: error.to_string(),
            },
        )?;
        dir.write(layout.staging_name(), record)
            .map_err(|error| PersistenceError::Write {
                path: layout.staging(),
                message: error.to_string(),
            })?;
        dir.rename(layout.staging_name(), &dir, layout.marker_name())
            .map_err(|error| PersistenceError::Rename {
                from: layout.staging(),
                to: layout.marker(),
                message: error.to_string(),
            })?;

        tracing::debug!(
            pr = metadata.number,
            path = %self.root.join(layout.marker()),
            "stored pull request record"
        );
        Ok(())
    }
}
