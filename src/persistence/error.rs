//! Error types for the on-disk review store.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned while writing a pull request record to disk.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    /// The output root could not be created or opened.
    #[error("failed to open output directory '{path}': {message}")]
    OpenRoot {
        /// Output root as configured.
        path: Utf8PathBuf,
        /// Error detail from the filesystem.
        message: String,
    },

    /// A record directory could not be created.
    #[error("failed to create directory '{path}': {message}")]
    CreateDirectory {
        /// Directory relative to the output root.
        path: Utf8PathBuf,
        /// Error detail from the filesystem.
        message: String,
    },

    /// The record could not be serialised to JSON.
    #[error("failed to serialise record for '{path}': {message}")]
    Serialise {
        /// Destination file relative to the output root.
        path: Utf8PathBuf,
        /// Error detail from `serde_json`.
        message: String,
    },

    /// A file could not be written.
    #[error("failed to write '{path}': {message}")]
    Write {
        /// File relative to the output root.
        path: Utf8PathBuf,
        /// Error detail from the filesystem.
        message: String,
    },

    /// The completed record could not be moved into place.
    #[error("failed to move '{from}' to '{to}': {message}")]
    Rename {
        /// Temporary file relative to the output root.
        from: Utf8PathBuf,
        /// Final file relative to the output root.
        to: Utf8PathBuf,
        /// Error detail from the filesystem.
        message: String,
    },
}
