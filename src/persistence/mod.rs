//! Local persistence of collected pull request records.
//!
//! Each pull request is stored under a path derived only from its
//! repository, close date, and number, which lets a run decide whether a
//! pull request is already collected before fetching anything.

mod error;
mod layout;
mod record;
mod store;

pub use error::PersistenceError;
pub use layout::RecordLayout;
pub use record::{StoredPullRequest, StoredReviewComment};
pub use store::{FilesystemReviewStore, ReviewStore};

#[cfg(test)]
pub use store::MockReviewStore;
