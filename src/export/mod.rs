//! Human-readable artefacts derived from stored pull request records.

mod diff_excerpt;

pub use diff_excerpt::{render_diff_excerpt, write_diff_excerpt};
