//! Markdown diff excerpt written next to each stored pull request record.
//!
//! The excerpt lists every review comment under a heading for its file,
//! followed by the diff context it was made against.

use std::io::{self, Write};

use crate::collection::{PullRequestMetadata, ReviewComment, display_position};

/// Writes the excerpt for `metadata` to `writer`.
///
/// Files appear in the order of their first comment; comments keep their
/// order within a file.
///
/// # Errors
///
/// Returns the underlying I/O error if writing fails.
pub fn write_diff_excerpt<W: Write>(
    writer: &mut W,
    metadata: &PullRequestMetadata,
) -> io::Result<()> {
    writeln!(writer, "# PR #{}: {}", metadata.number, metadata.title)?;
    writeln!(writer, "# Closed at: {}", metadata.closed_at.to_rfc3339())?;
    writeln!(writer, "# Merged: {}", metadata.is_merged)?;

    for (file_path, comments) in group_by_file(&metadata.review_comments) {
        writeln!(writer)?;
        writeln!(writer, "## File: {file_path}")?;
        for comment in comments {
            write_comment(writer, comment)?;
        }
    }

    Ok(())
}

/// Renders the excerpt into a string.
#[must_use]
pub fn render_diff_excerpt(metadata: &PullRequestMetadata) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    if write_diff_excerpt(&mut buffer, metadata).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

fn write_comment<W: Write>(writer: &mut W, comment: &ReviewComment) -> io::Result<()> {
    let fence = compute_fence(&comment.diff_context);
    writeln!(writer)?;
    writeln!(
        writer,
        "### Comment by {} at position {}",
        comment.author,
        display_position(comment.position)
    )?;
    writeln!(writer, "Comment: {}", comment.body)?;
    writeln!(writer)?;
    writeln!(writer, "{fence}diff")?;
    writeln!(writer, "{}", comment.diff_context)?;
    writeln!(writer, "{fence}")
}

fn group_by_file(comments: &[ReviewComment]) -> Vec<(&str, Vec<&ReviewComment>)> {
    let mut groups: Vec<(&str, Vec<&ReviewComment>)> = Vec::new();
    for comment in comments {
        let path = comment.file_path.as_str();
        match groups.iter_mut().find(|(existing, _)| *existing == path) {
            Some((_, members)) => members.push(comment),
            None => groups.push((path, vec![comment])),
        }
    }
    groups
}

/// Computes a fence longer than any backtick run in the content.
fn compute_fence(content: &str) -> String {
    let max_backticks = content.split(|c| c != '`').map(str::len).max().unwrap_or(0);
    "`".repeat(max_backticks.max(2) + 1)
}
