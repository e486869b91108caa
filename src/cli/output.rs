//! Output formatting for the run summary.

use std::io::{self, Write};

use gleaner::{CollectionSummary, IntakeError};

/// Writes the run counts, plus the failure count when any candidate failed.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] when the writer fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &CollectionSummary,
) -> Result<(), IntakeError> {
    writeln!(
        writer,
        "Found {} PRs, processed {}, skipped {}",
        summary.found, summary.processed, summary.skipped
    )
    .map_err(|e| io_error(&e))?;

    let errored = summary.errored();
    if errored > 0 {
        writeln!(writer, "{errored} PRs failed; see the log for details")
            .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn io_error(error: &io::Error) -> IntakeError {
    IntakeError::Io {
        message: error.to_string(),
    }
}
