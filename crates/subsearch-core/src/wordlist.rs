//! Streaming wordlist reader.
//!
//! Candidates are produced lazily, line by line, so the prober can start
//! working before the file has been fully read and memory stays bounded for
//! very large wordlists.

use crate::Result;
use futures::{Stream, StreamExt};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing::warn;

/// Open a newline-delimited wordlist and stream its candidate labels.
///
/// Lines are trimmed of surrounding whitespace; blank lines are skipped.
/// A line that cannot be decoded is logged and skipped rather than aborting
/// the stream mid-run.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened.
///
/// The returned stream owns the opened file and borrows nothing from `path`,
/// so it can outlive the path it was opened from.
pub async fn stream_labels(path: &Path) -> Result<impl Stream<Item = String> + use<>> {
    let file = File::open(path).await?;
    let lines = LinesStream::new(BufReader::new(file).lines());

    Ok(lines.filter_map(|line| async move {
        match line {
            Ok(line) => {
                let label = line.trim();
                if label.is_empty() {
                    None
                } else {
                    Some(label.to_string())
                }
            },
            Err(err) => {
                warn!(error = %err, "skipping unreadable wordlist line");
                None
            },
        }
    }))
}
