//! Batch analysis
//!
//! Analyzes newline-separated passwords read from a file or any buffered reader.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::evaluator::analyze;
use crate::types::PasswordAnalysis;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read passwords: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Analyzes every non-empty line of `reader`, in input order.
///
/// Line terminators (`\n` or `\r\n`) are stripped; other whitespace is part of
/// the password. Empty lines are skipped, as empty input has no analysis.
///
/// # Errors
///
/// Returns error if reading fails or a line is not valid UTF-8.
pub fn analyze_reader<R: BufRead>(reader: R) -> Result<Vec<PasswordAnalysis>, BatchError> {
    let mut analyses = Vec::new();
    for line in reader.lines() {
        let password = line?;
        if password.is_empty() {
            continue;
        }
        analyses.push(analyze(&password));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Batch analyzed: {} passwords", analyses.len());

    Ok(analyses)
}

/// Analyzes every non-empty line of the file at `path`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<Vec<PasswordAnalysis>, BatchError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Batch analysis FAILED: FileNotFound {:?}", path);
        return Err(BatchError::FileNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path)?;
    analyze_reader(std::io::BufReader::new(file))
}
