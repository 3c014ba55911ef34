//! Output handler traits and types

use crate::crawler::SequencedRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for record writers
///
/// A writer persists a completed run's records under a file name of the
/// caller's choosing and reports the path it wrote.
pub trait RecordWriter {
    /// Writes all records to `file_name`, returning the full path written
    ///
    /// # Arguments
    ///
    /// * `records` - Records in sequence order
    /// * `file_name` - Destination file name inside the writer's directory
    fn save(&self, records: &[SequencedRecord], file_name: &str) -> OutputResult<PathBuf>;
}
