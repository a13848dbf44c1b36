use std::path::PathBuf;
use thiserror::Error;

/// Error types for the converter pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("worksheet '{0}' not found in workbook")]
    MissingWorksheet(&'static str),

    #[error("config file not found: {}", .0.display())]
    MissingConfig(PathBuf),

    #[error("config file {}: {reason}", .file.display())]
    BadConfig { file: PathBuf, reason: String },

    #[error("invalid rule pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, Error>;
