//! Application layer errors.
//!
//! These errors represent failures at the edges (input files, encoding,
//! output files). Record validation failures are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::InputFormat;
use crate::error::ErrorCategory;

/// Errors that occur while loading input or writing output.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The requested input file does not exist.
    #[error("Input file '{path}' not found")]
    FileNotFound { path: PathBuf },

    /// The input file extension is neither `.json` nor `.csv`.
    #[error("Unsupported file format '{extension}' for '{path}'. Use .json or .csv")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The input file exists but its content could not be parsed.
    #[error("Failed to parse {format} input '{path}': {reason}")]
    Parse {
        path: PathBuf,
        format: InputFormat,
        reason: String,
    },

    /// The input file exists but could not be read.
    #[error("Failed to read '{path}': {reason}")]
    ReadError { path: PathBuf, reason: String },

    /// The inventory could not be serialized.
    #[error("Failed to encode inventory: {reason}")]
    Encoding { reason: String },

    /// An output file could not be written.
    #[error("Failed to write '{path}': {reason}")]
    WriteError { path: PathBuf, reason: String },

    /// Shared state access failed (lock poisoned).
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Check the --input path".into(),
                "Omit --input to use the built-in server list".into(),
            ],
            Self::UnsupportedFormat { extension, .. } => vec![
                format!("'{}' files are not supported", extension),
                "Provide a .json array of objects or a .csv file with a header row".into(),
            ],
            Self::Parse { format, .. } => vec![
                format!("The file is not valid {}", format),
                "JSON input must be an array of objects with ip, hostname and group".into(),
                "CSV input must start with a header row: ip,hostname,group".into(),
            ],
            Self::ReadError { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check that the path is a regular file you can read".into(),
            ],
            Self::WriteError { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::UnsupportedFormat { .. } | Self::Parse { .. } => ErrorCategory::Validation,
            Self::ReadError { .. } | Self::WriteError { .. } => ErrorCategory::Internal,
            Self::Encoding { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
