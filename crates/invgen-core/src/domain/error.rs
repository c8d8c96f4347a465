use thiserror::Error;

/// Domain error type.
///
/// Raised by the inventory builder when a loaded record cannot be turned
/// into a [`crate::domain::ServerRecord`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record lacks one of `ip`, `hostname` or `group`.
    ///
    /// `index` is the 0-based position of the record in the loaded sequence.
    #[error("record #{index} is missing required field '{field}'")]
    MissingField { field: &'static str, index: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingField { field, index } => vec![
                format!("Add a '{}' value to record #{} (counting from 0)", field, index),
                "Every record needs 'ip', 'hostname' and 'group'".into(),
                "For CSV input, check the header row spells each column exactly".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
