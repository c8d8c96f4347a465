//! Input file formats.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Formats a record file may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Detect the format from the suffix of the file name in `path`.
    ///
    /// Matching is case-sensitive: `servers.JSON` is not recognised. A bare
    /// `.json` file name counts as JSON.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with(".json") {
            Some(Self::Json)
        } else if name.ends_with(".csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }

    /// The final extension of `path` for display in errors, or `(none)`.
    pub fn extension_label(path: &Path) -> String {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_else(|| "(none)".to_owned())
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Csv => write!(f, "CSV"),
        }
    }
}
