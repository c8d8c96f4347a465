//! Record loader adapter.
//!
//! Resolves the optional input path to a list of [`RawRecord`]s:
//!
//! | Input            | Result                                  |
//! |------------------|-----------------------------------------|
//! | none / empty     | built-in list ([`builtin::default_records`]) |
//! | missing file     | `FileNotFound`                          |
//! | `*.json`         | array of objects                        |
//! | `*.csv`          | header row + data rows                  |
//! | anything else    | `UnsupportedFormat`                     |

pub mod builtin;
mod csv_source;
mod json_source;

use std::fs;
use std::path::Path;

use tracing::{error, info, instrument, warn};

use invgen_core::{
    application::{ApplicationError, ports::RecordLoader},
    domain::{InputFormat, RawRecord},
    error::InventoryResult,
};

pub use csv_source::parse_csv;
pub use json_source::parse_json;

/// Production loader reading from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRecordLoader;

impl FileRecordLoader {
    pub fn new() -> Self {
        Self
    }

    fn load_file(&self, path: &Path) -> InventoryResult<Vec<RawRecord>> {
        if !path.exists() {
            error!("Input file '{}' not found.", path.display());
            return Err(ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let Some(format) = InputFormat::from_path(path) else {
            let err = ApplicationError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: InputFormat::extension_label(path),
            };
            error!("Failed to load input data: {err}");
            return Err(err.into());
        };

        let bytes = fs::read(path).map_err(|e| {
            error!("Failed to load input data: {e}");
            ApplicationError::ReadError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let text = String::from_utf8(bytes).map_err(|e| {
            let err = ApplicationError::Parse {
                path: path.to_path_buf(),
                format,
                reason: e.utf8_error().to_string(),
            };
            error!("Failed to load input data: {err}");
            err
        })?;

        let records = match format {
            InputFormat::Json => parse_json(&text, path),
            InputFormat::Csv => parse_csv(&text, path),
        }
        .inspect_err(|e| error!("Failed to load input data: {e}"))?;

        info!(
            "Loaded {} server entries from {}",
            records.len(),
            path.display()
        );
        Ok(records)
    }
}

impl RecordLoader for FileRecordLoader {
    #[instrument(skip(self))]
    fn load(&self, input: Option<&Path>) -> InventoryResult<Vec<RawRecord>> {
        match input.filter(|p| !p.as_os_str().is_empty()) {
            None => {
                warn!("No input file provided. Using default static server list");
                Ok(builtin::default_records())
            }
            Some(path) => self.load_file(path),
        }
    }
}
