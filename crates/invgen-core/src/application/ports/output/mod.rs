//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `invgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{InventoryDocument, RawRecord};
use crate::error::InventoryResult;

/// Port for obtaining server records.
///
/// Implemented by:
/// - `invgen_adapters::loader::FileRecordLoader` (built-in list, JSON, CSV)
///
/// Loaders do not check for required fields; that is left to
/// [`InventoryDocument::from_records`].
#[cfg_attr(test, mockall::automock)]
pub trait RecordLoader: Send + Sync {
    /// Load records from `input`, or the built-in list when `input` is `None`.
    fn load<'a>(&self, input: Option<&'a Path>) -> InventoryResult<Vec<RawRecord>>;
}

/// Port for turning an inventory into text and back.
///
/// Implemented by:
/// - `invgen_adapters::format::YamlFormat` (block-style YAML)
#[cfg_attr(test, mockall::automock)]
pub trait InventoryFormat: Send + Sync {
    /// Encode the document. Nested mappings must survive a round trip
    /// through [`InventoryFormat::parse`].
    fn render(&self, document: &InventoryDocument) -> InventoryResult<String>;

    /// Decode text previously produced by [`InventoryFormat::render`].
    fn parse(&self, text: &str) -> InventoryResult<InventoryDocument>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `invgen_adapters::filesystem::LocalFilesystem` (production)
/// - `invgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> InventoryResult<()>;
}
