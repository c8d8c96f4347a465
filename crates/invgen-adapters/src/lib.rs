//! Infrastructure adapters for invgen.
//!
//! This crate implements the ports defined in `invgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod format;
pub mod loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use format::YamlFormat;
pub use loader::FileRecordLoader;
