//! Application layer for invgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InventoryService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The grouping rules themselves live in `crate::domain`; this layer only
//! sequences load, build and write.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateReport, GenerateRequest, InventoryService, RecordOrigin};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, InventoryFormat, RecordLoader};

pub use error::ApplicationError;
