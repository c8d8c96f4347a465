//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `invgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RecordLoader`: Server record acquisition
//!   - `InventoryFormat`: Inventory text encoding
//!   - `Filesystem`: File writes

pub mod output;

pub use output::{Filesystem, InventoryFormat, RecordLoader};

#[cfg(test)]
pub use output::{MockFilesystem, MockInventoryFormat, MockRecordLoader};
