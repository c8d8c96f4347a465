//! Core domain layer for invgen.
//!
//! Pure logic only: no filesystem, no parsing of external formats, no
//! subscribers. Records come in through the `RecordLoader` port and the
//! finished [`InventoryDocument`] leaves through `InventoryFormat`.

pub mod error;
pub mod inventory;
pub mod playbook;
pub mod record;
pub mod source;

pub use error::{DomainError, ErrorCategory};
pub use inventory::{HostGroup, HostVars, InventoryDocument, InventoryRoot};
pub use playbook::{DEFAULT_PLAYBOOK_FILE, NGINX_PLAYBOOK};
pub use record::{REQUIRED_FIELDS, RawRecord, ServerRecord};
pub use source::InputFormat;
