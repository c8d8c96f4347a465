//! Invgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the invgen
//! inventory generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           invgen-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (InventoryService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (RecordLoader, InventoryFormat, Filesystem)
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     invgen-adapters (Infrastructure)    │
//! │ (FileRecordLoader, YamlFormat, Local/Memory FS)
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (RawRecord, ServerRecord, Inventory)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use invgen_core::application::{GenerateRequest, InventoryService};
//!
//! // Adapters come from `invgen-adapters`.
//! let service = InventoryService::new(loader, format, filesystem);
//! let report = service.generate(&GenerateRequest::new("inventory.yaml")).unwrap();
//! println!("{} hosts written", report.hosts);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateReport, GenerateRequest, InventoryService, RecordOrigin,
        ports::{Filesystem, InventoryFormat, RecordLoader},
    };
    pub use crate::domain::{
        HostGroup, HostVars, InputFormat, InventoryDocument, RawRecord, ServerRecord,
    };
    pub use crate::error::{InventoryError, InventoryResult};
}
