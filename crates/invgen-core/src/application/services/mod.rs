//! Application services - orchestrate use cases.

pub mod inventory_service;

pub use inventory_service::{GenerateReport, GenerateRequest, InventoryService, RecordOrigin};
