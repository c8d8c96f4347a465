//! Inventory Service - main application orchestrator.
//!
//! This service coordinates the whole run:
//! 1. Load records
//! 2. Build the inventory document
//! 3. Write the inventory
//! 4. Write the playbook (unless skipped)
//!
//! Any failure stops the run; later steps never see a half-built document.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, instrument};

use crate::{
    application::ports::{Filesystem, InventoryFormat, RecordLoader},
    domain::{DEFAULT_PLAYBOOK_FILE, InventoryDocument, NGINX_PLAYBOOK, RawRecord},
    error::{InventoryError, InventoryResult},
};

/// What a single run should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Record file; `None` selects the built-in server list.
    pub input: Option<PathBuf>,
    /// Destination of the inventory document.
    pub inventory_path: PathBuf,
    /// Destination of the playbook; `None` skips it.
    pub playbook_path: Option<PathBuf>,
}

impl GenerateRequest {
    /// Built-in records, given inventory path, playbook at its default name.
    pub fn new(inventory_path: impl Into<PathBuf>) -> Self {
        Self {
            input: None,
            inventory_path: inventory_path.into(),
            playbook_path: Some(PathBuf::from(DEFAULT_PLAYBOOK_FILE)),
        }
    }

    /// Read records from `input`. An empty path means the built-in list.
    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input.filter(|p| !p.as_os_str().is_empty());
        self
    }

    pub fn with_playbook(mut self, playbook_path: Option<PathBuf>) -> Self {
        self.playbook_path = playbook_path;
        self
    }
}

/// Where the records of a run came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum RecordOrigin {
    Builtin,
    File(PathBuf),
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub source: RecordOrigin,
    pub records: usize,
    pub groups: usize,
    pub hosts: usize,
    pub inventory_path: PathBuf,
    /// `None` when the playbook was skipped.
    pub playbook_path: Option<PathBuf>,
}

/// Main inventory service.
pub struct InventoryService {
    loader: Box<dyn RecordLoader>,
    format: Box<dyn InventoryFormat>,
    filesystem: Box<dyn Filesystem>,
}

impl InventoryService {
    /// Create a new inventory service with the given adapters.
    pub fn new(
        loader: Box<dyn RecordLoader>,
        format: Box<dyn InventoryFormat>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            loader,
            format,
            filesystem,
        }
    }

    /// Run load, build, write and (optionally) playbook emission.
    #[instrument(
        skip_all,
        fields(
            input = ?request.input,
            output = %request.inventory_path.display()
        )
    )]
    pub fn generate(&self, request: &GenerateRequest) -> InventoryResult<GenerateReport> {
        let records = self.load_records(request.input.as_deref())?;
        let document = self.build_inventory(&records)?;
        self.write_inventory(&document, &request.inventory_path)?;

        match &request.playbook_path {
            Some(path) => self.emit_playbook(path)?,
            None => info!("Playbook creation skipped as requested."),
        }

        info!("All operations completed successfully.");

        Ok(GenerateReport {
            source: request
                .input
                .clone()
                .map_or(RecordOrigin::Builtin, RecordOrigin::File),
            records: records.len(),
            groups: document.group_count(),
            hosts: document.host_count(),
            inventory_path: request.inventory_path.clone(),
            playbook_path: request.playbook_path.clone(),
        })
    }

    /// Load records through the configured loader.
    pub fn load_records(&self, input: Option<&Path>) -> InventoryResult<Vec<RawRecord>> {
        self.loader.load(input)
    }

    /// Group records into an inventory document.
    pub fn build_inventory(&self, records: &[RawRecord]) -> InventoryResult<InventoryDocument> {
        InventoryDocument::from_records(records).map_err(|e| {
            error!("Failed to build inventory: {e}");
            InventoryError::Domain(e)
        })
    }

    /// Encode the document and write it to `path`.
    pub fn write_inventory(&self, document: &InventoryDocument, path: &Path) -> InventoryResult<()> {
        let text = self.format.render(document)?;
        self.filesystem.write_file(path, &text).inspect_err(|e| {
            error!("Failed to create inventory file: {e}");
        })?;
        info!("Inventory file '{}' created successfully!", path.display());
        Ok(())
    }

    /// Write the fixed playbook to `path`.
    pub fn emit_playbook(&self, path: &Path) -> InventoryResult<()> {
        self.filesystem
            .write_file(path, NGINX_PLAYBOOK)
            .inspect_err(|e| error!("Failed to create playbook file: {e}"))?;
        info!("Playbook '{}' created successfully.", path.display());
        Ok(())
    }
}
