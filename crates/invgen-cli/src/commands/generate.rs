//! Implementation of the inventory generation run.
//!
//! Responsibility: resolve CLI flags against config, call the core
//! inventory service, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use invgen_adapters::{FileRecordLoader, LocalFilesystem, YamlFormat};
use invgen_core::application::{GenerateReport, GenerateRequest, InventoryService, RecordOrigin};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Run a full generation: load, build, write inventory, write playbook.
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(args, &config);
    debug!(?request, "Request resolved");

    let service = InventoryService::new(
        Box::new(FileRecordLoader::new()),
        Box::new(YamlFormat::new()),
        Box::new(LocalFilesystem::new()),
    );

    let report = service.generate(&request)?;
    show_report(&report, &output)?;

    Ok(())
}

/// Merge CLI flags over config values.
pub fn build_request(args: GenerateArgs, config: &AppConfig) -> GenerateRequest {
    let inventory: PathBuf = args
        .output
        .unwrap_or_else(|| config.output.inventory.clone());
    let playbook = (!args.no_playbook).then(|| config.output.playbook.clone());

    GenerateRequest::new(inventory)
        .with_input(args.input)
        .with_playbook(playbook)
}

fn show_report(report: &GenerateReport, output: &OutputManager) -> std::io::Result<()> {
    if output.format() == OutputFormat::Json {
        return output.json(report);
    }

    let source = match &report.source {
        RecordOrigin::Builtin => "built-in server list".to_owned(),
        RecordOrigin::File(path) => path.display().to_string(),
    };
    output.print(&format!("Loaded {} records from {source}", report.records))?;
    output.success(&format!(
        "Inventory written to {} ({} groups, {} hosts)",
        report.inventory_path.display(),
        report.groups,
        report.hosts,
    ))?;
    match &report.playbook_path {
        Some(path) => output.success(&format!("Playbook written to {}", path.display())),
        None => output.info("Playbook creation skipped as requested."),
    }
}
