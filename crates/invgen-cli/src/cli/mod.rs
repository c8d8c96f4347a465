//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "invgen",
    bin_name = "invgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a dynamic Ansible inventory file.",
    long_about = "invgen reads a server list (built-in, JSON or CSV), groups the \
                  hosts by their group name and writes an Ansible YAML inventory \
                  plus an NGINX install playbook.",
    after_help = "EXAMPLES:\n\
        \x20 invgen\n\
        \x20 invgen --input servers.json --output hosts.yaml\n\
        \x20 invgen --input servers.csv --no-playbook\n\
        \x20 invgen -v --log-file /var/log/invgen.log",
)]
pub struct Cli {
    /// Flags shared by every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to generate.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments controlling inventory generation.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Output filename for the generated inventory file.
    ///
    /// Defaults to `output.inventory` from the config, which is
    /// `inventory.yaml` unless changed.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output filename for the generated inventory file [default: inventory.yaml]"
    )]
    pub output: Option<PathBuf>,

    /// Skip creating the playbook file.
    #[arg(long = "no-playbook", help = "Skip creating the playbook file")]
    pub no_playbook: bool,

    /// Server list to read instead of the built-in one.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Optional path to a JSON or CSV file containing server information"
    )]
    pub input: Option<PathBuf>,
}
