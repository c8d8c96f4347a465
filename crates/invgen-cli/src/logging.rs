//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `invgen-core`
//! and `invgen-adapters` only *emit* spans and events.
//!
//! Two sinks, each with its own filter and format:
//!
//! - **console** (stderr): message text only, level from the flags below.
//! - **file** (`inventory.log`): `2024-01-31 12:00:00 - INFO - message`,
//!   always INFO and above, size-rotated by [`RollingFile`].
//!
//! # Console verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::fmt;
use std::io::IsTerminal as _;

use anyhow::Context as _;
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::Targets,
    fmt::{FmtContext, FormatEvent, FormatFields, format},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;
use crate::rolling::RollingFile;

/// Crates whose events reach the sinks.
const LOG_TARGETS: [&str; 3] = ["invgen", "invgen_core", "invgen_adapters"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Keeps the file sink's background writer alive.
///
/// Dropping it flushes buffered lines, so hold it until the process exits.
#[must_use]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<LogGuard> {
    let level = derive_level(args);

    // RUST_LOG wins; otherwise every crate of ours gets the same level.
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            LOG_TARGETS
                .iter()
                .map(|target| format!("{target}={level}"))
                .collect::<Vec<_>>()
                .join(","),
        )
    });

    let use_ansi = !(args.no_color || config.output.no_color) && std::io::stderr().is_terminal();

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat::message_only())
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let (file_layer, file_guard) = if config.logging.enabled {
        let path = args
            .log_file
            .clone()
            .unwrap_or_else(|| config.logging.file.clone());
        let writer = RollingFile::open(&path, config.logging.max_bytes, config.logging.max_files)
            .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(writer);

        let file_targets = LOG_TARGETS
            .iter()
            .fold(Targets::new(), |targets, target| {
                targets.with_target(*target, Level::INFO)
            });
        let layer = tracing_subscriber::fmt::layer()
            .event_format(LineFormat::timestamped())
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(file_targets);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(LogGuard { _file: file_guard })
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// One line per event, with an optional `timestamp - LEVEL - ` prefix.
/// Span context is not printed.
#[derive(Debug, Clone, Copy)]
struct LineFormat {
    timestamped: bool,
}

impl LineFormat {
    fn message_only() -> Self {
        Self { timestamped: false }
    }

    fn timestamped() -> Self {
        Self { timestamped: true }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if self.timestamped {
            write!(
                writer,
                "{} - {} - ",
                Local::now().format(TIMESTAMP_FORMAT),
                event.metadata().level()
            )?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
