//! CLI argument definitions for the de-identification pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fhir-deid",
    version,
    about = "De-identify clinical record batches for downstream feature extraction",
    long_about = "Ingest bulk-exported clinical record batches, strip or transform\n\
                  identifying fields (consistent pseudonymization, per-patient\n\
                  date-shift, free-text redaction), and persist the sanitized\n\
                  records for population-level analysis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory holding the sanitized record store.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = "deid-data",
        global = true
    )]
    pub data_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest a bulk-export folder, de-identifying every record batch.
    Ingest(IngestArgs),

    /// List sanitized records of one kind as JSON lines.
    List(ListArgs),

    /// Print one sanitized record by its resource id.
    Get(GetArgs),

    /// List the supported record kinds in ingestion order.
    Kinds,

    /// Delete all sanitized records.
    Clear,
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Folder containing per-kind NDJSON export files.
    #[arg(value_name = "EXPORT_FOLDER")]
    pub export_folder: PathBuf,

    /// Clear all existing records before ingesting.
    #[arg(long = "clear-existing")]
    pub clear_existing: bool,

    /// Abort on the first store failure instead of skipping the record.
    ///
    /// By default a rejected record is logged, counted as skipped, and
    /// the batch continues; re-running ingestion is idempotent either
    /// way.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Record kind to list (e.g. Patient, MedicationRequest).
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Number of records to skip.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Maximum number of records to return.
    #[arg(long, default_value_t = 100)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct GetArgs {
    /// Record kind to look up (e.g. Patient, MedicationRequest).
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// The record's resource id.
    #[arg(value_name = "RESOURCE_ID")]
    pub resource_id: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
