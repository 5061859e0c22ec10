//! CLI argument definitions for the ledger ETL.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ledger-etl",
    version,
    about = "Batch cleaning and branch summarization of customer financial records",
    long_about = "Clean a raw customer CSV, derive per-row financial indicators,\n\
                  and compute branch-level aggregate statistics.\n\n\
                  Produces two Parquet outputs per run, both fully overwritten:\n\
                  the cleaned dataset and the branch summary."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the ETL pipeline over a raw customer CSV.
    Run(RunArgs),

    /// List the source and derived columns of the cleaned dataset.
    Columns,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the raw customer CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Directory for the cleaned dataset (default: <INPUT_CSV dir>/output).
    #[arg(long = "cleaned-dir", value_name = "DIR")]
    pub cleaned_dir: Option<PathBuf>,

    /// Directory for the branch summary (default: <INPUT_CSV dir>/output).
    #[arg(long = "summary-dir", value_name = "DIR")]
    pub summary_dir: Option<PathBuf>,

    /// Age threshold for the adult-customer filter.
    #[arg(long = "age-threshold", value_name = "YEARS", default_value_t = 35)]
    pub age_threshold: i64,

    /// Pin the ingestion date (YYYY-MM-DD) instead of using today.
    ///
    /// Reruns with the same date and input produce identical outputs.
    #[arg(long = "ingestion-date", value_name = "DATE")]
    pub ingestion_date: Option<NaiveDate>,

    /// Write a JSON run report to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
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
