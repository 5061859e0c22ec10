//! The four-stage ETL pipeline driver.
//!
//! Stages run strictly in order:
//! 1. **Load**: read the raw customer CSV with inferred schema
//! 2. **Clean**: drop rows with null critical financial columns
//! 3. **Enrich**: derived columns, age filter, then persist the cleaned
//!    Parquet output
//! 4. **Aggregate**: re-read the persisted cleaned output, group by branch,
//!    persist the branch summary
//!
//! No stage recovers from errors; everything propagates to the caller, which
//! is the single failure boundary of the job. The aggregation deliberately
//! re-reads the cleaned output from disk instead of chaining the in-memory
//! frame, so the persisted dataset is exactly what gets summarized.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use ledger_ingest::read_customer_csv;
use ledger_model::PipelineOptions;
use ledger_output::{read_parquet, write_parquet, write_run_report};
use ledger_transform::{drop_missing_critical, enrich_customers, summarize_branches};

use crate::types::{RunReport, StageReport};

/// File name of the cleaned dataset inside the cleaned output directory.
pub const CLEANED_FILE_NAME: &str = "cleaned_customers.parquet";
/// File name of the branch summary inside the summary output directory.
pub const SUMMARY_FILE_NAME: &str = "branch_summary.parquet";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Everything a run needs: input location, output locations, options.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the raw customer CSV.
    pub input: PathBuf,
    /// Destination of the cleaned Parquet output (full overwrite).
    pub cleaned_path: PathBuf,
    /// Destination of the branch summary Parquet output (full overwrite).
    pub summary_path: PathBuf,
    /// Cleaning and enrichment options.
    pub options: PipelineOptions,
    /// Optional JSON run-report destination.
    pub report_json: Option<PathBuf>,
}

/// Run the pipeline end to end and return the run report.
///
/// Concurrent runs against the same output paths are unsafe (last writer
/// wins); the orchestrating environment must not overlap runs.
pub fn run_pipeline(config: &RunConfig) -> Result<RunReport> {
    let started = Local::now();
    info!(input = %config.input.display(), "ETL job started");
    let mut stages: Vec<StageReport> = Vec::with_capacity(4);

    // Stage 1: load
    let stage_start = Instant::now();
    let raw = info_span!("load", input = %config.input.display())
        .in_scope(|| read_customer_csv(&config.input))
        .with_context(|| format!("load {}", config.input.display()))?;
    let input_rows = raw.height();
    push_stage(&mut stages, "load", input_rows, stage_start);

    // Stage 2: clean
    let stage_start = Instant::now();
    let cleaned = info_span!("clean")
        .in_scope(|| drop_missing_critical(raw))
        .context("clean stage")?;
    push_stage(&mut stages, "clean", cleaned.height(), stage_start);

    // Stage 3: enrich and persist the cleaned dataset
    let stage_start = Instant::now();
    let mut enriched = info_span!("enrich")
        .in_scope(|| enrich_customers(cleaned, &config.options))
        .context("enrich stage")?;
    let cleaned_rows = enriched.height();
    write_parquet(&mut enriched, &config.cleaned_path)
        .with_context(|| format!("persist cleaned output {}", config.cleaned_path.display()))?;
    push_stage(&mut stages, "enrich", cleaned_rows, stage_start);

    // Stage 4: aggregate from the persisted cleaned output
    let stage_start = Instant::now();
    let mut summary = info_span!("aggregate")
        .in_scope(|| -> Result<_> {
            let persisted = read_parquet(&config.cleaned_path)?;
            summarize_branches(persisted)
        })
        .context("aggregate stage")?;
    let branch_count = summary.height();
    write_parquet(&mut summary, &config.summary_path)
        .with_context(|| format!("persist summary output {}", config.summary_path.display()))?;
    push_stage(&mut stages, "aggregate", branch_count, stage_start);

    let finished = Local::now();
    let report = RunReport {
        started_at: started.format(TIMESTAMP_FORMAT).to_string(),
        finished_at: finished.format(TIMESTAMP_FORMAT).to_string(),
        input_rows,
        cleaned_rows,
        branch_count,
        cleaned_path: config.cleaned_path.clone(),
        summary_path: config.summary_path.clone(),
        stages,
    };
    if let Some(path) = &config.report_json {
        write_run_report(&report, path)
            .with_context(|| format!("write run report {}", path.display()))?;
    }
    info!(
        input_rows,
        cleaned_rows,
        branch_count,
        summary = %config.summary_path.display(),
        "ETL job completed"
    );
    Ok(report)
}

fn push_stage(stages: &mut Vec<StageReport>, stage: &str, rows: usize, start: Instant) {
    let duration_ms = start.elapsed().as_millis();
    info!(stage, rows, duration_ms, "stage complete");
    stages.push(StageReport {
        stage: stage.to_string(),
        rows,
        duration_ms,
    });
}
