//! Result types produced by a pipeline run.

use std::path::PathBuf;

use serde::Serialize;

/// Row count and timing of one pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    /// Stage name (load, clean, enrich, aggregate).
    pub stage: String,
    /// Rows produced by the stage.
    pub rows: usize,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u128,
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Wall-clock start of the run.
    pub started_at: String,
    /// Wall-clock end of the run.
    pub finished_at: String,
    /// Rows in the raw input file.
    pub input_rows: usize,
    /// Rows in the cleaned output after filtering.
    pub cleaned_rows: usize,
    /// Distinct branches in the summary output.
    pub branch_count: usize,
    /// Location of the cleaned Parquet output.
    pub cleaned_path: PathBuf,
    /// Location of the branch summary Parquet output.
    pub summary_path: PathBuf,
    /// Per-stage row counts and timings.
    pub stages: Vec<StageReport>,
}
