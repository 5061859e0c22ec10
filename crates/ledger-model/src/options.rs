//! Options that parameterize a pipeline run.

use chrono::{Local, NaiveDate};

/// Default age threshold for the adult-customer filter.
pub const DEFAULT_AGE_THRESHOLD: i64 = 35;

/// Run-level knobs for cleaning and enrichment.
///
/// The ingestion date defaults to the current local date; tests and
/// reproducible reruns inject a fixed date instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Rows with `age` at or below this value are dropped.
    pub age_threshold: i64,
    /// Value written into the `ingestion_date` column for every row.
    pub ingestion_date: NaiveDate,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            age_threshold: DEFAULT_AGE_THRESHOLD,
            ingestion_date: Local::now().date_naive(),
        }
    }
}

impl PipelineOptions {
    /// Set the age threshold.
    #[must_use]
    pub fn with_age_threshold(mut self, threshold: i64) -> Self {
        self.age_threshold = threshold;
        self
    }

    /// Pin the ingestion date instead of using the current date.
    #[must_use]
    pub fn with_ingestion_date(mut self, date: NaiveDate) -> Self {
        self.ingestion_date = date;
        self
    }
}
