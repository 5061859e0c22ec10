//! Data model for the ledger ETL pipeline.
//!
//! Defines the canonical column names of the customer dataset (source,
//! derived and branch-summary columns) and the options that parameterize a
//! pipeline run.

pub mod columns;
pub mod options;

pub use options::PipelineOptions;
