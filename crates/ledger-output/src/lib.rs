//! Durable outputs of the ledger ETL: Parquet datasets and run reports.

pub mod parquet;
pub mod report;

pub use parquet::{read_parquet, write_parquet};
pub use report::write_run_report;
