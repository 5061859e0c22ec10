//! Library components of the ledger ETL CLI.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
