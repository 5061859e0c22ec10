//! Row transformations over the customer dataset.
//!
//! Three stages, all pure functions over `DataFrame`s:
//! - [`clean`]: drop rows with nulls in the critical financial columns
//! - [`enrich`]: derived columns and the adult-customer filter
//! - [`aggregate`]: branch-level sums, averages and counts

pub mod aggregate;
pub mod clean;
pub mod enrich;

pub use aggregate::summarize_branches;
pub use clean::drop_missing_critical;
pub use enrich::enrich_customers;
