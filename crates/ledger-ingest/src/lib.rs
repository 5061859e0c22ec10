//! Customer CSV ingestion.
//!
//! The loader reads one delimited file with a header row into a Polars
//! `DataFrame` with inferred column types. A raw header peek runs first so
//! a file missing any of the referenced columns fails before the full parse.

pub mod csv_ingest;
pub mod error;
pub mod polars_utils;

pub use csv_ingest::{read_csv_schema, read_customer_csv};
pub use error::{IngestError, Result};
pub use polars_utils::{any_to_f64, any_to_i64, any_to_string, parse_f64};
