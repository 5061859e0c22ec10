//! Error types for customer data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the source file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file not found or not readable.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header row could not be read.
    #[error("failed to read header of {path}: {source}")]
    HeaderRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// One or more referenced columns are absent from the header.
    #[error("{path} is missing required columns: {}", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// Polars failed to parse the file.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed DataFrame operation.
    #[error("dataframe operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_names() {
        let err = IngestError::MissingColumns {
            path: PathBuf::from("customers.csv"),
            columns: vec!["Balance".to_string(), "Branch".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "customers.csv is missing required columns: Balance, Branch"
        );
    }
}
