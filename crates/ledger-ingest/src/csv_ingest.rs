//! CSV loading for the raw customer dataset.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, DataType, Expr, IntoLazy, SerReader, col};
use tracing::debug;

use ledger_model::columns::{AGE, NUMERIC_COLUMNS, REQUIRED_COLUMNS};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read only the header row of a delimited file.
///
/// Cheap peek used to fail fast on files that do not carry the referenced
/// columns, before Polars parses the whole file.
pub fn read_csv_schema(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| {
            if matches!(source.kind(), csv::ErrorKind::Io(_)) {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: std::io::Error::other(source.to_string()),
                }
            } else {
                IngestError::HeaderRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
    let headers = reader
        .headers()
        .map_err(|source| IngestError::HeaderRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(headers.iter().map(normalize_header).collect())
}

/// Read the customer file into a `DataFrame` with inferred column types.
///
/// Empty cells become nulls; column dtypes are inferred from content, not
/// declared. Fails with [`IngestError::MissingColumns`] when any referenced
/// column is absent from the header.
pub fn read_customer_csv(path: &Path) -> Result<DataFrame> {
    let headers = read_csv_schema(path)?;
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !headers.iter().any(|header| header == *name))
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let df = normalize_referenced_dtypes(df)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded customer csv"
    );
    Ok(df)
}

/// Give the referenced numeric columns their documented dtypes when
/// inference had nothing to go on.
///
/// A header-only file or an all-null column comes back as String; casting
/// those (all-null values cast cleanly) keeps downstream arithmetic and
/// filters working on zero-row and sparse inputs.
fn normalize_referenced_dtypes(df: DataFrame) -> Result<DataFrame> {
    let mut casts: Vec<Expr> = Vec::new();
    for (name, dtype) in NUMERIC_COLUMNS
        .iter()
        .map(|name| (*name, DataType::Float64))
        .chain(std::iter::once((AGE, DataType::Int64)))
    {
        if !df.column(name)?.dtype().is_primitive_numeric() {
            casts.push(col(name).cast(dtype));
        }
    }
    if casts.is_empty() {
        return Ok(df);
    }
    Ok(df.lazy().with_columns(casts).collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_header_strips_bom_and_whitespace() {
        assert_eq!(normalize_header("\u{feff}Branch "), "Branch");
        assert_eq!(normalize_header("  age"), "age");
    }
}
