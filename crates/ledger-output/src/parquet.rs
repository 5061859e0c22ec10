//! Parquet persistence in full-overwrite mode.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, ParquetReader, ParquetWriter, SerReader};
use tracing::debug;

/// Write a frame to a Parquet file, replacing any prior contents.
///
/// Parent directories are created as needed. Returns the number of bytes
/// written.
pub fn write_parquet(df: &mut DataFrame, path: &Path) -> Result<u64> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("create {}", path.display()))?;
    let bytes = ParquetWriter::new(file)
        .finish(df)
        .with_context(|| format!("write parquet {}", path.display()))?;
    debug!(path = %path.display(), rows = df.height(), bytes, "wrote parquet");
    Ok(bytes)
}

/// Read a Parquet file back into a frame.
pub fn read_parquet(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    ParquetReader::new(file)
        .finish()
        .with_context(|| format!("read parquet {}", path.display()))
}
