//! Row cleaning: removal of malformed records.

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, IntoLazy, col};
use tracing::debug;

use ledger_model::columns::CRITICAL_COLUMNS;

/// Remove every row where any critical financial column is null.
///
/// The critical columns are `Balance`, `Monthly_EMI` and `Electricity_Bill`;
/// `Water_Bill` and `Loan_Amount` may stay null. Row order is not part of
/// the contract here, downstream ordering is applied by the enricher.
pub fn drop_missing_critical(df: DataFrame) -> Result<DataFrame> {
    let before = df.height();
    let mask = CRITICAL_COLUMNS[1..].iter().fold(
        col(CRITICAL_COLUMNS[0]).is_not_null(),
        |acc, name| acc.and(col(*name).is_not_null()),
    );
    let cleaned = df
        .lazy()
        .filter(mask)
        .collect()
        .context("drop rows with null critical columns")?;
    debug!(
        before,
        after = cleaned.height(),
        dropped = before - cleaned.height(),
        "cleaned critical columns"
    );
    Ok(cleaned)
}
