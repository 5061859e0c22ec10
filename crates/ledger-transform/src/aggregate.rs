//! Branch-level aggregation of the cleaned dataset.

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::debug;

use ledger_model::columns as cols;
use ledger_model::columns::summary;

/// Sum that skips nulls but yields null, not zero, when every value in the
/// group is null.
fn sum_skip_null(name: &str, alias: &str) -> Expr {
    when(col(name).count().gt(lit(0)))
        .then(col(name).sum())
        .otherwise(lit(NULL))
        .alias(alias)
}

/// Group the cleaned table by branch and compute per-branch totals,
/// averages and customer counts.
///
/// Grouping is case- and whitespace-sensitive on the branch value. Averages
/// skip nulls; sums are guarded so an all-null column produces null. The
/// result is sorted by branch so reruns produce identical files.
pub fn summarize_branches(df: DataFrame) -> Result<DataFrame> {
    let grouped = df
        .lazy()
        .group_by([col(cols::BRANCH)])
        .agg([
            sum_skip_null(cols::BALANCE, summary::TOTAL_BALANCE),
            sum_skip_null(cols::MONTHLY_EMI, summary::TOTAL_EMI),
            sum_skip_null(cols::LOAN_AMOUNT, summary::TOTAL_LOAN_BILL),
            sum_skip_null(cols::ELECTRICITY_BILL, summary::TOTAL_ELECTRIC_BILL),
            sum_skip_null(cols::WATER_BILL, summary::TOTAL_WATER_BILL),
            col(cols::BALANCE).mean().alias(summary::AVERAGE_BALANCE),
            col(cols::MONTHLY_EMI).mean().alias(summary::AVERAGE_EMI),
            col(cols::LOAN_AMOUNT)
                .mean()
                .alias(summary::AVERAGE_LOAN_AMOUNT),
            col(cols::ELECTRICITY_BILL)
                .mean()
                .alias(summary::AVERAGE_ELECTRICITY_BILL),
            col(cols::WATER_BILL).mean().alias(summary::AVERAGE_WATER_BILL),
            len().cast(DataType::Int64).alias(summary::CUSTOMER_COUNT),
        ])
        .sort([cols::BRANCH], SortMultipleOptions::default())
        .collect()
        .context("summarize branches")?;
    debug!(branches = grouped.height(), "branch summary computed");
    Ok(grouped)
}
