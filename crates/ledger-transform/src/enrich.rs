//! Derived-column enrichment for cleaned customer records.
//!
//! Operations run in a fixed order because later columns depend on earlier
//! ones: the age flag is computed before the age filter removes anyone, the
//! branch ranks require the frame sorted by branch, and the loss flag reads
//! the net surplus.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use polars::prelude::*;
use tracing::debug;

use ledger_ingest::any_to_string;
use ledger_model::PipelineOptions;
use ledger_model::columns::{AGE, BALANCE, BRANCH, ELECTRICITY_BILL, MONTHLY_EMI, WATER_BILL, derived};

/// Add `age_flag` ("Yes"/"No") to every row.
///
/// Runs before the age filter, so rows that are about to be dropped still
/// get a flag. A null age lands in the "No" branch.
pub fn add_age_flag(df: DataFrame, threshold: i64) -> Result<DataFrame> {
    df.lazy()
        .with_column(
            when(col(AGE).gt(lit(threshold)))
                .then(lit("Yes"))
                .otherwise(lit("No"))
                .alias(derived::AGE_FLAG),
        )
        .collect()
        .context("add age flag")
}

/// Keep only rows with `age` above the threshold.
pub fn filter_adult_customers(df: DataFrame, threshold: i64) -> Result<DataFrame> {
    let before = df.height();
    let filtered = df
        .lazy()
        .filter(col(AGE).gt(lit(threshold)))
        .collect()
        .context("filter customers by age")?;
    debug!(before, after = filtered.height(), threshold, "age filter");
    Ok(filtered)
}

/// Add a constant `ingestion_date` Date column holding the run date.
pub fn add_ingestion_date(mut df: DataFrame, date: NaiveDate) -> Result<DataFrame> {
    // NaiveDate::default() is the Unix epoch, which is also Polars' Date zero.
    let days = i32::try_from(date.signed_duration_since(NaiveDate::default()).num_days())
        .context("ingestion date out of range")?;
    let series = Int32Chunked::full(derived::INGESTION_DATE.into(), days, df.height())
        .into_series()
        .cast(&DataType::Date)
        .context("cast ingestion date")?;
    df.with_column(series).context("add ingestion date")?;
    Ok(df)
}

/// Sort all rows by branch ascending and assign `branch_rank` and
/// `branch_dense_rank`.
///
/// One global ordering domain over the whole table, not a per-branch
/// partition: the rank is a row's position among all rows sorted by branch.
/// Ties share a rank; `branch_rank` leaves gaps after ties,
/// `branch_dense_rank` does not. Null branches sort first and share a rank.
pub fn add_branch_ranks(df: DataFrame) -> Result<DataFrame> {
    let mut sorted = df
        .sort([BRANCH], SortMultipleOptions::default().with_maintain_order(true))
        .context("sort by branch")?;
    let height = sorted.height();
    let mut ranks: Vec<i64> = Vec::with_capacity(height);
    let mut dense_ranks: Vec<i64> = Vec::with_capacity(height);
    {
        let branch = sorted.column(BRANCH).context("branch column")?;
        let mut previous: Option<String> = None;
        let mut rank = 0i64;
        let mut dense = 0i64;
        for idx in 0..height {
            let value = any_to_string(&branch.get(idx)?);
            if previous.as_deref() != Some(value.as_str()) {
                rank = idx as i64 + 1;
                dense += 1;
                previous = Some(value);
            }
            ranks.push(rank);
            dense_ranks.push(dense);
        }
    }
    sorted
        .with_column(Column::new(derived::BRANCH_RANK.into(), ranks))
        .context("add branch rank")?;
    sorted
        .with_column(Column::new(derived::BRANCH_DENSE_RANK.into(), dense_ranks))
        .context("add branch dense rank")?;
    Ok(sorted)
}

/// Add `total_expense` = EMI + electricity bill + water bill.
///
/// The cleaner only guarantees EMI and electricity; a null water bill
/// propagates null into the total.
pub fn add_total_expense(df: DataFrame) -> Result<DataFrame> {
    df.lazy()
        .with_column(
            (col(MONTHLY_EMI) + col(ELECTRICITY_BILL) + col(WATER_BILL))
                .alias(derived::TOTAL_EXPENSE),
        )
        .collect()
        .context("add total expense")
}

/// Add `net_surplus` = balance - total expense.
pub fn add_net_surplus(df: DataFrame) -> Result<DataFrame> {
    df.lazy()
        .with_column((col(BALANCE) - col(derived::TOTAL_EXPENSE)).alias(derived::NET_SURPLUS))
        .collect()
        .context("add net surplus")
}

/// Add `loss_flag` = "Yes" when the net surplus is negative, else "No".
///
/// A null net surplus compares as false and lands in the "No" branch; no
/// explicit null check is applied.
pub fn add_loss_flag(df: DataFrame) -> Result<DataFrame> {
    df.lazy()
        .with_column(
            when(col(derived::NET_SURPLUS).lt(lit(0)))
                .then(lit("Yes"))
                .otherwise(lit("No"))
                .alias(derived::LOSS_FLAG),
        )
        .collect()
        .context("add loss flag")
}

/// Run the full enrichment sequence over a cleaned frame.
pub fn enrich_customers(df: DataFrame, options: &PipelineOptions) -> Result<DataFrame> {
    let df = add_age_flag(df, options.age_threshold)?;
    let df = filter_adult_customers(df, options.age_threshold)?;
    let df = add_ingestion_date(df, options.ingestion_date)?;
    let df = add_branch_ranks(df)?;
    let df = add_total_expense(df)?;
    let df = add_net_surplus(df)?;
    add_loss_flag(df)
}
