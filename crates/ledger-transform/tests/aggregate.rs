//! Tests for the branch aggregation stage.

use polars::prelude::{Column, DataFrame};

use ledger_model::columns::summary;
use ledger_transform::summarize_branches;

fn enriched_customers() -> DataFrame {
    DataFrame::new(vec![
        Column::new("Branch".into(), vec!["B1", "B1", "B2"]),
        Column::new("Balance".into(), vec![1000.0, 2000.0, 500.0]),
        Column::new("Monthly_EMI".into(), vec![200.0, 300.0, 450.0]),
        Column::new("Electricity_Bill".into(), vec![50.0, 60.0, 70.0]),
        Column::new(
            "Water_Bill".into(),
            vec![Some(30.0), None, Some(40.0)],
        ),
        Column::new(
            "Loan_Amount".into(),
            vec![None::<f64>, None, Some(900.0)],
        ),
    ])
    .unwrap()
}

#[test]
fn sums_averages_and_counts_per_branch() {
    let grouped = summarize_branches(enriched_customers()).unwrap();

    // Sorted by branch: B1, B2
    assert_eq!(grouped.height(), 2);
    let branch = grouped.column("Branch").unwrap().str().unwrap();
    assert_eq!(branch.get(0), Some("B1"));
    assert_eq!(branch.get(1), Some("B2"));

    let total_balance = grouped.column(summary::TOTAL_BALANCE).unwrap().f64().unwrap();
    assert_eq!(total_balance.get(0), Some(3000.0));
    assert_eq!(total_balance.get(1), Some(500.0));

    let average_emi = grouped.column(summary::AVERAGE_EMI).unwrap().f64().unwrap();
    assert_eq!(average_emi.get(0), Some(250.0));
    assert_eq!(average_emi.get(1), Some(450.0));

    let count = grouped.column(summary::CUSTOMER_COUNT).unwrap().i64().unwrap();
    assert_eq!(count.get(0), Some(2));
    assert_eq!(count.get(1), Some(1));
}

#[test]
fn null_values_are_skipped_not_zeroed() {
    let grouped = summarize_branches(enriched_customers()).unwrap();

    // B1's water bills are 30.0 and null: sum skips the null
    let total_water = grouped.column(summary::TOTAL_WATER_BILL).unwrap().f64().unwrap();
    assert_eq!(total_water.get(0), Some(30.0));
    let average_water = grouped
        .column(summary::AVERAGE_WATER_BILL)
        .unwrap()
        .f64()
        .unwrap();
    assert_eq!(average_water.get(0), Some(30.0));
}

#[test]
fn all_null_column_in_a_branch_yields_null_not_zero() {
    let grouped = summarize_branches(enriched_customers()).unwrap();

    // Every B1 loan amount is null
    let total_loan = grouped.column(summary::TOTAL_LOAN_BILL).unwrap().f64().unwrap();
    assert_eq!(total_loan.get(0), None);
    assert_eq!(total_loan.get(1), Some(900.0));

    let average_loan = grouped
        .column(summary::AVERAGE_LOAN_AMOUNT)
        .unwrap()
        .f64()
        .unwrap();
    assert_eq!(average_loan.get(0), None);
    assert_eq!(average_loan.get(1), Some(900.0));
}

#[test]
fn customer_counts_total_to_the_input_row_count() {
    let input = enriched_customers();
    let rows = input.height() as i64;
    let grouped = summarize_branches(input).unwrap();

    let count = grouped.column(summary::CUSTOMER_COUNT).unwrap().i64().unwrap();
    let total: i64 = count.into_iter().flatten().sum();
    assert_eq!(total, rows);
}

#[test]
fn empty_input_yields_empty_summary() {
    let empty = DataFrame::new(vec![
        Column::new("Branch".into(), Vec::<String>::new()),
        Column::new("Balance".into(), Vec::<f64>::new()),
        Column::new("Monthly_EMI".into(), Vec::<f64>::new()),
        Column::new("Electricity_Bill".into(), Vec::<f64>::new()),
        Column::new("Water_Bill".into(), Vec::<f64>::new()),
        Column::new("Loan_Amount".into(), Vec::<f64>::new()),
    ])
    .unwrap();

    let grouped = summarize_branches(empty).unwrap();
    assert_eq!(grouped.height(), 0);
}
