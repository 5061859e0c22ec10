//! Tests for the critical-column cleaner.

use polars::prelude::{Column, DataFrame};

use ledger_transform::drop_missing_critical;

fn raw_customers() -> DataFrame {
    DataFrame::new(vec![
        Column::new("Branch".into(), vec!["B1", "B1", "B2", "B3"]),
        Column::new(
            "Balance".into(),
            vec![Some(1000.0), None, Some(800.0), Some(600.0)],
        ),
        Column::new(
            "Monthly_EMI".into(),
            vec![Some(200.0), Some(150.0), None, Some(90.0)],
        ),
        Column::new(
            "Electricity_Bill".into(),
            vec![Some(50.0), Some(40.0), Some(30.0), None],
        ),
        Column::new(
            "Water_Bill".into(),
            vec![None, Some(20.0), Some(15.0), Some(10.0)],
        ),
    ])
    .unwrap()
}

#[test]
fn drops_rows_with_any_null_critical_column() {
    let cleaned = drop_missing_critical(raw_customers()).unwrap();

    // Only the first row has all three critical columns populated; its null
    // water bill does not disqualify it.
    assert_eq!(cleaned.height(), 1);
    let balance = cleaned.column("Balance").unwrap().f64().unwrap();
    assert_eq!(balance.get(0), Some(1000.0));
}

#[test]
fn all_rows_removed_yields_empty_frame() {
    let df = DataFrame::new(vec![
        Column::new("Branch".into(), vec!["B1", "B2"]),
        Column::new("Balance".into(), vec![None::<f64>, None]),
        Column::new("Monthly_EMI".into(), vec![Some(100.0), Some(120.0)]),
        Column::new("Electricity_Bill".into(), vec![Some(10.0), Some(12.0)]),
    ])
    .unwrap();

    let cleaned = drop_missing_critical(df).unwrap();
    assert_eq!(cleaned.height(), 0);
    // Schema survives for downstream stages
    assert!(cleaned.column("Branch").is_ok());
}
