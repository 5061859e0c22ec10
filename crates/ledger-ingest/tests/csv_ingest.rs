//! Integration tests for customer CSV loading.

use std::io::Write;

use tempfile::NamedTempFile;

use ledger_ingest::{IngestError, read_csv_schema, read_customer_csv};

const FULL_HEADER: &str = "Customer_ID,Branch,age,Balance,Monthly_EMI,Electricity_Bill,Water_Bill,Loan_Amount";

fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn reads_header_names() {
    let file = temp_csv("Branch,age,Balance\nB1,40,1000\n");
    let headers = read_csv_schema(file.path()).unwrap();
    assert_eq!(headers, vec!["Branch", "age", "Balance"]);
}

#[test]
fn infers_numeric_and_string_dtypes() {
    let file = temp_csv(&format!(
        "{FULL_HEADER}\nC1,B1,40,1000.5,200,50,30,500\nC2,B2,28,900,150,40,,\n"
    ));
    let df = read_customer_csv(file.path()).unwrap();
    assert_eq!(df.height(), 2);
    assert!(df.column("Branch").unwrap().dtype().is_string());
    assert!(df.column("Balance").unwrap().dtype().is_primitive_numeric());
    // Empty cells become nulls
    assert_eq!(df.column("Water_Bill").unwrap().null_count(), 1);
    assert_eq!(df.column("Loan_Amount").unwrap().null_count(), 1);
}

#[test]
fn header_only_file_yields_zero_rows() {
    let file = temp_csv(&format!("{FULL_HEADER}\n"));
    let df = read_customer_csv(file.path()).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 8);
    // Referenced numeric columns keep their documented dtypes even with
    // nothing to infer from
    assert!(df.column("Balance").unwrap().dtype().is_primitive_numeric());
    assert!(df.column("age").unwrap().dtype().is_primitive_numeric());
}

#[test]
fn all_null_numeric_columns_are_cast_to_numeric() {
    let file = temp_csv(&format!("{FULL_HEADER}\nC1,B1,40,1000,200,50,,\n"));
    let df = read_customer_csv(file.path()).unwrap();
    assert!(
        df.column("Water_Bill")
            .unwrap()
            .dtype()
            .is_primitive_numeric()
    );
    assert_eq!(df.column("Water_Bill").unwrap().null_count(), 1);
}

#[test]
fn missing_required_columns_fail_fast() {
    let file = temp_csv("Branch,age\nB1,40\n");
    let err = read_customer_csv(file.path()).unwrap_err();
    match err {
        IngestError::MissingColumns { columns, .. } => {
            assert!(columns.contains(&"Balance".to_string()));
            assert!(columns.contains(&"Monthly_EMI".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_an_error() {
    let err = read_customer_csv(std::path::Path::new("/nonexistent/customers.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
}
