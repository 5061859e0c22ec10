//! Canonical column names of the customer dataset.
//!
//! Source columns keep the exact capitalization of the input file headers;
//! grouping is case- and whitespace-sensitive, so these constants are the
//! single source of truth for column lookups across the pipeline.

/// Customer age in years (integer).
pub const AGE: &str = "age";
/// Account balance.
pub const BALANCE: &str = "Balance";
/// Monthly loan installment.
pub const MONTHLY_EMI: &str = "Monthly_EMI";
/// Monthly electricity bill.
pub const ELECTRICITY_BILL: &str = "Electricity_Bill";
/// Monthly water bill. May be null even after cleaning.
pub const WATER_BILL: &str = "Water_Bill";
/// Branch identifier (string).
pub const BRANCH: &str = "Branch";
/// Outstanding loan amount. May be null even after cleaning.
pub const LOAN_AMOUNT: &str = "Loan_Amount";

/// Columns that must be present in the source header.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    AGE,
    BALANCE,
    MONTHLY_EMI,
    ELECTRICITY_BILL,
    WATER_BILL,
    BRANCH,
    LOAN_AMOUNT,
];

/// Columns where a null value makes the row malformed.
pub const CRITICAL_COLUMNS: [&str; 3] = [BALANCE, MONTHLY_EMI, ELECTRICITY_BILL];

/// Financial columns documented as numeric.
pub const NUMERIC_COLUMNS: [&str; 5] = [
    BALANCE,
    MONTHLY_EMI,
    ELECTRICITY_BILL,
    WATER_BILL,
    LOAN_AMOUNT,
];

/// Columns derived during enrichment.
pub mod derived {
    /// "Yes" when age exceeds the threshold, otherwise "No".
    pub const AGE_FLAG: &str = "age_flag";
    /// Calendar date of the pipeline run.
    pub const INGESTION_DATE: &str = "ingestion_date";
    /// Rank of the row with all rows ordered by branch (gaps after ties).
    pub const BRANCH_RANK: &str = "branch_rank";
    /// Dense rank under the same ordering (no gaps).
    pub const BRANCH_DENSE_RANK: &str = "branch_dense_rank";
    /// Monthly EMI + electricity bill + water bill.
    pub const TOTAL_EXPENSE: &str = "total_expense";
    /// Balance minus total expense.
    pub const NET_SURPLUS: &str = "net_surplus";
    /// "Yes" when net surplus is negative, otherwise "No".
    pub const LOSS_FLAG: &str = "loss_flag";

    /// All derived columns in the order they are added.
    pub const ALL: [&str; 7] = [
        AGE_FLAG,
        INGESTION_DATE,
        BRANCH_RANK,
        BRANCH_DENSE_RANK,
        TOTAL_EXPENSE,
        NET_SURPLUS,
        LOSS_FLAG,
    ];
}

/// Columns of the branch summary output.
pub mod summary {
    pub const TOTAL_BALANCE: &str = "Total_balance";
    pub const TOTAL_EMI: &str = "Total_EMI";
    pub const TOTAL_LOAN_BILL: &str = "Total_Loan_bill";
    pub const TOTAL_ELECTRIC_BILL: &str = "Total_electricBill";
    pub const TOTAL_WATER_BILL: &str = "Total_Waterbill";
    pub const AVERAGE_BALANCE: &str = "Average_Balance";
    pub const AVERAGE_EMI: &str = "Average_EMI";
    pub const AVERAGE_LOAN_AMOUNT: &str = "Average_Loan_Amount";
    pub const AVERAGE_ELECTRICITY_BILL: &str = "Average_Electricity_Bill";
    pub const AVERAGE_WATER_BILL: &str = "Average_Water_Bill";
    pub const CUSTOMER_COUNT: &str = "customer_count";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_columns_are_required() {
        for column in CRITICAL_COLUMNS {
            assert!(REQUIRED_COLUMNS.contains(&column));
        }
    }

    #[test]
    fn derived_columns_do_not_shadow_source_columns() {
        for column in derived::ALL {
            assert!(!REQUIRED_COLUMNS.contains(&column));
        }
    }
}
