//! Human-readable run summary output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use ledger_model::columns::{CRITICAL_COLUMNS, REQUIRED_COLUMNS, derived};

use crate::types::RunReport;

pub fn print_run_summary(report: &RunReport) {
    println!("ETL job started at {}", report.started_at);
    let mut table = Table::new();
    table.set_header(vec!["Stage", "Rows", "Duration (ms)"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for stage in &report.stages {
        table.add_row(vec![
            Cell::new(&stage.stage),
            Cell::new(stage.rows),
            Cell::new(stage.duration_ms),
        ]);
    }
    println!("{table}");
    println!(
        "Cleaned rows: {} of {} input rows across {} branches",
        report.cleaned_rows, report.input_rows, report.branch_count
    );
    println!("Cleaned data: {}", report.cleaned_path.display());
    println!("Job completed successfully at {}", report.finished_at);
    println!("Summary saved to: {}", report.summary_path.display());
}

/// Print the columns the pipeline reads and produces.
pub fn print_columns() {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Kind", "Notes"]);
    apply_table_style(&mut table);
    for name in REQUIRED_COLUMNS {
        let notes = if CRITICAL_COLUMNS.contains(&name) {
            "critical: rows with a null value are dropped"
        } else {
            "may be null after cleaning"
        };
        table.add_row(vec![Cell::new(name), Cell::new("source"), Cell::new(notes)]);
    }
    for name in derived::ALL {
        table.add_row(vec![
            Cell::new(name),
            Cell::new("derived"),
            Cell::new(derived_notes(name)),
        ]);
    }
    println!("{table}");
}

fn derived_notes(name: &str) -> &'static str {
    match name {
        derived::AGE_FLAG => "Yes/No, age above threshold (assigned before the age filter)",
        derived::INGESTION_DATE => "calendar date of the run",
        derived::BRANCH_RANK => "rank over all rows ordered by branch, gaps after ties",
        derived::BRANCH_DENSE_RANK => "dense rank under the same ordering, no gaps",
        derived::TOTAL_EXPENSE => "EMI + electricity + water; null water propagates",
        derived::NET_SURPLUS => "balance - total expense",
        derived::LOSS_FLAG => "Yes when net surplus is negative, else No",
        _ => "",
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
