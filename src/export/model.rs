// src/export/model.rs

use crate::table::{AttendanceTable, Row};

/// Header row shared by the CSV / XLSX writers: the table's columns,
/// in their current order.
pub(crate) fn table_headers(table: &AttendanceTable) -> Vec<&str> {
    table.columns().iter().map(|c| c.as_str()).collect()
}

/// Flatten a row into strings, null cells as empty strings.
pub(crate) fn row_to_strings(table: &AttendanceTable, row: &Row) -> Vec<String> {
    (0..table.columns().len())
        .map(|idx| row.cell(idx).unwrap_or("").to_string())
        .collect()
}

pub(crate) fn table_to_rows(table: &AttendanceTable) -> Vec<Vec<String>> {
    table
        .rows()
        .iter()
        .map(|row| row_to_strings(table, row))
        .collect()
}
