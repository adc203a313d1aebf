// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{table_headers, table_to_rows};
use crate::export::notify_export_success;
use crate::table::AttendanceTable;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed, one object per row with explicit nulls.
pub fn export_json(table: &AttendanceTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let rows: Vec<serde_json::Value> = table
        .rows()
        .iter()
        .map(|row| {
            let mut obj = serde_json::Map::new();
            for (idx, col) in table.columns().iter().enumerate() {
                let value = match row.cell(idx) {
                    Some(v) => serde_json::Value::String(v.to_string()),
                    None => serde_json::Value::Null,
                };
                obj.insert(col.clone(), value);
            }
            serde_json::Value::Object(obj)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, header row included.
pub fn export_csv(table: &AttendanceTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record(table_headers(table))
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for row in table_to_rows(table) {
        wtr.write_record(&row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
