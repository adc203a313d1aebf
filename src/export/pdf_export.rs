// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::table::{self, AttendanceTable};
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Render the per-student report to a PDF document in memory.
///
/// One line per record: date (or "Sin fecha"), status and emotion.
pub fn student_report_bytes(table: &AttendanceTable, student: &str) -> Vec<u8> {
    let rows = student_rows(table, student);

    let title = format!("Reporte de Asistencia - {student}");
    let lines: Vec<String> = rows
        .rows()
        .iter()
        .map(|row| {
            let fecha = row
                .created_at()
                .map(|dt| dt.date().format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "Sin fecha".to_string());
            let estado = rows.value(row, table::STATUS).unwrap_or("N/A");
            let emocion = rows.value(row, table::EMOTION).unwrap_or("N/A");
            format!("{fecha}: Estado = {estado}, Emoción = {emocion}")
        })
        .collect();

    let mut pdf = PdfManager::new();
    pdf.write_report(&title, &lines);
    pdf.finish()
}

/// Export the per-student report to a file.
pub fn export_student_pdf(table: &AttendanceTable, student: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let bytes = student_report_bytes(table, student);
    std::fs::write(path, bytes)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}

/// Subset of the filtered table belonging to one student.
fn student_rows(table: &AttendanceTable, student: &str) -> AttendanceTable {
    let name_col = table.column_index(table::NAME);
    table.filtered(|row| name_col.and_then(|idx| row.cell(idx)) == Some(student))
}
