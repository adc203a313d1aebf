// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use json_csv::{export_csv, export_json};
pub use pdf::PdfManager;
pub use pdf_export::{export_student_pdf, student_report_bytes};
pub use xlsx::export_xlsx;

use crate::core::filter::GroupSelector;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all export writers.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Default export filename, with the current group selector embedded.
pub fn default_table_filename(selector: &GroupSelector, format: &ExportFormat) -> String {
    format!("asistencia_{}.{}", selector.label(), format.as_str())
}

/// Default per-student PDF filename.
pub fn default_student_filename(student: &str) -> String {
    format!("reporte_{student}.pdf")
}
