#![allow(dead_code)]
use asistreport::core::filter::FilterState;
use asistreport::table::AttendanceTable;
use mongodb::bson::{doc, Document};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn record(name: &str, grupo: &str, estado: &str, emoji: &str, created: &str) -> Document {
    doc! {
        "name": name,
        "grupo": grupo,
        "estado": estado,
        "emoji": emoji,
        "createdAt": created,
    }
}

/// Three-record dataset: two check-ins for Ana (group A), one for Luis
/// (group B), all in early March 2024.
pub fn sample_docs() -> Vec<Document> {
    vec![
        record("Ana", "A", "presente", "😀", "2024-03-01"),
        record("Ana", "A", "ausente", "😢", "2024-03-02"),
        record("Luis", "B", "presente", "😀", "2024-03-01"),
    ]
}

pub fn sample_table() -> AttendanceTable {
    AttendanceTable::from_documents(&sample_docs())
}

pub fn state(grupo: Option<&str>, range: Option<&str>) -> FilterState {
    FilterState::from_args(&grupo.map(String::from), &range.map(String::from))
        .expect("valid filter state")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_asistreport_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}
