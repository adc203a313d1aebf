mod common;
use asistreport::export::student_report_bytes;
use asistreport::table::AttendanceTable;
use common::{record, sample_table};
use mongodb::bson::doc;

/// Searchable view of the raw PDF bytes. Strings with non-ASCII
/// characters are written as hex strings, so decode every <...> run
/// and append it to the literal text.
fn as_text(bytes: &[u8]) -> String {
    let raw = String::from_utf8_lossy(bytes).into_owned();
    let mut out = raw.clone();

    let mut hex = String::new();
    let mut in_hex = false;
    for ch in raw.chars() {
        match ch {
            '<' => {
                in_hex = true;
                hex.clear();
            }
            '>' if in_hex => {
                in_hex = false;
                if hex.len() % 2 == 0 && !hex.is_empty() {
                    let decoded: Vec<u8> = (0..hex.len())
                        .step_by(2)
                        .filter_map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
                        .collect();
                    out.push('\n');
                    out.push_str(&String::from_utf8_lossy(&decoded));
                }
            }
            c if in_hex => {
                if c.is_ascii_hexdigit() {
                    hex.push(c);
                } else {
                    in_hex = false;
                }
            }
            _ => {}
        }
    }

    out
}

#[test]
fn test_report_contains_title_and_lines() {
    let table = sample_table();
    let bytes = student_report_bytes(&table, "Ana");

    assert!(bytes.starts_with(b"%PDF"));
    let text = as_text(&bytes);
    assert!(text.contains("Reporte de Asistencia - Ana"));
    assert!(text.contains("2024-03-01: Estado = presente"));
    assert!(text.contains("2024-03-02: Estado = ausente"));
}

#[test]
fn test_report_only_includes_selected_student() {
    let table = sample_table();
    let bytes = student_report_bytes(&table, "Luis");

    let text = as_text(&bytes);
    assert!(text.contains("Reporte de Asistencia - Luis"));
    assert!(!text.contains("ausente"));
}

#[test]
fn test_missing_values_get_placeholders() {
    let docs = vec![doc! { "name": "Ana", "createdAt": "bogus" }];
    let table = AttendanceTable::from_documents(&docs);

    let text = as_text(&student_report_bytes(&table, "Ana"));
    assert!(text.contains("Sin fecha: Estado = N/A"));
    assert!(text.contains("N/A"));
}

#[test]
fn test_short_report_is_single_page() {
    let table = sample_table();
    let bytes = student_report_bytes(&table, "Ana");
    assert!(as_text(&bytes).contains("/Count 1"));
}

#[test]
fn test_long_report_paginates() {
    // 32 lines fit between y=720 and the bottom threshold; 40 spill over
    let docs: Vec<_> = (0..40)
        .map(|i| {
            record(
                "Ana",
                "A",
                "presente",
                "😀",
                &format!("2024-03-{:02}", (i % 28) + 1),
            )
        })
        .collect();
    let table = AttendanceTable::from_documents(&docs);

    let bytes = student_report_bytes(&table, "Ana");
    assert!(as_text(&bytes).contains("/Count 2"));
}
