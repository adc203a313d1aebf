//! Tabular projection of the raw document sequence.
//!
//! Columns are the union of all keys seen across documents (first-seen
//! order); keys missing from a document become null cells. The `createdAt`
//! column is additionally parsed into a typed date-time; values that fail
//! to parse are coerced to null instead of aborting the session.

use chrono::{NaiveDate, NaiveDateTime};
use mongodb::bson::{Bson, Document};

pub const CREATED_AT: &str = "createdAt";
pub const NAME: &str = "name";
pub const GROUP: &str = "grupo";
pub const STATUS: &str = "estado";
pub const EMOTION: &str = "emoji";

const DATETIME_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct AttendanceTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

/// One attendance record, aligned with the table's column order.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Vec<Option<String>>,
    created_at: Option<NaiveDateTime>,
}

impl Row {
    pub fn cell(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).and_then(|c| c.as_deref())
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
}

impl AttendanceTable {
    /// Project raw documents into a table.
    pub fn from_documents(docs: &[Document]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for doc in docs {
            for key in doc.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = docs
            .iter()
            .map(|doc| {
                let created_at = doc.get(CREATED_AT).and_then(parse_created_at);
                let cells = columns
                    .iter()
                    .map(|col| {
                        if col == CREATED_AT {
                            // null-coercing policy: the cell mirrors the
                            // typed value, unparsable dates become null
                            created_at.map(|dt| dt.format(DATETIME_DISPLAY).to_string())
                        } else {
                            doc.get(col).and_then(bson_to_cell)
                        }
                    })
                    .collect();
                Row { cells, created_at }
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Value of a named column for the given row.
    pub fn value<'a>(&self, row: &'a Row, column: &str) -> Option<&'a str> {
        self.column_index(column).and_then(|idx| row.cell(idx))
    }

    /// Min/max calendar dates over the non-null `createdAt` values.
    /// None when no row carries a parsable date.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut bounds: Option<(NaiveDate, NaiveDate)> = None;
        for row in &self.rows {
            if let Some(dt) = row.created_at {
                let d = dt.date();
                bounds = Some(match bounds {
                    None => (d, d),
                    Some((lo, hi)) => (lo.min(d), hi.max(d)),
                });
            }
        }
        bounds
    }

    /// New table with the same columns and the rows matching the predicate.
    pub fn filtered<F>(&self, pred: F) -> AttendanceTable
    where
        F: Fn(&Row) -> bool,
    {
        AttendanceTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| pred(r)).cloned().collect(),
        }
    }
}

/// Stringify a BSON scalar for display and export. Null-like values
/// become null cells.
fn bson_to_cell(value: &Bson) -> Option<String> {
    match value {
        Bson::Null | Bson::Undefined => None,
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(i) => Some(i.to_string()),
        Bson::Int64(i) => Some(i.to_string()),
        Bson::Double(d) => Some(d.to_string()),
        Bson::Boolean(b) => Some(b.to_string()),
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::DateTime(dt) => Some(
            chrono::DateTime::from_timestamp_millis(dt.timestamp_millis())
                .map(|d| d.naive_utc().format(DATETIME_DISPLAY).to_string())
                .unwrap_or_else(|| dt.to_string()),
        ),
        other => Some(other.to_string()),
    }
}

/// Parse a `createdAt` value. Native BSON date-times and the common
/// string encodings are accepted; everything else is null.
fn parse_created_at(value: &Bson) -> Option<NaiveDateTime> {
    match value {
        Bson::DateTime(dt) => {
            chrono::DateTime::from_timestamp_millis(dt.timestamp_millis()).map(|d| d.naive_utc())
        }
        Bson::String(s) => parse_datetime_str(s),
        _ => None,
    }
}

fn parse_datetime_str(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}
