//! Aggregations over the filtered table. All pure and recomputed per
//! invocation; nothing here is persisted.

use crate::table::{self, AttendanceTable};
use std::collections::{BTreeMap, BTreeSet};

/// One row of the emotion frequency table.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionStat {
    pub emotion: String,
    pub count: usize,
    /// Share of the non-null emotion values, rounded to 2 decimals.
    pub percent: f64,
}

/// Headline numbers for the filtered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_records: usize,
    pub distinct_students: usize,
}

/// Count per distinct non-null emotion, with percentages over the
/// non-null total. Ordered by descending count, then lexically.
pub fn emotion_frequency(table: &AttendanceTable) -> Vec<EmotionStat> {
    let counts = column_counts(table, table::EMOTION);
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut stats: Vec<EmotionStat> = counts
        .into_iter()
        .map(|(emotion, count)| EmotionStat {
            emotion,
            count,
            percent: round2(count as f64 * 100.0 / total as f64),
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.emotion.cmp(&b.emotion)));
    stats
}

/// Most frequent emotion. Ties resolve lexically via the frequency
/// ordering, so the result is deterministic.
pub fn modal_emotion(stats: &[EmotionStat]) -> Option<&str> {
    stats.first().map(|s| s.emotion.as_str())
}

pub fn summarize(table: &AttendanceTable) -> Summary {
    Summary {
        total_records: table.len(),
        distinct_students: distinct_values(table, table::NAME).len(),
    }
}

/// Sorted distinct non-null values of a column.
pub fn distinct_values(table: &AttendanceTable, column: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    for row in table.rows() {
        if let Some(v) = table.value(row, column) {
            seen.insert(v.to_string());
        }
    }
    seen.into_iter().collect()
}

pub fn distinct_students(table: &AttendanceTable) -> Vec<String> {
    distinct_values(table, table::NAME)
}

pub fn distinct_groups(table: &AttendanceTable) -> Vec<String> {
    distinct_values(table, table::GROUP)
}

/// Count per distinct attendance status, descending. None when the
/// table has no `estado` column at all.
pub fn status_counts(table: &AttendanceTable) -> Option<Vec<(String, usize)>> {
    if !table.has_column(table::STATUS) {
        return None;
    }

    let counts = column_counts(table, table::STATUS);
    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Some(out)
}

fn column_counts(table: &AttendanceTable, column: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in table.rows() {
        if let Some(v) = table.value(row, column) {
            *counts.entry(v.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
