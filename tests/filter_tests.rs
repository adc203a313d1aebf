mod common;
use asistreport::core::filter::{self, GroupSelector};
use asistreport::table::AttendanceTable;
use common::{record, sample_docs, sample_table, state};
use mongodb::bson::doc;

#[test]
fn test_group_and_range_scenario() {
    // group A over [2024-03-01, 2024-03-02] keeps exactly Ana's two records
    let table = sample_table();
    let filtered = filter::apply(&table, &state(Some("A"), Some("2024-03-01:2024-03-02")));

    assert_eq!(filtered.len(), 2);
    for row in filtered.rows() {
        assert_eq!(filtered.value(row, "name"), Some("Ana"));
    }
}

#[test]
fn test_filtering_is_idempotent() {
    let table = sample_table();
    let st = state(Some("A"), Some("2024-03-01:2024-03-02"));

    let once = filter::apply(&table, &st);
    let twice = filter::apply(&once, &st);

    assert_eq!(once.len(), twice.len());
    let cells = |t: &AttendanceTable| -> Vec<Option<String>> {
        t.rows()
            .iter()
            .map(|r| t.value(r, "emoji").map(String::from))
            .collect()
    };
    assert_eq!(cells(&once), cells(&twice));
}

#[test]
fn test_single_day_range_includes_only_that_day() {
    let table = sample_table();
    let filtered = filter::apply(&table, &state(None, Some("2024-03-01")));

    assert_eq!(filtered.len(), 2);
    for row in filtered.rows() {
        assert_eq!(filtered.value(row, "createdAt"), Some("2024-03-01 00:00:00"));
    }
}

#[test]
fn test_all_groups_sentinel_bypasses_group_matching() {
    let table = sample_table();
    let st = state(None, Some("2024-03-01:2024-03-02"));
    assert_eq!(st.selector, GroupSelector::All);

    let filtered = filter::apply(&table, &st);
    assert_eq!(filtered.len(), table.len());
}

#[test]
fn test_default_range_is_observed_min_max() {
    let table = sample_table();
    let st = state(None, None);

    let range = filter::effective_range(&table, &st).expect("bounds");
    assert_eq!(range.start.to_string(), "2024-03-01");
    assert_eq!(range.end.to_string(), "2024-03-02");

    let filtered = filter::apply(&table, &st);
    assert_eq!(filtered.len(), 3);
}

#[test]
fn test_null_dates_excluded_from_date_bounded_results() {
    let mut docs = sample_docs();
    docs.push(record("Mara", "A", "presente", "😀", "not a date"));
    let table = AttendanceTable::from_documents(&docs);
    assert_eq!(table.len(), 4);

    let filtered = filter::apply(&table, &state(None, Some("2024-03-01:2024-03-02")));
    assert_eq!(filtered.len(), 3);
    assert!(filtered
        .rows()
        .iter()
        .all(|r| filtered.value(r, "name") != Some("Mara")));
}

#[test]
fn test_out_of_range_filter_yields_empty_table() {
    let table = sample_table();
    let filtered = filter::apply(&table, &state(None, Some("2025-01-01:2025-12-31")));
    assert!(filtered.is_empty());
}

#[test]
fn test_empty_filter_short_circuits_before_aggregation() {
    use asistreport::cli::commands::filtered_or_notice;

    let table = sample_table();

    // out-of-range filters stop at the notice, nothing downstream runs
    let st = state(None, Some("2025-01-01:2025-12-31"));
    assert!(filtered_or_notice(&table, &st).is_none());

    let st = state(Some("C"), None);
    assert!(filtered_or_notice(&table, &st).is_none());

    // non-empty results pass through to aggregation/export
    let st = state(Some("A"), Some("2024-03-01:2024-03-02"));
    let filtered = filtered_or_notice(&table, &st).expect("rows for group A");
    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_table_without_dates_filters_to_empty() {
    let docs = vec![doc! { "name": "Ana", "emoji": "😀" }];
    let table = AttendanceTable::from_documents(&docs);

    let filtered = filter::apply(&table, &state(None, None));
    assert!(filtered.is_empty());
}

#[test]
fn test_missing_grupo_column_bypasses_group_filter() {
    let docs = vec![
        doc! { "name": "Ana", "emoji": "😀", "createdAt": "2024-03-01" },
        doc! { "name": "Luis", "emoji": "😢", "createdAt": "2024-03-01" },
    ];
    let table = AttendanceTable::from_documents(&docs);

    let filtered = filter::apply(&table, &state(Some("A"), None));
    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_group_without_matches_is_empty() {
    let table = sample_table();
    let filtered = filter::apply(&table, &state(Some("C"), None));
    assert!(filtered.is_empty());
}

#[test]
fn test_invalid_range_rejected() {
    use asistreport::core::filter::FilterState;
    assert!(FilterState::from_args(&None, &Some("03/01/2024".to_string())).is_err());
    assert!(FilterState::from_args(&None, &Some("2024-03-02:2024-03-01".to_string())).is_err());
}
