//! Filter engine: group selector + inclusive calendar-date range.

use crate::errors::{AppError, AppResult};
use crate::table::{self, AttendanceTable};
use crate::utils::date::parse_range;
use chrono::NaiveDate;

/// Group dropdown state: the all-groups sentinel or an exact label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSelector {
    All,
    Group(String),
}

impl GroupSelector {
    pub fn from_arg(arg: &Option<String>) -> Self {
        match arg {
            Some(g) => GroupSelector::Group(g.clone()),
            None => GroupSelector::All,
        }
    }

    /// Token used in export filenames and report headers.
    pub fn label(&self) -> &str {
        match self {
            GroupSelector::All => "todos",
            GroupSelector::Group(g) => g,
        }
    }
}

/// Inclusive date range, both ends calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start && d <= self.end
    }
}

/// Filter state for one invocation, resolved from CLI flags.
/// `range: None` means "use the observed min/max bounds".
#[derive(Debug, Clone)]
pub struct FilterState {
    pub selector: GroupSelector,
    pub range: Option<DateRange>,
}

impl FilterState {
    pub fn from_args(grupo: &Option<String>, range: &Option<String>) -> AppResult<Self> {
        let range = match range {
            None => None,
            Some(r) => {
                let (start, end) = parse_range(r)?;
                if start > end {
                    return Err(AppError::InvalidRange(format!(
                        "start {start} is after end {end}"
                    )));
                }
                Some(DateRange { start, end })
            }
        };

        Ok(Self {
            selector: GroupSelector::from_arg(grupo),
            range,
        })
    }
}

/// Range actually applied: the requested one, or the table's observed
/// bounds. None when the table has no dated rows at all.
pub fn effective_range(table: &AttendanceTable, state: &FilterState) -> Option<DateRange> {
    state.range.or_else(|| {
        table
            .date_bounds()
            .map(|(start, end)| DateRange { start, end })
    })
}

/// Apply group + date filtering. Rows with a null `createdAt` never
/// appear in a date-bounded result. A missing `grupo` column bypasses
/// group matching instead of failing.
pub fn apply(table: &AttendanceTable, state: &FilterState) -> AttendanceTable {
    let Some(range) = effective_range(table, state) else {
        return table.filtered(|_| false);
    };

    let group_col = table.column_index(table::GROUP);

    table.filtered(|row| {
        let group_ok = match (&state.selector, group_col) {
            (GroupSelector::All, _) => true,
            (GroupSelector::Group(_), None) => true,
            (GroupSelector::Group(g), Some(idx)) => row.cell(idx) == Some(g.as_str()),
        };

        let date_ok = row
            .created_at()
            .map(|dt| range.contains(dt.date()))
            .unwrap_or(false);

        group_ok && date_ok
    })
}
