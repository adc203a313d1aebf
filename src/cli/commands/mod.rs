pub mod chart;
pub mod config;
pub mod export;
pub mod groups;
pub mod init;
pub mod pdf;
pub mod report;
pub mod students;

use crate::core::filter::{self, FilterState};
use crate::table::AttendanceTable;
use crate::ui::messages::warning;

/// Apply the filter state and run the empty-result guard shared by all
/// aggregating commands. Returns None after printing the empty-state
/// notice; callers short-circuit with Ok(()).
pub fn filtered_or_notice(
    table: &AttendanceTable,
    state: &FilterState,
) -> Option<AttendanceTable> {
    let filtered = filter::apply(table, state);

    if filtered.is_empty() {
        warning("No hay datos disponibles para los filtros seleccionados.");
        return None;
    }

    Some(filtered)
}
