use crate::config::Config;
use crate::core::stats;
use crate::db::Session;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Distinct groups over the full snapshot, the values the --grupo flag
/// accepts.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = Session::open(cfg)?;

    let groups = stats::distinct_groups(&session.table);
    if groups.is_empty() {
        warning("No groups found in the collection.");
        return Ok(());
    }

    for g in groups {
        println!("{g}");
    }
    Ok(())
}
