use crate::cli::commands::filtered_or_notice;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::FilterState;
use crate::core::stats;
use crate::db::Session;
use crate::errors::AppResult;

/// Students available for PDF selection: the sorted distinct non-null
/// names of the filtered table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Students { grupo, range } = cmd {
        let state = FilterState::from_args(grupo, range)?;
        let session = Session::open(cfg)?;

        let Some(filtered) = filtered_or_notice(&session.table, &state) else {
            return Ok(());
        };

        for name in stats::distinct_students(&filtered) {
            println!("{name}");
        }
    }
    Ok(())
}
