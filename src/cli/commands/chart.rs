use crate::charts::{self, ChartKind};
use crate::cli::commands::filtered_or_notice;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::FilterState;
use crate::core::stats;
use crate::db::Session;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart {
        kind,
        out,
        grupo,
        range,
    } = cmd
    {
        let state = FilterState::from_args(grupo, range)?;
        let session = Session::open(cfg)?;

        let Some(filtered) = filtered_or_notice(&session.table, &state) else {
            return Ok(());
        };

        let data: Vec<(String, usize)> = match kind {
            ChartKind::Emotions => stats::emotion_frequency(&filtered)
                .into_iter()
                .map(|s| (s.emotion, s.count))
                .collect(),
            ChartKind::Status => match stats::status_counts(&filtered) {
                Some(counts) => counts,
                None => {
                    warning("No `estado` column in the data; skipping status chart.");
                    return Ok(());
                }
            },
        };

        if data.is_empty() {
            warning("No values to plot for the selected filters.");
            return Ok(());
        }

        let path = Path::new(out);
        charts::render_count_chart(kind.title(), &data, path)?;
        success(format!("Chart written to {}", path.display()));
    }
    Ok(())
}
