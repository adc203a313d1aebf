use crate::cli::commands::filtered_or_notice;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::FilterState;
use crate::db::Session;
use crate::errors::AppResult;
use crate::export::{
    default_table_filename, ensure_writable, export_csv, export_json, export_xlsx, ExportFormat,
};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        grupo,
        range,
        force,
    } = cmd
    {
        let state = FilterState::from_args(grupo, range)?;
        let session = Session::open(cfg)?;

        let Some(filtered) = filtered_or_notice(&session.table, &state) else {
            return Ok(());
        };

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_table_filename(&state.selector, format)),
        };

        ensure_writable(&path, *force)?;

        match format {
            ExportFormat::Xlsx => export_xlsx(&filtered, &path)?,
            ExportFormat::Csv => export_csv(&filtered, &path)?,
            ExportFormat::Json => export_json(&filtered, &path)?,
        }
    }
    Ok(())
}
