use crate::cli::commands::filtered_or_notice;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::FilterState;
use crate::core::stats;
use crate::db::Session;
use crate::errors::{AppError, AppResult};
use crate::export::{default_student_filename, ensure_writable, export_student_pdf};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pdf {
        student,
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

        // the selector only offers students of the filtered table
        if !stats::distinct_students(&filtered)
            .iter()
            .any(|s| s == student)
        {
            return Err(AppError::StudentNotFound(student.clone()));
        }

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_student_filename(student)),
        };

        ensure_writable(&path, *force)?;
        export_student_pdf(&filtered, student, &path)?;
    }
    Ok(())
}
