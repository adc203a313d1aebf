use crate::cli::commands::filtered_or_notice;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{self, FilterState};
use crate::core::stats;
use crate::db::Session;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, metric, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { grupo, range } = cmd {
        let state = FilterState::from_args(grupo, range)?;
        let session = Session::open(cfg)?;

        let Some(filtered) = filtered_or_notice(&session.table, &state) else {
            return Ok(());
        };

        let range_label = match filter::effective_range(&session.table, &state) {
            Some(r) => format!("{}..{}", r.start, r.end),
            None => "-".to_string(),
        };

        header(format!(
            "Resumen (grupo: {}, fechas: {})",
            state.selector.label(),
            range_label
        ));

        let summary = stats::summarize(&filtered);
        metric("Total registros", summary.total_records);
        metric("Estudiantes únicos", summary.distinct_students);

        let freq = stats::emotion_frequency(&filtered);
        if let Some(moda) = stats::modal_emotion(&freq) {
            success(format!("Emoción más común: {moda}"));
        }

        if !freq.is_empty() {
            header("Estadísticas de emociones");
            let mut table = Table::new(vec!["Emoción", "Frecuencia", "Porcentaje (%)"]);
            for s in &freq {
                table.add_row(vec![
                    s.emotion.clone(),
                    s.count.to_string(),
                    format!("{:.2}", s.percent),
                ]);
            }
            print!("{}", table.render());
        }

        match stats::status_counts(&filtered) {
            Some(counts) => {
                header("Estado de asistencia");
                let mut table = Table::new(vec!["Estado", "Registros"]);
                for (estado, n) in counts {
                    table.add_row(vec![estado, n.to_string()]);
                }
                print!("{}", table.render());
            }
            None => info("No `estado` column in the data; skipping status summary."),
        }
    }
    Ok(())
}
