//! Bar-chart rendering for the emotion and attendance-status
//! distributions. Charts land in a PNG file next to the other export
//! artifacts; everything is computed from the filtered table.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use clap::ValueEnum;
use plotters::prelude::*;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ChartKind {
    /// Emotion distribution over the filtered table
    Emotions,
    /// Attendance status counts (requires an `estado` column)
    Status,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Emotions => "Distribución de emociones",
            ChartKind::Status => "Estado de asistencia",
        }
    }
}

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 500;
const BAR_COLOR: RGBColor = RGBColor(74, 144, 226);

/// Y-axis upper bound with 10% headroom.
fn y_max(data: &[(String, usize)]) -> f64 {
    data.iter().map(|(_, n)| *n as f64).fold(0.0, f64::max) * 1.1
}

/// Render labeled count bars to a PNG file.
pub fn render_count_chart(title: &str, data: &[(String, usize)], path: &Path) -> AppResult<()> {
    if data.is_empty() {
        return Err(AppError::Chart("no data to plot".to_string()));
    }

    info(format!("Rendering chart: {}", path.display()));

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(0usize..data.len(), 0f64..y_max(data))
        .map_err(to_chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len())
        .x_label_formatter(&|x| {
            data.get(*x)
                .map(|(label, _)| label.clone())
                .unwrap_or_default()
        })
        .y_desc("Registros")
        .draw()
        .map_err(to_chart_error)?;

    chart
        .draw_series(data.iter().enumerate().map(|(i, (_, count))| {
            Rectangle::new([(i, 0.0), (i + 1, *count as f64)], BAR_COLOR.filled())
        }))
        .map_err(to_chart_error)?;

    root.present().map_err(to_chart_error)?;
    Ok(())
}

fn to_chart_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}
