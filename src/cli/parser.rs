use crate::charts::ChartKind;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for asistreport
/// CLI reporting tool over attendance and emotion check-ins in MongoDB
#[derive(Parser)]
#[command(
    name = "asistreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance and emotion check-in reports: stats, charts, XLSX and PDF exports",
    long_about = None
)]
pub struct Cli {
    /// Override the MongoDB connection string from the config file
    #[arg(global = true, long = "uri")]
    pub uri: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// List the distinct groups observed in the collection
    Groups,

    /// List the students present in the filtered table
    Students {
        /// Group label to filter by (default: all groups)
        #[arg(long)]
        grupo: Option<String>,

        /// Date range (YYYY, YYYY-MM, YYYY-MM-DD or start:end)
        #[arg(long)]
        range: Option<String>,
    },

    /// Print summary statistics and the emotion frequency table
    Report {
        #[arg(long, help = "Group label to filter by (default: all groups)")]
        grupo: Option<String>,

        #[arg(
            long,
            help = "Date range (YYYY, YYYY-MM, YYYY-MM-DD or start:end); default: observed min/max"
        )]
        range: Option<String>,
    },

    /// Render a distribution chart to a PNG file
    Chart {
        #[arg(long, value_enum, default_value = "emotions")]
        kind: ChartKind,

        #[arg(long, value_name = "FILE", help = "Output PNG path")]
        out: String,

        #[arg(long)]
        grupo: Option<String>,

        #[arg(long)]
        range: Option<String>,
    },

    /// Export the filtered table
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output path (default: asistencia_{grupo}.{ext})"
        )]
        file: Option<String>,

        #[arg(long)]
        grupo: Option<String>,

        #[arg(long)]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing output file")]
        force: bool,
    },

    /// Generate a per-student PDF report
    Pdf {
        #[arg(long, help = "Student name (see the students command)")]
        student: String,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output path (default: reporte_{estudiante}.pdf)"
        )]
        file: Option<String>,

        #[arg(long)]
        grupo: Option<String>,

        #[arg(long)]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing output file")]
        force: bool,
    },
}
