//! CLI entry point for the GPA calculator.
//!
//! Provides subcommands for per-term GPA figures, lifetime totals across a
//! whole transcript, and a full report with optional CSV export.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gpa_calc::aggregators::cumulative::cumulative_summary;
use gpa_calc::aggregators::report::build_report;
use gpa_calc::aggregators::semester::semester_summary;
use gpa_calc::output::{append_record, format_gpa, print_json};
use gpa_calc::parser::parse_transcript;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_calc")]
#[command(about = "A tool to compute GPA figures from transcript records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each term's GPA, credits, and quality points
    Semester {
        /// Transcript record, or path to a file containing one
        #[arg(value_name = "RECORD_OR_FILE")]
        source: String,
    },
    /// Print lifetime totals across every term of the record
    Cumulative {
        /// Transcript record, or path to a file containing one
        #[arg(value_name = "RECORD_OR_FILE")]
        source: String,
    },
    /// Print the full report, optionally appending term rows to a CSV file
    Report {
        /// Transcript record, or path to a file containing one
        #[arg(value_name = "RECORD_OR_FILE")]
        source: String,

        /// CSV file to append term rows to
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gpa_calc.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gpa_calc.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Semester { source } => {
            let record = load_record(&source)?;
            let terms = parse_transcript(&record);

            for (index, courses) in terms.iter().enumerate() {
                let summary = semester_summary(courses);
                info!(
                    term = index + 1,
                    gpa = %format_gpa(summary.gpa),
                    credits = summary.credits,
                    quality_points = summary.quality_points,
                    "Term summary"
                );
            }
        }
        Commands::Cumulative { source } => {
            let record = load_record(&source)?;
            let summary = cumulative_summary(&parse_transcript(&record));

            info!(gpa = %format_gpa(summary.gpa), "Cumulative GPA");
            print_json(&summary)?;
        }
        Commands::Report { source, output } => {
            let record = load_record(&source)?;
            let report = build_report(&parse_transcript(&record));

            print_json(&report)?;

            if let Some(path) = output {
                for row in &report.terms {
                    append_record(&path, row)?;
                }
                info!(path = %path, rows = report.terms.len(), "Term rows exported");
            }
        }
    }

    Ok(())
}

/// Reads a transcript record from a file path, or treats the argument as a
/// record literal when no such file exists.
#[tracing::instrument]
fn load_record(source: &str) -> Result<String> {
    let record = if Path::new(source).is_file() {
        std::fs::read_to_string(source)?.trim().to_string()
    } else {
        source.to_string()
    };
    Ok(record)
}
