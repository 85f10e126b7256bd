//! Display formatting and export for GPA results.
//!
//! Supports fixed two-decimal GPA rendering, pretty JSON, and CSV append.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::aggregators::types::TermRow;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Renders a GPA with exactly two digits after the decimal point.
///
/// Extra fractional digits are cut, not rounded: 2.456 renders as "2.45".
pub fn format_gpa(gpa: f64) -> String {
    let text = gpa.to_string();
    match text.find('.') {
        None => format!("{text}.00"),
        Some(dot) => {
            let fraction = &text[dot + 1..];
            match fraction.len() {
                1 => format!("{text}0"),
                2 => text,
                _ => text[..dot + 3].to_string(),
            }
        }
    }
}

/// Logs a result as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Appends a [`TermRow`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, row: &TermRow) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(row)?;
    writer.flush()?;

    Ok(())
}
