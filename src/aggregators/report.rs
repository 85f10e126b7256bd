//! Whole-transcript report assembly.

use chrono::Utc;

use crate::aggregators::cumulative::cumulative_summary;
use crate::aggregators::semester::semester_summary;
use crate::aggregators::types::{TermRow, TranscriptReport};
use crate::parser::Course;

/// Builds the complete report for a transcript: one row per term in record
/// order, followed by the lifetime summary over the same terms.
pub fn build_report(terms: &[Vec<Course>]) -> TranscriptReport {
    let mut rows = Vec::with_capacity(terms.len());
    for (index, courses) in terms.iter().enumerate() {
        let summary = semester_summary(courses);
        rows.push(TermRow {
            term: index + 1,
            gpa: summary.gpa,
            credits: summary.credits,
            quality_points: summary.quality_points,
        });
    }

    TranscriptReport {
        schema_version: 1,
        generated_at: Utc::now(),
        terms: rows,
        cumulative: cumulative_summary(terms),
    }
}
