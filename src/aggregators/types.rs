//! Result types produced by the aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// GPA figures for a single term.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SemesterSummary {
    pub gpa: f64,
    pub credits: f64,
    pub quality_points: f64,
}

/// Lifetime GPA figures across every recorded term.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CumulativeSummary {
    pub gpa: f64,
    pub quality_points: f64,
    pub gpa_credits: f64,
    pub attempted_credits: f64,
    pub earned_credits: f64,
}

/// One report row: a term's summary, numbered in record order from 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermRow {
    pub term: usize,
    pub gpa: f64,
    pub credits: f64,
    pub quality_points: f64,
}

/// Complete report for one transcript, rendered as JSON for display layers.
#[derive(Debug, Serialize)]
pub struct TranscriptReport {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub terms: Vec<TermRow>,
    pub cumulative: CumulativeSummary,
}
