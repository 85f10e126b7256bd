//! Parser for the compact transcript interchange format.
//!
//! A record encodes a whole transcript as `term ('|' term)*`, each term as
//! `course (';' course)*`, and each course as `name ',' credits ',' grade`,
//! for example `HIST191,2,C;IF100,3,B|AL102,3,A`. A trailing `|` or `;` is
//! tolerated and ignored.

use serde::Serialize;
use tracing::debug;

/// A single course attempt as entered or imported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub name: String,
    pub credits: f64,
    pub grade: String,
}

impl Course {
    pub fn new(name: &str, credits: f64, grade: &str) -> Self {
        Course {
            name: name.to_string(),
            credits,
            grade: grade.to_string(),
        }
    }
}

/// Decodes a transcript record into per-term course lists, in record order.
///
/// No validation happens here: a short entry yields empty name or grade
/// fields, and unparseable credits become NaN, both of which the
/// aggregators treat as unusable. Grade validity and duplicate course
/// names are their concern too.
pub fn parse_transcript(input: &str) -> Vec<Vec<Course>> {
    let mut terms: Vec<&str> = input.split('|').collect();
    if terms.last() == Some(&"") {
        terms.pop();
    }

    let mut transcript = Vec::with_capacity(terms.len());
    for term in terms {
        let mut entries: Vec<&str> = term.split(';').collect();
        if entries.last() == Some(&"") {
            entries.pop();
        }

        let mut courses = Vec::with_capacity(entries.len());
        for entry in entries {
            let mut fields = entry.split(',');
            let name = fields.next().unwrap_or("");
            let credits = parse_credits(fields.next());
            let grade = fields.next().unwrap_or("");
            courses.push(Course::new(name, credits, grade));
        }
        transcript.push(courses);
    }

    debug!(
        terms = transcript.len(),
        courses = transcript.iter().map(Vec::len).sum::<usize>(),
        "Transcript record parsed"
    );

    transcript
}

/// A blank credits field reads as zero; any other unparseable value becomes
/// NaN and poisons the downstream sums instead of aborting the record.
fn parse_credits(field: Option<&str>) -> f64 {
    match field {
        None => f64::NAN,
        Some(s) if s.trim().is_empty() => 0.0,
        Some(s) => s.trim().parse().unwrap_or(f64::NAN),
    }
}
