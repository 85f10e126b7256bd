//! Single-term GPA reduction.

use crate::aggregators::types::SemesterSummary;
use crate::grades::{grade_points, is_pass_fail};
use crate::parser::Course;

/// Reduces one term's course list to its GPA and credit totals.
///
/// Placeholder rows (empty name), unrecognized grade tokens, and pass/fail
/// grades are skipped. Quality points accumulate with one extra digit of
/// fixed-point precision and are scaled back down once at the end, keeping
/// long course lists free of drift from repeated division.
///
/// A term where nothing counts comes back as the all-zero summary rather
/// than an error.
pub fn semester_summary(courses: &[Course]) -> SemesterSummary {
    let mut credits = 0.0;
    let mut quality_points = 0.0;

    for course in courses {
        let Some(points) = grade_points(&course.grade) else {
            continue;
        };
        if course.name.is_empty() || is_pass_fail(&course.grade) {
            continue;
        }

        credits += course.credits;
        quality_points += course.credits * points * 10.0;
    }

    if credits == 0.0 {
        return SemesterSummary::default();
    }

    SemesterSummary {
        gpa: quality_points / credits / 10.0,
        credits,
        quality_points: quality_points / 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_is_zero() {
        assert_eq!(semester_summary(&[]), SemesterSummary::default());
    }

    #[test]
    fn test_all_skipped_is_zero() {
        let courses = vec![
            Course::new("", 3.0, "A"),
            Course::new("CS101", 3.0, "E"),
            Course::new("CIP101", 1.0, "S"),
            Course::new("AL102", 3.0, "U"),
        ];

        assert_eq!(semester_summary(&courses), SemesterSummary::default());
    }

    #[test]
    fn test_two_courses() {
        let courses = vec![
            Course::new("IF100", 3.0, "B"),
            Course::new("MATH101", 3.0, "A"),
        ];

        let summary = semester_summary(&courses);

        assert_eq!(summary.credits, 6.0);
        assert_eq!(summary.quality_points, 21.0);
        assert_eq!(summary.gpa, 3.5);
    }

    #[test]
    fn test_failing_grades_count() {
        // F and NA carry zero points but their credit hours stay in the
        // GPA denominator, unlike S and U.
        let courses = vec![
            Course::new("MATH101", 3.0, "F"),
            Course::new("HIST191", 2.0, "A"),
        ];

        let summary = semester_summary(&courses);

        assert_eq!(summary.credits, 5.0);
        assert_eq!(summary.quality_points, 8.0);
        assert_eq!(summary.gpa, 1.6);
    }

    #[test]
    fn test_pass_fail_excluded() {
        let courses = vec![
            Course::new("HIST191", 2.0, "S"),
            Course::new("IF100", 3.0, "B"),
        ];

        let summary = semester_summary(&courses);

        assert_eq!(summary.credits, 3.0);
        assert_eq!(summary.gpa, 3.0);
    }

    #[test]
    fn test_order_invariant() {
        let forward = vec![
            Course::new("HIST191", 2.0, "C"),
            Course::new("IF100", 3.0, "B"),
            Course::new("NS101", 4.0, "D"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(semester_summary(&forward), semester_summary(&reversed));
    }

    #[test]
    fn test_zero_credit_courses_only() {
        let courses = vec![Course::new("CIP101", 0.0, "A")];

        assert_eq!(semester_summary(&courses), SemesterSummary::default());
    }

    #[test]
    fn test_nan_credits_poison_result() {
        let courses = vec![
            Course::new("CS101", f64::NAN, "A"),
            Course::new("IF100", 3.0, "B"),
        ];

        let summary = semester_summary(&courses);

        assert!(summary.gpa.is_nan());
        assert!(summary.credits.is_nan());
    }
}
