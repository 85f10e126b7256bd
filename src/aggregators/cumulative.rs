//! Lifetime GPA reduction with course-repeat policy.

use std::collections::HashMap;

use crate::aggregators::types::CumulativeSummary;
use crate::grades::{grade_points, is_failing};
use crate::parser::Course;

/// Reduces an ordered sequence of terms into lifetime totals.
///
/// Terms, and the courses within each term, are processed in record order.
/// A per-name map of the last effective grade decides how each later
/// attempt of the same course is treated:
///
/// - `U` records itself on the first attempt only and never earns or
///   counts credits.
/// - `F` and `NA` count toward GPA credits on the first attempt only; a
///   fail is never recorded over a prior attempt.
/// - `S` earns credits when it is the first attempt or replaces a failing
///   one.
/// - A letter grade earns and counts credits on the first attempt, turns a
///   prior `S` into GPA credits, replaces a failing prior attempt
///   outright, and on a repeated letter grade applies only a strict
///   improvement. The improvement lands as a quality-point delta: the
///   credit hours were already counted by the earlier attempt.
///
/// Every non-skipped attempt adds its credit hours to the attempted total.
/// If no GPA credits accumulate at all, the whole summary is zero,
/// attempted and earned credits included.
pub fn cumulative_summary(terms: &[Vec<Course>]) -> CumulativeSummary {
    let mut attempted_credits = 0.0;
    let mut gpa_credits = 0.0;
    let mut earned_credits = 0.0;
    let mut quality_points = 0.0;

    // Last effective grade per course name, rebuilt on every call.
    let mut effective: HashMap<&str, &str> = HashMap::new();

    for term in terms {
        for course in term {
            if course.name.is_empty() {
                continue;
            }
            let Some(points) = grade_points(&course.grade) else {
                continue;
            };
            let prior = effective.get(course.name.as_str()).copied();

            match course.grade.as_str() {
                "U" => {
                    if prior.is_none() {
                        effective.insert(&course.name, &course.grade);
                    }
                }
                "F" | "NA" => {
                    if prior.is_none() {
                        gpa_credits += course.credits;
                        effective.insert(&course.name, &course.grade);
                    }
                }
                "S" => match prior {
                    None => {
                        earned_credits += course.credits;
                        effective.insert(&course.name, &course.grade);
                    }
                    Some(p) if is_failing(p) => {
                        earned_credits += course.credits;
                        effective.insert(&course.name, &course.grade);
                    }
                    Some(_) => {}
                },
                _ => match prior {
                    None => {
                        earned_credits += course.credits;
                        gpa_credits += course.credits;
                        quality_points += course.credits * points * 10.0;
                        effective.insert(&course.name, &course.grade);
                    }
                    Some("S") => {
                        gpa_credits += course.credits;
                        quality_points += course.credits * points * 10.0;
                        effective.insert(&course.name, &course.grade);
                    }
                    Some(p) if is_failing(p) => {
                        earned_credits += course.credits;
                        gpa_credits += course.credits;
                        quality_points += course.credits * points * 10.0;
                        effective.insert(&course.name, &course.grade);
                    }
                    Some(p) => {
                        let prior_points = grade_points(p).unwrap_or(0.0);
                        if points > prior_points {
                            quality_points += course.credits * (points - prior_points) * 10.0;
                            effective.insert(&course.name, &course.grade);
                        }
                    }
                },
            }

            attempted_credits += course.credits;
        }
    }

    if gpa_credits == 0.0 {
        return CumulativeSummary::default();
    }

    CumulativeSummary {
        gpa: quality_points / gpa_credits / 10.0,
        quality_points: quality_points / 10.0,
        gpa_credits,
        attempted_credits,
        earned_credits,
    }
}
