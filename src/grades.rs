//! Letter-grade scale shared by the GPA calculators.

/// Quality-point value for every recognized grade token.
///
/// | Token | Points |
/// |-------|--------|
/// | A     | 4.0    |
/// | A-    | 3.7    |
/// | B+    | 3.3    |
/// | B     | 3.0    |
/// | B-    | 2.7    |
/// | C+    | 2.3    |
/// | C     | 2.0    |
/// | C-    | 1.7    |
/// | D+    | 1.3    |
/// | D     | 1.0    |
/// | F     | 0.0    |
/// | NA    | 0.0    |
/// | S     | 0.0    |
/// | U     | 0.0    |
///
/// S and U are worth zero points but are pass/fail markers, not fails:
/// they stay out of GPA-credit totals, while F and NA count toward them.
pub static GRADE_SCALE: &[(&str, f64)] = &[
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("F", 0.0),
    ("NA", 0.0),
    ("S", 0.0),
    ("U", 0.0),
];

/// Returns the quality-point value for a grade token, or `None` for tokens
/// outside the scale. Courses carrying an unknown token are excluded from
/// every aggregation.
pub fn grade_points(token: &str) -> Option<f64> {
    GRADE_SCALE
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, points)| *points)
}

/// Pass/fail markers. These never enter a GPA figure.
pub fn is_pass_fail(token: &str) -> bool {
    matches!(token, "S" | "U")
}

/// Grades that count as a failing prior attempt when a course is retaken.
pub fn is_failing(token: &str) -> bool {
    matches!(token, "U" | "F" | "NA")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_lookups() {
        assert_eq!(grade_points("A"), Some(4.0));
        assert_eq!(grade_points("A-"), Some(3.7));
        assert_eq!(grade_points("B+"), Some(3.3));
        assert_eq!(grade_points("D"), Some(1.0));
        assert_eq!(grade_points("F"), Some(0.0));
        assert_eq!(grade_points("S"), Some(0.0));
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(grade_points("E"), None);
        assert_eq!(grade_points("a"), None);
        assert_eq!(grade_points(""), None);
        assert_eq!(grade_points("A+"), None);
    }

    #[test]
    fn test_pass_fail_tokens() {
        assert!(is_pass_fail("S"));
        assert!(is_pass_fail("U"));
        assert!(!is_pass_fail("F"));
        assert!(!is_pass_fail("NA"));
        assert!(!is_pass_fail("A"));
    }

    #[test]
    fn test_failing_tokens() {
        assert!(is_failing("U"));
        assert!(is_failing("F"));
        assert!(is_failing("NA"));
        assert!(!is_failing("S"));
        assert!(!is_failing("D"));
    }

    #[test]
    fn test_every_scale_entry_resolves() {
        for (token, points) in GRADE_SCALE {
            assert_eq!(grade_points(token), Some(*points));
        }
    }
}
