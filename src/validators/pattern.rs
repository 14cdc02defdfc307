//! User-supplied regular expression matching.

use crate::foundation::{BuildError, ValidationError};

crate::validator! {
    /// Matches input against a caller-supplied regular expression.
    ///
    /// Construction is fallible: a pattern that does not compile is a
    /// configuration error ([`BuildError::InvalidPattern`]), reported before
    /// any input is validated.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use validus::validators::matches_pattern;
    ///
    /// let v = matches_pattern(r"^\d{3}-\d{4}$")?;
    /// assert!(v.is_valid("555-0199"));
    /// assert!(matches_pattern("(unclosed").is_err());
    /// ```
    pub Matches { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new("pattern_mismatch", "Does not match the required pattern")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> BuildError {
        regex::Regex::new(pattern)
            .map(|compiled| Self { pattern: compiled })
            .map_err(|e| BuildError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }
    fn matches_pattern(pattern: &str) -> BuildError;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn matches_compiled_pattern() {
        let v = matches_pattern(r"^\d{3}-\d{4}$").unwrap();
        assert!(v.validate("555-0199").is_ok());
        assert!(v.validate("5550199").is_err());
    }

    #[test]
    fn bad_pattern_is_a_build_error() {
        let err = matches_pattern("(unclosed").unwrap_err();
        let BuildError::InvalidPattern { pattern, .. } = err else {
            panic!("expected InvalidPattern");
        };
        assert_eq!(pattern, "(unclosed");
    }

    #[test]
    fn failure_reports_pattern_param() {
        let v = matches_pattern(r"^a+$").unwrap();
        let err = v.validate("bbb").unwrap_err();
        assert_eq!(err.code, "pattern_mismatch");
        assert_eq!(err.param("pattern"), Some("^a+$"));
    }
}
