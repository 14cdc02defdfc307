//! Password policy validation and strength scoring.

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};

/// Coarse strength buckets produced by [`Password::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

/// Validates passwords against a configurable policy.
///
/// Each character class carries a minimum count; zero disables that class
/// entirely. The default policy requires 8+ characters with at least one
/// uppercase letter, one lowercase letter, one digit, and one special
/// character. All violated requirements are reported together as nested
/// errors rather than stopping at the first.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::validators::Password;
///
/// // Relaxed policy: 6+ chars, lowercase and digit only.
/// let relaxed = Password::new()
///     .min_length(6)
///     .min_uppercase(0)
///     .min_special(0);
/// assert!(relaxed.is_valid("pass123"));
/// assert!(!Password::new().is_valid("pass123"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Password {
    min_length: usize,
    min_uppercase: usize,
    min_lowercase: usize,
    min_digits: usize,
    min_special: usize,
}

impl Default for Password {
    fn default() -> Self {
        Self {
            min_length: 8,
            min_uppercase: 1,
            min_lowercase: 1,
            min_digits: 1,
            min_special: 1,
        }
    }
}

impl Password {
    /// The default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length in characters.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Sets the minimum number of uppercase letters. Zero disables.
    #[must_use]
    pub fn min_uppercase(mut self, count: usize) -> Self {
        self.min_uppercase = count;
        self
    }

    /// Sets the minimum number of lowercase letters. Zero disables.
    #[must_use]
    pub fn min_lowercase(mut self, count: usize) -> Self {
        self.min_lowercase = count;
        self
    }

    /// Sets the minimum number of digits. Zero disables.
    #[must_use]
    pub fn min_digits(mut self, count: usize) -> Self {
        self.min_digits = count;
        self
    }

    /// Sets the minimum number of special characters. Zero disables.
    #[must_use]
    pub fn min_special(mut self, count: usize) -> Self {
        self.min_special = count;
        self
    }

    /// Scores a password independently of the policy.
    ///
    /// One point per character class present, one for length 8+, one more
    /// for length 12+; 0-2 points is weak territory, 5-6 is strong.
    #[must_use]
    pub fn score(password: &str) -> Strength {
        let len = password.chars().count();
        let mut points = 0u8;
        if password.chars().any(char::is_uppercase) {
            points += 1;
        }
        if password.chars().any(char::is_lowercase) {
            points += 1;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            points += 1;
        }
        if password
            .chars()
            .any(|c| !(c.is_uppercase() || c.is_lowercase() || c.is_ascii_digit()))
        {
            points += 1;
        }
        if len >= 8 {
            points += 1;
        }
        if len >= 12 {
            points += 1;
        }
        match points {
            0 | 1 => Strength::VeryWeak,
            2 => Strength::Weak,
            3 => Strength::Fair,
            4 | 5 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl Validate for Password {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let mut failures = Vec::new();

        let mut len = 0usize;
        let (mut upper, mut lower, mut digits, mut special) = (0usize, 0, 0, 0);
        for c in input.chars() {
            len += 1;
            if c.is_uppercase() {
                upper += 1;
            } else if c.is_lowercase() {
                lower += 1;
            } else if c.is_ascii_digit() {
                digits += 1;
            } else {
                // Everything outside the first three classes counts as a
                // symbol, caseless letters and non-ASCII digits included.
                special += 1;
            }
        }

        if len < self.min_length {
            failures.push(ValidationError::min_length(self.min_length, len));
        }
        let classes = [
            ("password_uppercase", "uppercase letter", upper, self.min_uppercase),
            ("password_lowercase", "lowercase letter", lower, self.min_lowercase),
            ("password_digit", "digit", digits, self.min_digits),
            ("password_special", "special character", special, self.min_special),
        ];
        for (code, what, have, want) in classes {
            if have < want {
                failures.push(
                    ValidationError::new(code, format!("Must contain {want} {what}(s)"))
                        .with_param("required", want.to_string())
                        .with_param("actual", have.to_string()),
                );
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            let count = failures.len();
            Err(ValidationError::new(
                "password_policy",
                format!("Password violates {count} requirement(s)"),
            )
            .with_nested(failures))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("Password", ValidationComplexity::Linear)
            .with_description(format!(
                "Password policy, minimum {} characters",
                self.min_length
            ))
            .with_tag("string")
            .with_tag("security")
    }
}

/// Creates a [`Password`] validator with the default policy.
#[must_use]
pub fn password() -> Password {
    Password::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_requires_all_classes() {
        let v = password();
        assert!(v.validate("Str0ng!pass").is_ok());
        assert!(v.validate("pass123").is_err());
        assert!(v.validate("ALLUPPER1!").is_err()); // no lowercase
        assert!(v.validate("nodigits!aA").is_err());
    }

    #[test]
    fn relaxed_policy_accepts_simple_passwords() {
        let v = Password::new().min_length(6).min_uppercase(0).min_special(0);
        assert!(v.validate("pass123").is_ok());
        assert!(v.validate("pas1").is_err()); // still too short
    }

    #[test]
    fn class_minimums_count_occurrences() {
        let v = Password::new().min_digits(3).min_special(0).min_uppercase(0);
        assert!(v.validate("lettersand123").is_ok());
        let err = v.validate("lettersand12").unwrap_err();
        let digit_err = err.nested.iter().find(|e| e.code == "password_digit").unwrap();
        assert_eq!(digit_err.param("required"), Some("3"));
        assert_eq!(digit_err.param("actual"), Some("2"));
    }

    #[test]
    fn caseless_letters_count_as_symbols() {
        let v = Password::new()
            .min_uppercase(0)
            .min_lowercase(0)
            .min_digits(0);
        // CJK letters are neither upper, lower, nor ASCII digits, so they
        // land in the symbol class.
        assert!(v.validate("漢字漢字漢字漢字").is_ok());
        assert!(v.validate("password").is_err());
    }

    #[test]
    fn all_violations_are_reported_together() {
        let err = password().validate("abc").unwrap_err();
        assert_eq!(err.code, "password_policy");
        // Too short, no uppercase, no digit, no special.
        assert_eq!(err.nested.len(), 4);
        let codes: Vec<&str> = err.nested.iter().map(|e| e.code.as_ref()).collect();
        assert!(codes.contains(&"min_length"));
        assert!(codes.contains(&"password_special"));
    }

    #[test]
    fn empty_password_fails_every_requirement() {
        let err = password().validate("").unwrap_err();
        assert_eq!(err.nested.len(), 5);
    }

    #[test]
    fn scoring_buckets() {
        assert_eq!(Password::score(""), Strength::VeryWeak);
        assert_eq!(Password::score("aaaa"), Strength::VeryWeak);
        assert_eq!(Password::score("pass123"), Strength::Weak);
        assert_eq!(Password::score("password1"), Strength::Fair);
        assert_eq!(Password::score("Password1"), Strength::Strong);
        assert_eq!(Password::score("Password1!more"), Strength::VeryStrong);
    }

    #[test]
    fn score_is_monotone_in_added_classes() {
        assert!(Password::score("Password1!") > Password::score("password"));
    }
}
