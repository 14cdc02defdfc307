//! String length validators.
//!
//! Length counts Unicode scalar values (`chars().count()`), not bytes, so
//! `"héllo"` has length 5 everywhere in this module.

use crate::foundation::ValidationError;

crate::validator! {
    /// Requires at least `min` characters.
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    fn min_length(min: usize);
}

crate::validator! {
    /// Requires at most `max` characters.
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    fn max_length(max: usize);
}

crate::validator! {
    /// Requires exactly `length` characters.
    pub ExactLength { length: usize } for str;
    rule(self, input) { input.chars().count() == self.length }
    error(self, input) {
        ValidationError::new(
            "exact_length",
            format!("Must be exactly {} characters", self.length),
        )
        .with_param("expected", self.length.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    fn exact_length(length: usize);
}

crate::validator! {
    /// Requires between `min` and `max` characters, inclusive.
    pub LengthRange { min: usize, max: usize } for str;
    rule(self, input) {
        let len = input.chars().count();
        len >= self.min && len <= self.max
    }
    error(self, input) {
        ValidationError::new(
            "length_range",
            format!("Must be between {} and {} characters", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    fn length_range(min: usize, max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn min() {
        let v = min_length(3);
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("abcd").is_ok());
        assert!(v.validate("ab").is_err());
        assert!(v.validate("").is_err());
    }

    #[test]
    fn max() {
        let v = max_length(3);
        assert!(v.validate("").is_ok());
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("abcd").is_err());
    }

    #[test]
    fn exact() {
        let v = exact_length(4);
        assert!(v.validate("abcd").is_ok());
        assert!(v.validate("abc").is_err());
        assert!(v.validate("abcde").is_err());
    }

    #[test]
    fn range() {
        let v = length_range(2, 4);
        assert!(v.validate("ab").is_ok());
        assert!(v.validate("abcd").is_ok());
        assert!(v.validate("a").is_err());
        assert!(v.validate("abcde").is_err());
    }

    #[test]
    fn counts_scalars_not_bytes() {
        // "héllo" is 6 bytes but 5 scalar values.
        assert!(exact_length(5).validate("héllo").is_ok());
        assert!(max_length(5).validate("héllo").is_ok());
    }

    #[test]
    fn error_params() {
        let err = min_length(5).validate("ab").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("min"), Some("5"));
        assert_eq!(err.param("actual"), Some("2"));
    }
}
