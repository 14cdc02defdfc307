//! Emptiness validators for strings.

use crate::foundation::ValidationError;

crate::validator! {
    /// The string must contain at least one character.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "Must not be empty") }
    fn not_empty();
}

crate::validator! {
    /// The string must contain at least one non-whitespace character.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::new("not_blank", "Must not be blank") }
    fn not_blank();
}

crate::validator! {
    /// The string must be empty.
    pub Empty for str;
    rule(input) { input.is_empty() }
    error(input) { ValidationError::new("empty", "Must be empty") }
    fn empty();
}
