//! Validation failure types.
//!
//! [`ValidationError`] is the soft-failure channel: a validator that rejects
//! its input returns one, carrying a stable code, an English message, and
//! structured params. [`BuildError`] is the hard-failure channel: constructing
//! a validator from bad configuration (an unknown country, a malformed
//! pattern, an unregistered type tag) is an error in the caller's program,
//! not in the validated value, and is reported before any validation runs.
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages allocates nothing.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::value::TypeTag;

/// Key-value pairs attached to an error. Almost always 0-2 entries.
type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::foundation::ValidationError;
///
/// let error = ValidationError::new("luhn_checksum", "Card number failed the Luhn check")
///     .with_param("length", "16");
/// assert_eq!(error.param("length"), Some("16"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Stable code for programmatic handling, e.g. `"luhn_checksum"`.
    pub code: Cow<'static, str>,

    /// Human-readable message. This is what `message_for` surfaces.
    pub message: Cow<'static, str>,

    /// Structured parameters for message templating.
    pub params: Params,

    /// Child errors, populated by combinators such as `Or` and by
    /// multi-rule validators such as the password policy.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates an error from a code and message.
    ///
    /// Static strings are borrowed; dynamic strings allocate only when built.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Appends a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error carries nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Total error count, including nested errors at any depth.
    #[must_use]
    pub fn total_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_count)
            .sum::<usize>()
    }

    /// Flattens this error and all nested errors depth-first.
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }

    /// Serializes the error tree for transport or logging.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "params": params,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  caused by:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A value had the wrong dynamic type for the validator.
    ///
    /// The message reads `Expected a `string` but got number`, matching
    /// what `Report` surfaces to callers.
    pub fn type_mismatch(expected: TypeTag, actual: TypeTag) -> Self {
        Self::new(
            "type_mismatch",
            format!("Expected a `{expected}` but got {actual}"),
        )
        .with_param("expected", expected.to_string())
        .with_param("actual", actual.to_string())
    }

    /// A string fell short of a minimum length (in Unicode scalar values).
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// A string exceeded a maximum length (in Unicode scalar values).
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// A value did not match an expected format.
    pub fn invalid_format(format: impl Into<Cow<'static, str>>) -> Self {
        let format = format.into();
        Self::new("invalid_format", format!("Not a valid {format}")).with_param("format", format)
    }

    /// A number fell outside an inclusive range.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::new(
            "out_of_range",
            format!("Value must be between {min} and {max}"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// A free-form error with a custom message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// BUILD ERROR
// ============================================================================

/// Errors raised while constructing a validator, before any input is seen.
///
/// These are programming errors in the caller, not data errors: an unknown
/// country code, a pattern that does not compile, or a type tag with no
/// registered factory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// No postal-code rules exist for the given ISO 3166-1 alpha-2 code.
    #[error("unsupported country code `{0}`")]
    UnsupportedCountry(String),

    /// A user-supplied regular expression failed to compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// The regex engine's diagnostic.
        reason: String,
    },

    /// The registry has no factory for the requested type tag.
    #[error("Unsupported data type: `{0}`")]
    UnknownTypeTag(TypeTag),
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Accumulates soft failures across several independent checks.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if any errors were collected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no errors were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Borrows the collected errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Collapses the collection into one error with the rest nested.
    pub fn into_single_error(self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::new("multiple_failures", message).with_nested(self.errors)
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
