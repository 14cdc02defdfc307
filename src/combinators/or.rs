//! OR combinator: logical disjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// At least one validator must pass; evaluation short-circuits on the first
/// success. When both fail, both errors are reported as nested children.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::prelude::*;
///
/// let validator = isbn10().or(isbn13());
/// assert!(validator.is_valid("9780306406157"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the inner validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let left_error = match self.left.validate(input) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        match self.right.validate(input) {
            Ok(()) => Ok(()),
            Err(right_error) => Err(ValidationError::new(
                "or_failed",
                "All alternatives failed",
            )
            .with_nested(vec![left_error, right_error])),
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Tries a dynamic list of validators until one passes.
///
/// If every validator fails, the combined error nests all individual errors
/// in order.
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        for validator in &self.validators {
            match validator.validate(input) {
                Ok(()) => return Ok(()),
                Err(e) => errors.push(e),
            }
        }

        let count = errors.len();
        Err(
            ValidationError::new("or_any_failed", format!("All {count} alternatives failed"))
                .with_nested(errors),
        )
    }
}

/// Creates an [`OrAny`] from a vector of validators.
#[must_use]
pub fn or_any<V: Validate>(validators: Vec<V>) -> OrAny<V> {
    OrAny { validators }
}
