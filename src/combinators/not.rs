//! NOT combinator: logical inversion of a validator.

use crate::foundation::{Validate, ValidationError};

/// Succeeds when the inner validator fails, and vice versa.
///
/// The inner error is discarded on inversion; the produced error only states
/// that the input unexpectedly satisfied the inner check.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::prelude::*;
///
/// let no_digits = contains("0").or(contains("1")).not();
/// assert!(no_digits.is_valid("abc"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Input satisfied a check it must not satisfy",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}
