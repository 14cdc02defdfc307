//! Conditional combinator: validate only when a predicate holds.

use crate::foundation::{Validate, ValidationError};

/// Runs the inner validator only when `condition` returns true; otherwise
/// the input is accepted unchecked.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::prelude::*;
///
/// // Only long inputs need the strict check.
/// let v = alphanumeric().when(|s: &str| s.len() > 3);
/// assert!(v.is_valid("a!"));       // short: skipped
/// assert!(!v.is_valid("long!!"));  // long: checked, fails
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    pub(crate) inner: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(inner: V, condition: C) -> Self {
        Self { inner, condition }
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.inner.validate(input)
        } else {
            Ok(())
        }
    }
}
