//! AND combinator: logical conjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// Both validators must pass; evaluation short-circuits on the first failure,
/// so the error reported is always the left validator's when both would fail.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::prelude::*;
///
/// let validator = min_length(3).and(max_length(10));
/// assert!(validator.is_valid("hello"));
/// assert!(!validator.is_valid("hi"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the inner validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Requires every validator in a dynamic list to pass.
///
/// Unlike a chained `And`, all validators run and every failure is collected,
/// which suits form-style validation where the caller wants the full list.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let errors: Vec<ValidationError> = self
            .validators
            .iter()
            .filter_map(|v| v.validate(input).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            let count = errors.len();
            Err(
                ValidationError::new("and_all_failed", format!("{count} check(s) failed"))
                    .with_nested(errors),
            )
        }
    }
}

/// Creates an [`AndAll`] from a vector of validators.
#[must_use]
pub fn and_all<V: Validate>(validators: Vec<V>) -> AndAll<V> {
    AndAll { validators }
}
