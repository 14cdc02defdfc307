//! Optional combinator: lift a validator over `Option`.

use crate::foundation::{Validate, ValidationError};

/// Accepts `None`; validates the payload of `Some`.
///
/// The inner input type must be sized, so string validators are lifted over
/// `Option<String>` rather than `Option<str>`.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::prelude::*;
///
/// let v = email().optional();
/// assert!(v.is_valid(&None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Optional<V>
where
    V: Validate,
    V::Input: Sized,
{
    type Input = Option<V::Input>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            Some(value) => self.inner.validate(value),
            None => Ok(()),
        }
    }
}
