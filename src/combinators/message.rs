//! Message-override combinator.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the failure message of the inner validator.
///
/// The error code, params, and nested errors are preserved so programmatic
/// handling keeps working; only the human-readable text changes.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::prelude::*;
///
/// let v = min_length(8).with_message("Password is too short");
/// assert_eq!(v.message_for("abc"), Some("Password is too short".into()));
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    pub(crate) inner: V,
    pub(crate) message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new message override.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|mut error| {
            error.message = self.message.clone();
            error
        })
    }
}
