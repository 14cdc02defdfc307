//! Dynamic adapters: lift statically-typed validators over [`Value`].
//!
//! A string validator takes `&str`; a registry or a [`Report`] works with
//! [`Value`]. The adapters here bridge the two. Type mismatch is a soft
//! failure on the message channel: feeding a number to a string check yields
//! a `type_mismatch` rejection whose message names both types, never a panic.
//!
//! [`Report`]: crate::foundation::Report

use crate::foundation::{Validate, ValidationError, ValidatorMetadata};
use crate::value::{TypeTag, Value};

/// Lifts a `str` validator over [`Value`].
///
/// Non-string values are rejected with a `type_mismatch` error; string
/// values are delegated to the inner validator.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::combinators::ForString;
/// use validus::validators::credit_card;
/// use validus::value::Value;
///
/// let v = ForString::new(credit_card());
/// assert_eq!(
///     v.message_for(&Value::from(42.0)),
///     Some("Expected a `string` but got number".into()),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ForString<V> {
    inner: V,
}

impl<V> ForString<V> {
    /// Wraps a string validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> Validate for ForString<V>
where
    V: Validate<Input = str>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input {
            Value::String(s) => self.inner.validate(s),
            other => Err(ValidationError::type_mismatch(
                TypeTag::String,
                other.type_tag(),
            )),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.inner.metadata()
    }
}

/// Lifts an `f64` validator over [`Value`].
#[derive(Debug, Clone)]
pub struct ForNumber<V> {
    inner: V,
}

impl<V> ForNumber<V> {
    /// Wraps a numeric validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> Validate for ForNumber<V>
where
    V: Validate<Input = f64>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input {
            Value::Number(n) => self.inner.validate(n),
            other => Err(ValidationError::type_mismatch(
                TypeTag::Number,
                other.type_tag(),
            )),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.inner.metadata()
    }
}

/// Lifts a `bool` validator over [`Value`].
#[derive(Debug, Clone)]
pub struct ForBool<V> {
    inner: V,
}

impl<V> ForBool<V> {
    /// Wraps a boolean validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> Validate for ForBool<V>
where
    V: Validate<Input = bool>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input {
            Value::Bool(b) => self.inner.validate(b),
            other => Err(ValidationError::type_mismatch(
                TypeTag::Boolean,
                other.type_tag(),
            )),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.inner.metadata()
    }
}
