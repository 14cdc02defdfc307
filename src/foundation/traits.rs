//! The validator contract.
//!
//! Every check in this crate implements [`Validate`]: a name, a metadata
//! report, and a `validate` method returning `Ok(())` or a structured
//! [`ValidationError`]. The boolean and message-only views most callers want
//! are provided as default methods, so a validator author writes exactly one
//! method.

use crate::foundation::{ValidationError, ValidatorMetadata};

// ============================================================================
// CORE TRAIT
// ============================================================================

/// The contract every validator implements.
///
/// Generic over the input type, so string checks take `&str`, numeric checks
/// take `&f64`, and dynamic checks take [`&Value`](crate::value::Value),
/// all with compile-time type safety.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::foundation::{Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("not_blank", "Must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotBlank.is_valid("hello"));
/// assert!(!NotBlank.is_valid("   "));
/// ```
pub trait Validate {
    /// The type being validated. `?Sized` so `str` and `[T]` work directly.
    type Input: ?Sized;

    /// Runs the check.
    ///
    /// Returns `Ok(())` on acceptance, `Err` with a structured error on
    /// rejection. Rejection is the soft-failure channel: it never panics and
    /// never maps to `BuildError`.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// The boolean view: did the input pass?
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }

    /// The message view: `None` on acceptance, the human-readable reason on
    /// rejection.
    fn message_for(&self, input: &Self::Input) -> Option<String> {
        self.validate(input).err().map(|e| e.message.into_owned())
    }

    /// Introspection metadata. Override to report name, cost, and tags.
    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::default()
    }

    /// Name for diagnostics. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// Trait objects and references validate by delegation.

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn metadata(&self) -> ValidatorMetadata {
        (**self).metadata()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn metadata(&self) -> ValidatorMetadata {
        (**self).metadata()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Fluent combinator methods, implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::prelude::*;
///
/// let username = min_length(3).and(max_length(20)).and(alphanumeric());
/// assert!(username.is_valid("alice42"));
/// assert!(!username.is_valid("a"));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the check: succeeds when the inner validator fails.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Runs the check only when `condition` holds; otherwise accepts.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Lifts the check over `Option`: `None` is accepted, `Some` is checked.
    fn optional(self) -> Optional<Self>
    where
        Self::Input: Sized,
    {
        Optional::new(self)
    }

    /// Replaces the failure message, keeping the code and params.
    fn with_message(self, message: impl Into<std::borrow::Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "always fails"))
        }
    }

    #[test]
    fn boolean_view() {
        assert!(AlwaysValid.is_valid("anything"));
        assert!(!AlwaysFails.is_valid("anything"));
    }

    #[test]
    fn message_view() {
        assert_eq!(AlwaysValid.message_for("x"), None);
        assert_eq!(AlwaysFails.message_for("x"), Some("always fails".into()));
    }

    #[test]
    fn default_name_contains_type() {
        assert!(AlwaysValid.name().contains("AlwaysValid"));
    }

    #[test]
    fn boxed_trait_object_delegates() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysFails);
        assert!(boxed.validate("x").is_err());
        assert!(!boxed.is_valid("x"));
    }

    #[test]
    fn reference_delegates() {
        let v = AlwaysValid;
        let r = &v;
        assert!(r.validate("x").is_ok());
    }
}
