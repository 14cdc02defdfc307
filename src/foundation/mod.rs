//! Core validation types and traits.
//!
//! The building blocks everything else rests on:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`] (soft failures), [`BuildError`] (hard
//!   configuration failures), [`ValidationErrors`]
//! - **Introspection**: [`ValidatorMetadata`], [`ValidationComplexity`]
//! - **Outcome**: [`Report`]
//!
//! # Three result channels
//!
//! Every check answers through one of three channels:
//!
//! 1. The boolean channel: [`Validate::is_valid`] returns `true`/`false`.
//! 2. The message channel: [`Validate::message_for`] returns the rejection
//!    reason as a string; a type-mismatched input is still a rejection, not
//!    a panic.
//! 3. The hard-error channel: constructors like
//!    [`PostalCode::for_country`](crate::validators::PostalCode::for_country)
//!    and [`Registry::make`](crate::registry::Registry::make) return
//!    `Err(BuildError)` for configuration mistakes, before any input is seen.

pub mod error;
pub mod metadata;
pub mod report;
pub mod traits;

pub use error::{BuildError, ValidationError, ValidationErrors};
pub use metadata::{ValidationComplexity, ValidatorMetadata};
pub use report::Report;
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs several validators against one value, collecting every failure.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::foundation::validate_with_all;
///
/// let result = validate_with_all("hi", &[&min_length(3), &max_length(10)]);
/// assert!(result.is_err());
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    if errors.has_errors() { Err(errors) } else { Ok(()) }
}

/// Runs validators in order until one accepts; errors collect only if all fail.
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
