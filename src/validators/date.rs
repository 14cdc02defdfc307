//! Date and time validators.

use chrono::{DateTime, NaiveDate, Utc};

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};

crate::validator! {
    /// Calendar date in ISO `YYYY-MM-DD` form. Real dates only: the calendar
    /// is consulted, so `2023-02-30` fails.
    pub IsoDate for str;
    rule(input) { NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok() }
    error(input) { ValidationError::invalid_format("ISO date") }
    fn iso_date();
}

crate::validator! {
    /// RFC 3339 timestamp, e.g. `2023-06-01T12:30:00Z`.
    pub Rfc3339Timestamp for str;
    rule(input) { DateTime::parse_from_rfc3339(input).is_ok() }
    error(input) { ValidationError::invalid_format("RFC 3339 timestamp") }
    fn rfc3339_timestamp();
}

/// Requires an instant strictly before the bound.
///
/// The injected bound is the primary contract; without one the validator
/// reads the ambient clock at validation time, which makes results
/// time-dependent. Tests should use [`before`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Before {
    pub bound: Option<DateTime<Utc>>,
}

impl Validate for Before {
    type Input = DateTime<Utc>;

    fn validate(&self, input: &DateTime<Utc>) -> Result<(), ValidationError> {
        let bound = self.bound.unwrap_or_else(Utc::now);
        if *input < bound {
            Ok(())
        } else {
            Err(
                ValidationError::new("before", format!("Must be before {bound}"))
                    .with_param("bound", bound.to_rfc3339())
                    .with_param("actual", input.to_rfc3339()),
            )
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        let meta = ValidatorMetadata::new("Before", ValidationComplexity::Constant)
            .with_tag("temporal");
        // Ambient-clock results change over time.
        if self.bound.is_none() { meta.not_cacheable() } else { meta }
    }
}

/// Requires an instant strictly after the bound. Same clock handling as
/// [`Before`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct After {
    pub bound: Option<DateTime<Utc>>,
}

impl Validate for After {
    type Input = DateTime<Utc>;

    fn validate(&self, input: &DateTime<Utc>) -> Result<(), ValidationError> {
        let bound = self.bound.unwrap_or_else(Utc::now);
        if *input > bound {
            Ok(())
        } else {
            Err(
                ValidationError::new("after", format!("Must be after {bound}"))
                    .with_param("bound", bound.to_rfc3339())
                    .with_param("actual", input.to_rfc3339()),
            )
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        let meta = ValidatorMetadata::new("After", ValidationComplexity::Constant)
            .with_tag("temporal");
        if self.bound.is_none() { meta.not_cacheable() } else { meta }
    }
}

/// Creates a [`Before`] validator with an explicit bound.
#[must_use]
pub const fn before(bound: DateTime<Utc>) -> Before {
    Before { bound: Some(bound) }
}

/// Creates an [`After`] validator with an explicit bound.
#[must_use]
pub const fn after(bound: DateTime<Utc>) -> After {
    After { bound: Some(bound) }
}

/// Strictly-in-the-past check against the ambient clock.
#[must_use]
pub const fn past() -> Before {
    Before { bound: None }
}

/// Strictly-in-the-future check against the ambient clock.
#[must_use]
pub const fn future() -> After {
    After { bound: None }
}
