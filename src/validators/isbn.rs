//! ISBN-10 and ISBN-13 validation.
//!
//! Hyphens and spaces are stripped before checking, so `"0-306-40615-2"`
//! and `"0306406152"` are the same book. ISBN-10 uses the weighted mod-11
//! checksum with `X` standing for 10 in the final position; ISBN-13 uses the
//! alternating 1/3-weight mod-10 checksum (the EAN scheme).

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};

fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .collect()
}

/// Checks a normalized 10-character ISBN-10 body.
fn isbn10_checksum_passes(body: &str) -> bool {
    if body.len() != 10 {
        return false;
    }
    let mut sum = 0u32;
    for (i, c) in body.chars().enumerate() {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            // X is only legal as the check digit.
            'X' | 'x' if i == 9 => 10,
            _ => return false,
        };
        #[allow(clippy::cast_possible_truncation)]
        let weight = 10 - i as u32;
        sum += weight * value;
    }
    sum % 11 == 0
}

/// Checks a normalized 13-digit ISBN-13 body.
fn isbn13_checksum_passes(body: &str) -> bool {
    if body.len() != 13 {
        return false;
    }
    let mut sum = 0u32;
    for (i, c) in body.chars().enumerate() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 0 { d } else { 3 * d };
    }
    sum % 10 == 0
}

/// Validates ISBN-10 identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Isbn10;

impl Validate for Isbn10 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if isbn10_checksum_passes(&normalize(input)) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("ISBN-10"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("Isbn10", ValidationComplexity::Linear)
            .with_description("Weighted mod-11 checksum, X allowed as check digit")
            .with_tag("string")
            .with_tag("checksum")
    }
}

/// Validates ISBN-13 identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Isbn13;

impl Validate for Isbn13 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if isbn13_checksum_passes(&normalize(input)) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("ISBN-13"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("Isbn13", ValidationComplexity::Linear)
            .with_description("Alternating 1/3-weight mod-10 checksum")
            .with_tag("string")
            .with_tag("checksum")
    }
}

/// Validates either ISBN form, decided by the normalized length.
///
/// Length decides which checksum runs: 10 characters means ISBN-10, 13 means
/// ISBN-13, anything else is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Isbn;

impl Validate for Isbn {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let body = normalize(input);
        let ok = match body.len() {
            10 => isbn10_checksum_passes(&body),
            13 => isbn13_checksum_passes(&body),
            _ => false,
        };
        if ok {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("ISBN"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("Isbn", ValidationComplexity::Linear)
            .with_description("ISBN-10 or ISBN-13, decided by length")
            .with_tag("string")
            .with_tag("checksum")
    }
}

/// Creates an [`Isbn10`] validator.
#[must_use]
pub const fn isbn10() -> Isbn10 {
    Isbn10
}

/// Creates an [`Isbn13`] validator.
#[must_use]
pub const fn isbn13() -> Isbn13 {
    Isbn13
}

/// Creates an [`Isbn`] validator accepting either form.
#[must_use]
pub const fn isbn() -> Isbn {
    Isbn
}
