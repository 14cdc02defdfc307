//! Credit card number validation (Luhn checksum).

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};

/// Runs the Luhn checksum over a digit string.
///
/// Walking right to left, every second digit is doubled and, when the double
/// exceeds 9, reduced by 9. The number passes when the total is a multiple
/// of ten. Any single-digit mutation changes the total, which is what makes
/// the check useful against typos.
#[must_use]
pub fn luhn_checksum_passes(digits: &str) -> bool {
    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        let d = if i % 2 == 1 {
            let doubled = d * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            d
        };
        sum += d;
    }
    sum % 10 == 0
}

/// Validates credit card numbers.
///
/// Spaces and hyphens are stripped first, so `"4539 1488 0343 6467"` and
/// `"4539-1488-0343-6467"` validate the same as the bare digit string. After
/// normalization the input must be 13-19 digits and pass the Luhn check.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::validators::credit_card;
///
/// let v = credit_card();
/// assert!(v.is_valid("4539 1488 0343 6467"));
/// assert!(!v.is_valid("4539 1488 0343 6468"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreditCard;

impl CreditCard {
    const MIN_DIGITS: usize = 13;
    const MAX_DIGITS: usize = 19;
}

impl Validate for CreditCard {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let digits: String = input
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(
                "credit_card_digits",
                "Card number must contain only digits, spaces, and hyphens",
            ));
        }

        let len = digits.len();
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&len) {
            return Err(ValidationError::new(
                "credit_card_length",
                format!(
                    "Card number must be {} to {} digits",
                    Self::MIN_DIGITS,
                    Self::MAX_DIGITS
                ),
            )
            .with_param("actual", len.to_string()));
        }

        if luhn_checksum_passes(&digits) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "luhn_checksum",
                "Card number failed the Luhn check",
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("CreditCard", ValidationComplexity::Linear)
            .with_description("Luhn checksum over 13-19 digits")
            .with_tag("string")
            .with_tag("checksum")
    }
}

/// Creates a [`CreditCard`] validator.
#[must_use]
pub const fn credit_card() -> CreditCard {
    CreditCard
}
