//! Country-keyed phone number validation with an E.164 fallback.
//!
//! Unlike postal codes, phone numbers have a universal interchange format:
//! ITU E.164 (`+` followed by 2 to 15 digits, no leading zero). A country
//! without a national pattern in the table falls back to the E.164 check
//! instead of erroring, which is why [`Phone::for_country`] is infallible
//! while [`PostalCode::for_country`](super::PostalCode::for_country) is not.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};

static E164_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// National formats, dialled domestically. Separators where the national
/// convention commonly writes them.
const COUNTRY_PATTERNS: &[(&str, &str)] = &[
    ("US", r"^(?:\+1[ -]?)?(?:\(\d{3}\)|\d{3})[ -]?\d{3}[ -]?\d{4}$"),
    ("GB", r"^(?:\+44[ -]?|0)\d{2,4}[ -]?\d{3,4}[ -]?\d{3,4}$"),
    ("FR", r"^(?:\+33[ -]?|0)[1-9](?:[ .-]?\d{2}){4}$"),
    ("DE", r"^(?:\+49[ -]?|0)\d{2,5}[ -]?\d{3,8}$"),
    ("JP", r"^(?:\+81[ -]?|0)\d{1,4}[ -]?\d{1,4}[ -]?\d{4}$"),
    ("AU", r"^(?:\+61[ -]?|0)[2-478][ -]?\d{4}[ -]?\d{4}$"),
    ("IN", r"^(?:\+91[ -]?|0)?[6-9]\d{9}$"),
    ("BR", r"^(?:\+55[ -]?)?(?:\(\d{2}\)|\d{2})[ -]?9?\d{4}[ -]?\d{4}$"),
];

static COMPILED: LazyLock<HashMap<&'static str, regex::Regex>> = LazyLock::new(|| {
    COUNTRY_PATTERNS
        .iter()
        .map(|(country, pattern)| (*country, regex::Regex::new(pattern).unwrap()))
        .collect()
});

fn canonical_country(code: &str) -> String {
    let upper = code.to_ascii_uppercase();
    if upper == "UK" { "GB".to_string() } else { upper }
}

/// Validates phone numbers for one country, or E.164 for the rest of the
/// world.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::validators::Phone;
///
/// let us = Phone::for_country("US");
/// assert!(us.is_valid("(555) 019-9123"));
///
/// // Unknown country: E.164 fallback, never an error.
/// let anywhere = Phone::for_country("ZZ");
/// assert!(anywhere.is_valid("+1234567890"));
/// ```
#[derive(Debug, Clone)]
pub struct Phone {
    country: String,
    /// `None` means the E.164 fallback.
    national: Option<&'static regex::Regex>,
}

impl Phone {
    /// Builds a validator for the given country code (case-insensitive,
    /// `UK` aliased to `GB`). Unknown countries get the E.164 fallback.
    #[must_use]
    pub fn for_country(code: &str) -> Self {
        let country = canonical_country(code);
        let national = COMPILED.get(country.as_str());
        Self { country, national }
    }

    /// A validator that accepts only E.164 international form.
    #[must_use]
    pub fn e164() -> Self {
        Self {
            country: "E164".to_string(),
            national: None,
        }
    }

    /// True when this validator fell back to E.164.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.national.is_none()
    }

    /// The canonical country key this validator was built for.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self.national {
            Some(pattern) => {
                // National form or international form are both dialable.
                if pattern.is_match(input) || E164_REGEX.is_match(input) {
                    Ok(())
                } else {
                    Err(ValidationError::new(
                        "phone",
                        format!("Not a valid {} phone number", self.country),
                    )
                    .with_param("country", self.country.clone()))
                }
            }
            None => {
                if E164_REGEX.is_match(input) {
                    Ok(())
                } else {
                    Err(ValidationError::new(
                        "phone_e164",
                        "Not a valid E.164 phone number (+ and 2-15 digits)",
                    ))
                }
            }
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("Phone", ValidationComplexity::Linear)
            .with_description(if self.is_fallback() {
                "E.164 international phone format".to_string()
            } else {
                format!("Phone format for {}", self.country)
            })
            .with_tag("string")
            .with_tag("locale")
    }
}

/// Creates a [`Phone`] validator for one country (E.164 fallback for
/// unknown countries).
#[must_use]
pub fn phone(country: &str) -> Phone {
    Phone::for_country(country)
}
