//! Country-keyed postal code validation.
//!
//! Postal formats are national conventions; there is no universal fallback
//! the way E.164 covers phone numbers. Asking for an unsupported country is
//! therefore a configuration error: [`PostalCode::for_country`] returns
//! [`BuildError::UnsupportedCountry`] instead of guessing.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::foundation::{
    BuildError, Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};

/// ISO 3166-1 alpha-2 code paired with the national postal pattern.
///
/// Patterns are anchored and case-tolerant where the national convention is
/// (UK and Canadian codes are conventionally uppercase but accepted either
/// way here).
const COUNTRY_PATTERNS: &[(&str, &str)] = &[
    ("US", r"^\d{5}(?:-\d{4})?$"),
    ("GB", r"^[A-Za-z]{1,2}\d[A-Za-z\d]? ?\d[A-Za-z]{2}$"),
    ("CA", r"^[A-Za-z]\d[A-Za-z] ?\d[A-Za-z]\d$"),
    ("DE", r"^\d{5}$"),
    ("FR", r"^\d{5}$"),
    ("IT", r"^\d{5}$"),
    ("ES", r"^\d{5}$"),
    ("MX", r"^\d{5}$"),
    ("AU", r"^\d{4}$"),
    ("NL", r"^\d{4} ?[A-Za-z]{2}$"),
    ("JP", r"^\d{3}-?\d{4}$"),
    ("BR", r"^\d{5}-?\d{3}$"),
    ("CN", r"^\d{6}$"),
    ("IN", r"^\d{6}$"),
    ("RU", r"^\d{6}$"),
];

static COMPILED: LazyLock<HashMap<&'static str, regex::Regex>> = LazyLock::new(|| {
    COUNTRY_PATTERNS
        .iter()
        .map(|(country, pattern)| (*country, regex::Regex::new(pattern).unwrap()))
        .collect()
});

/// Maps aliases and normalizes case to the canonical table key.
fn canonical_country(code: &str) -> String {
    let upper = code.to_ascii_uppercase();
    // "UK" is the common name; the ISO code is GB.
    if upper == "UK" { "GB".to_string() } else { upper }
}

/// Validates postal codes for one country.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::validators::PostalCode;
///
/// let us = PostalCode::for_country("US")?;
/// assert!(us.is_valid("90210"));
/// assert!(us.is_valid("90210-1234"));
///
/// assert!(PostalCode::for_country("ZZ").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PostalCode {
    country: String,
    pattern: &'static regex::Regex,
}

impl PostalCode {
    /// Builds a validator for the given country code (case-insensitive,
    /// `UK` accepted as an alias for `GB`).
    ///
    /// # Errors
    ///
    /// [`BuildError::UnsupportedCountry`] when no pattern exists for the
    /// country. This is the hard-error channel: the mistake is in the
    /// configuration, not in any postal code.
    pub fn for_country(code: &str) -> Result<Self, BuildError> {
        let country = canonical_country(code);
        let pattern = COMPILED
            .get(country.as_str())
            .ok_or_else(|| BuildError::UnsupportedCountry(code.to_string()))?;
        Ok(Self { country, pattern })
    }

    /// The canonical country this validator checks.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The countries with a registered pattern, in table order.
    pub fn supported_countries() -> impl Iterator<Item = &'static str> {
        COUNTRY_PATTERNS.iter().map(|(country, _)| *country)
    }
}

impl Validate for PostalCode {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "postal_code",
                format!("Not a valid {} postal code", self.country),
            )
            .with_param("country", self.country.clone()))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("PostalCode", ValidationComplexity::Linear)
            .with_description(format!("Postal code format for {}", self.country))
            .with_tag("string")
            .with_tag("locale")
    }
}

/// Creates a [`PostalCode`] validator for one country.
pub fn postal_code(country: &str) -> Result<PostalCode, BuildError> {
    PostalCode::for_country(country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_zip_and_zip_plus_four() {
        let v = postal_code("US").unwrap();
        assert!(v.validate("90210").is_ok());
        assert!(v.validate("90210-1234").is_ok());
        assert!(v.validate("9021").is_err());
        assert!(v.validate("90210-12").is_err());
        assert!(v.validate("ABCDE").is_err());
    }

    #[test]
    fn uk_alias_and_formats() {
        let v = postal_code("UK").unwrap();
        assert_eq!(v.country(), "GB");
        assert!(v.validate("SW1A 1AA").is_ok());
        assert!(v.validate("M1 1AE").is_ok());
        assert!(v.validate("EC1A1BB").is_ok());
        assert!(v.validate("12345").is_err());
    }

    #[test]
    fn canadian_codes() {
        let v = postal_code("CA").unwrap();
        assert!(v.validate("K1A 0B1").is_ok());
        assert!(v.validate("K1A0B1").is_ok());
        assert!(v.validate("11A 0B1").is_err());
    }

    #[test]
    fn japanese_codes() {
        let v = postal_code("JP").unwrap();
        assert!(v.validate("123-4567").is_ok());
        assert!(v.validate("1234567").is_ok());
        assert!(v.validate("12-34567").is_err());
    }

    #[test]
    fn brazilian_codes() {
        let v = postal_code("BR").unwrap();
        assert!(v.validate("01310-100").is_ok());
        assert!(v.validate("01310100").is_ok());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(postal_code("us").is_ok());
        assert!(postal_code("Gb").is_ok());
    }

    #[test]
    fn unsupported_country_is_a_build_error() {
        let err = postal_code("ZZ").unwrap_err();
        assert_eq!(err, BuildError::UnsupportedCountry("ZZ".to_string()));
    }

    #[test]
    fn every_table_entry_compiles() {
        for country in PostalCode::supported_countries() {
            assert!(postal_code(country).is_ok(), "country: {country}");
        }
    }
}
