//! UUID validation with optional version gating.

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};

/// Parsed shape of a candidate UUID: its version nibble.
///
/// Checks the canonical 8-4-4-4-12 lowercase/uppercase hex layout and the
/// variant nibble (first character of the fourth group, must be 8/9/a/b),
/// then pulls out the version digit (first character of the third group).
/// Returns `None` when the layout or variant is wrong.
fn parse_version(input: &str) -> Option<u8> {
    let bytes = input.as_bytes();
    if bytes.len() != 36 {
        return None;
    }
    for (i, b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if *b != b'-' {
                    return None;
                }
            }
            _ => {
                if !b.is_ascii_hexdigit() {
                    return None;
                }
            }
        }
    }
    if !matches!(bytes[19].to_ascii_lowercase(), b'8' | b'9' | b'a' | b'b') {
        return None;
    }
    // Version nibble sits right after the second hyphen.
    (bytes[14] as char).to_digit(16).map(|d| {
        #[allow(clippy::cast_possible_truncation)]
        let v = d as u8;
        v
    })
}

/// Validates UUIDs in canonical textual form.
///
/// [`Uuid::any`] accepts versions 1, 3, 4, and 5; [`Uuid::with_version`]
/// pins one version, so a v1 string fails a v4 check even though its format
/// is fine. The variant nibble (first hex digit of the fourth group) must be
/// 8, 9, a, or b regardless of version, which is how the nil UUID ends up
/// rejected.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::validators::Uuid;
///
/// let any = Uuid::any();
/// assert!(any.is_valid("550e8400-e29b-41d4-a716-446655440000"));
///
/// let v4 = Uuid::with_version(4);
/// assert!(v4.is_valid("550e8400-e29b-41d4-a716-446655440000"));
/// assert!(!v4.is_valid("550e8400-e29b-11d4-a716-446655440000")); // v1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid {
    version: Option<u8>,
}

impl Uuid {
    /// Accepts any UUID of version 1, 3, 4, or 5.
    #[must_use]
    pub const fn any() -> Self {
        Self { version: None }
    }

    /// Accepts only UUIDs of the given version.
    ///
    /// The version is not restricted to the 1/3/4/5 set that [`Uuid::any`]
    /// accepts: pinning, say, version 7 works and matches version-7
    /// strings, as long as the variant nibble is still 8/9/a/b. Only the
    /// unpinned validator limits itself to the four classic versions.
    #[must_use]
    pub const fn with_version(version: u8) -> Self {
        Self {
            version: Some(version),
        }
    }
}

impl Validate for Uuid {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let Some(version) = parse_version(input) else {
            return Err(ValidationError::invalid_format("UUID"));
        };

        match self.version {
            Some(required) if version != required => Err(ValidationError::new(
                "uuid_version",
                format!("Expected a version {required} UUID but got version {version}"),
            )
            .with_param("expected", required.to_string())
            .with_param("actual", version.to_string())),
            None if !matches!(version, 1 | 3 | 4 | 5) => Err(ValidationError::new(
                "uuid_version",
                format!("Unsupported UUID version {version}"),
            )
            .with_param("actual", version.to_string())),
            _ => Ok(()),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("Uuid", ValidationComplexity::Linear)
            .with_description("Canonical 8-4-4-4-12 form with version gating")
            .with_tag("string")
            .with_tag("identifier")
    }
}

/// Creates a [`Uuid`] validator accepting versions 1, 3, 4, and 5.
#[must_use]
pub const fn uuid() -> Uuid {
    Uuid::any()
}

/// Creates a [`Uuid`] validator pinned to one version.
#[must_use]
pub const fn uuid_version(version: u8) -> Uuid {
    Uuid::with_version(version)
}
