//! Convenience re-exports for the common case.
//!
//! ```rust,ignore
//! use validus::prelude::*;
//!
//! let username = min_length(3).and(max_length(20)).and(alphanumeric());
//! assert!(username.is_valid("alice42"));
//! ```

pub use crate::foundation::{
    BuildError, Report, Validate, ValidateExt, ValidationComplexity, ValidationError,
    ValidationErrors, ValidatorMetadata,
};

pub use crate::combinators::{
    And, AndAll, ForBool, ForNumber, ForString, Not, Optional, Or, OrAny, When, WithMessage,
    and, and_all, not, or, or_any,
};

pub use crate::registry::{BoxedValidator, Registry};
pub use crate::value::{TypeTag, Value};

pub use crate::validators::{
    After, Alphabetic, Alphanumeric, Base64, Before, Contains, CreditCard, DivisibleBy, Email,
    Empty, EndsWith, Even, ExactLength, HasKey, HexColor, InstanceOf, Integer, IpAny, Ipv4, Ipv6,
    Isbn, Isbn10, Isbn13, IsEmpty, IsNotEmpty, IsType, IsoDate, Jwt, LengthRange, Lowercase,
    MacAddress, Matches, Max, MaxLength, Min, MinLength, Negative, NotBlank, NotEmpty, Numeric,
    Odd, Password, Phone, Positive, PostalCode, Range, Rfc3339Timestamp, StartsWith, Strength,
    Uppercase, Url, Uuid, after, alphabetic, alphanumeric, base64, before, contains, credit_card,
    divisible_by, email, empty, ends_with, even, exact_length, future, has_key, hex_color,
    instance_of, integer, ip_any, ipv4, ipv6, isbn, isbn10, isbn13, iso_date, is_empty_value,
    is_not_empty_value, is_type, jwt, length_range, lowercase, mac_address, matches_pattern, max,
    max_length, min, min_length, multiple_of, negative, not_blank, not_empty, numeric_string, odd,
    password, past, phone, positive, postal_code, range, rfc3339_timestamp, starts_with,
    uppercase, url, uuid, uuid_version,
};

pub use crate::{any_of, compose, validator};
