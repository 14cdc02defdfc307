//! Built-in validators.
//!
//! Grouped by concern:
//!
//! - **Strings**: [`length`], [`empty`], [`content`], [`pattern`]
//! - **Numbers**: [`numeric`]
//! - **Checksums and identifiers**: [`credit_card`], [`isbn`], [`uuid`]
//! - **Network**: [`ip`], [`mac`]
//! - **Locale tables**: [`postal_code`], [`phone`]
//! - **Security**: [`password`]
//! - **Temporal**: [`date`]
//! - **Dynamic types**: [`types`]
//!
//! Every validator has an UpperCamelCase struct and a snake_case factory
//! function; `credit_card()` and `CreditCard` are the same thing.

pub mod content;
pub mod credit_card;
pub mod date;
pub mod empty;
pub mod ip;
pub mod isbn;
pub mod length;
pub mod mac;
pub mod numeric;
pub mod password;
pub mod pattern;
pub mod phone;
pub mod postal_code;
pub mod types;
pub mod uuid;

pub use content::{
    Alphabetic, Alphanumeric, Base64, Contains, Email, EndsWith, HexColor, Jwt, Lowercase,
    Numeric, StartsWith, Uppercase, Url, alphabetic, alphanumeric, base64, contains, email,
    ends_with, hex_color, jwt, lowercase, numeric_string, starts_with, uppercase, url,
};
pub use credit_card::{CreditCard, credit_card, luhn_checksum_passes};
pub use date::{After, Before, IsoDate, Rfc3339Timestamp, after, before, future, iso_date, past,
    rfc3339_timestamp};
pub use empty::{Empty, NotBlank, NotEmpty, empty, not_blank, not_empty};
pub use ip::{IpAny, Ipv4, Ipv6, ip_any, ipv4, ipv6};
pub use isbn::{Isbn, Isbn10, Isbn13, isbn, isbn10, isbn13};
pub use length::{
    ExactLength, LengthRange, MaxLength, MinLength, exact_length, length_range, max_length,
    min_length,
};
pub use mac::{MacAddress, mac_address};
pub use numeric::{
    DivisibleBy, Even, Integer, Max, Min, Negative, Odd, Positive, Range, divisible_by, even,
    integer, max, min, multiple_of, negative, odd, positive, range,
};
pub use password::{Password, Strength, password};
pub use pattern::{Matches, matches_pattern};
pub use phone::{Phone, phone};
pub use postal_code::{PostalCode, postal_code};
pub use types::{
    HasKey, InstanceOf, IsEmpty, IsNotEmpty, IsType, has_key, instance_of, is_empty_value,
    is_not_empty_value, is_type,
};
pub use uuid::{Uuid, uuid, uuid_version};
