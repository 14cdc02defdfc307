//! IP address validators (dotted-quad IPv4, grouped-hex IPv6).
//!
//! Parsing is done directly on the textual form rather than through address
//! types, because the rules being enforced are textual: `"256.0.0.1"` must
//! fail on the octet bound, `"01.2.3.4"` is accepted (leading zeros are
//! tolerated), and `"::"` compression may appear at most once.

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};

/// True for a dotted quad: four decimal octets, each 0-255.
fn is_ipv4(input: &str) -> bool {
    let mut octets = 0;
    for part in input.split('.') {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let Ok(value) = part.parse::<u16>() else {
            return false;
        };
        if value > 255 {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

/// True for one 1-4 digit hex group.
fn is_hex_group(part: &str) -> bool {
    (1..=4).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_hexdigit())
}

/// True for grouped-hex IPv6, with at most one `::` compression and an
/// optional embedded IPv4 tail (`::ffff:192.0.2.1`).
fn is_ipv6(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    // Split once on the compression marker.
    let (head, tail, compressed) = match input.split_once("::") {
        Some((head, tail)) => {
            // A second "::" is illegal.
            if tail.contains("::") {
                return false;
            }
            (head, tail, true)
        }
        None => (input, "", false),
    };

    // A dotted quad may only occupy the final 32 bits of the whole
    // address, so it is legal in the last part of the tail, or of the
    // head when there is no compression. "1.2.3.4::" ends in the
    // compressed zero groups, not the quad, and must fail.
    let count_groups = |s: &str, quad_may_end_here: bool| -> Option<usize> {
        if s.is_empty() {
            return Some(0);
        }
        let parts: Vec<&str> = s.split(':').collect();
        let mut groups = 0;
        for (i, part) in parts.iter().enumerate() {
            let last = i == parts.len() - 1;
            if last && part.contains('.') {
                // Embedded IPv4 occupies the final 32 bits.
                if !quad_may_end_here || !is_ipv4(part) {
                    return None;
                }
                groups += 2;
            } else if is_hex_group(part) {
                groups += 1;
            } else {
                return None;
            }
        }
        Some(groups)
    };

    let Some(head_groups) = count_groups(head, !compressed) else {
        return false;
    };
    let Some(tail_groups) = count_groups(tail, true) else {
        return false;
    };

    if compressed {
        // "::" stands for at least one zero group.
        head_groups + tail_groups < 8
    } else {
        head_groups == 8
    }
}

/// Validates IPv4 addresses in dotted-quad form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4;

impl Validate for Ipv4 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if is_ipv4(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("IPv4 address"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("Ipv4", ValidationComplexity::Linear)
            .with_description("Four decimal octets, each 0-255")
            .with_tag("string")
            .with_tag("network")
    }
}

/// Validates IPv6 addresses in grouped-hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv6;

impl Validate for Ipv6 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if is_ipv6(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("IPv6 address"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("Ipv6", ValidationComplexity::Linear)
            .with_description("Eight hex groups, :: compression, embedded IPv4 tail")
            .with_tag("string")
            .with_tag("network")
    }
}

/// Validates either address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpAny;

impl Validate for IpAny {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if is_ipv4(input) || is_ipv6(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("IP address"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("IpAny", ValidationComplexity::Linear)
            .with_description("IPv4 or IPv6")
            .with_tag("string")
            .with_tag("network")
    }
}

/// Creates an [`Ipv4`] validator.
#[must_use]
pub const fn ipv4() -> Ipv4 {
    Ipv4
}

/// Creates an [`Ipv6`] validator.
#[must_use]
pub const fn ipv6() -> Ipv6 {
    Ipv6
}

/// Creates an [`IpAny`] validator accepting both families.
#[must_use]
pub const fn ip_any() -> IpAny {
    IpAny
}

#[cfg(test)]
mod tests {
    use super::*;

    mod v4 {
        use super::*;

        #[test]
        fn accepts_plain_quads() {
            assert!(ipv4().validate("192.168.0.1").is_ok());
            assert!(ipv4().validate("0.0.0.0").is_ok());
            assert!(ipv4().validate("255.255.255.255").is_ok());
        }

        #[test]
        fn octet_bound_is_255() {
            assert!(ipv4().validate("256.0.0.1").is_err());
            assert!(ipv4().validate("1.2.3.999").is_err());
        }

        #[test]
        fn leading_zeros_are_tolerated() {
            assert!(ipv4().validate("01.2.3.4").is_ok());
            assert!(ipv4().validate("192.168.001.001").is_ok());
        }

        #[test]
        fn wrong_shapes_fail() {
            assert!(ipv4().validate("1.2.3").is_err());
            assert!(ipv4().validate("1.2.3.4.5").is_err());
            assert!(ipv4().validate("1.2.3.").is_err());
            assert!(ipv4().validate("a.b.c.d").is_err());
            assert!(ipv4().validate("1234.0.0.1").is_err());
            assert!(ipv4().validate("").is_err());
        }
    }

    mod v6 {
        use super::*;

        #[test]
        fn accepts_full_form() {
            assert!(ipv6().validate("2001:0db8:85a3:0000:0000:8a2e:0370:7334").is_ok());
            assert!(ipv6().validate("2001:db8:85a3:0:0:8a2e:370:7334").is_ok());
        }

        #[test]
        fn accepts_compression() {
            assert!(ipv6().validate("2001:db8::8a2e:370:7334").is_ok());
            assert!(ipv6().validate("::1").is_ok());
            assert!(ipv6().validate("fe80::").is_ok());
            assert!(ipv6().validate("::").is_ok());
        }

        #[test]
        fn accepts_embedded_ipv4_tail() {
            assert!(ipv6().validate("::ffff:192.0.2.1").is_ok());
            assert!(ipv6().validate("0:0:0:0:0:ffff:192.0.2.1").is_ok());
        }

        #[test]
        fn embedded_ipv4_must_end_the_address() {
            assert!(ipv6().validate("1.2.3.4::").is_err());
            assert!(ipv6().validate("ffff:1.2.3.4::1").is_err());
        }

        #[test]
        fn rejects_double_compression() {
            assert!(ipv6().validate("1::2::3").is_err());
        }

        #[test]
        fn rejects_bad_group_counts() {
            assert!(ipv6().validate("2001:db8:85a3:0:0:8a2e:370:7334:aaaa").is_err());
            assert!(ipv6().validate("2001:db8:85a3:0:0:8a2e:370").is_err());
            // Compression standing for zero groups is not a compression.
            assert!(ipv6().validate("1:2:3:4::5:6:7:8").is_err());
        }

        #[test]
        fn rejects_bad_groups() {
            assert!(ipv6().validate("2001:db8:85a3:0:0:8a2e:370:733g").is_err());
            assert!(ipv6().validate("12345::1").is_err());
            assert!(ipv6().validate("").is_err());
        }
    }

    mod either {
        use super::*;

        #[test]
        fn both_families_accepted() {
            assert!(ip_any().validate("10.0.0.1").is_ok());
            assert!(ip_any().validate("::1").is_ok());
            assert!(ip_any().validate("not an ip").is_err());
        }
    }
}
