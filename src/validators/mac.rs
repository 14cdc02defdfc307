//! MAC address validation.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// Six colon- or hyphen-separated octet pairs, or the dotted Cisco form of
// three 4-digit groups. Mixed separators within one address are rejected.
static MAC_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^(?:(?:[0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}|(?:[0-9A-Fa-f]{2}-){5}[0-9A-Fa-f]{2}|(?:[0-9A-Fa-f]{4}\.){2}[0-9A-Fa-f]{4})$",
    )
    .unwrap()
});

crate::validator! {
    /// Hardware (MAC-48) address in colon, hyphen, or Cisco dotted form.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use validus::validators::mac_address;
    ///
    /// let v = mac_address();
    /// assert!(v.is_valid("00:1A:2B:3C:4D:5E"));
    /// assert!(v.is_valid("001a.2b3c.4d5e"));
    /// ```
    pub MacAddress { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("MAC address") }
    new() { Self { pattern: MAC_REGEX.clone() } }
    fn mac_address();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn accepts_all_three_notations() {
        assert!(mac_address().validate("00:1A:2B:3C:4D:5E").is_ok());
        assert!(mac_address().validate("00-1a-2b-3c-4d-5e").is_ok());
        assert!(mac_address().validate("001a.2b3c.4d5e").is_ok());
    }

    #[test]
    fn rejects_mixed_separators() {
        assert!(mac_address().validate("00:1A-2B:3C-4D:5E").is_err());
    }

    #[test]
    fn rejects_wrong_lengths_and_hex() {
        assert!(mac_address().validate("00:1A:2B:3C:4D").is_err());
        assert!(mac_address().validate("00:1A:2B:3C:4D:5E:6F").is_err());
        assert!(mac_address().validate("00:1A:2B:3C:4D:5G").is_err());
        assert!(mac_address().validate("").is_err());
    }
}
