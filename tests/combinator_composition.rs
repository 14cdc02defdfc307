//! Composition across the crate boundary: fluent combinators, the
//! declarative macros, and the error shapes they produce.

use pretty_assertions::assert_eq;
use validus::combinators::Optional;
use validus::prelude::*;

#[test]
fn and_short_circuits_on_the_first_failure() {
    let username = min_length(3).and(max_length(12)).and(alphanumeric());
    assert!(username.is_valid("alice42"));

    let err = username.validate("a!").unwrap_err();
    // min_length fires first; alphanumeric is never consulted.
    assert_eq!(err.code, "min_length");
}

#[test]
fn and_all_collects_every_failure() {
    let checks = and_all(vec![
        Box::new(min_length(10)) as Box<dyn Validate<Input = str>>,
        Box::new(numeric_string()),
    ]);
    let err = checks.validate("abc").unwrap_err();
    assert_eq!(err.code, "and_all_failed");
    assert_eq!(err.nested.len(), 2);
}

#[test]
fn or_nests_both_branch_errors() {
    let either = email().or(ipv4());
    assert!(either.is_valid("user@example.com"));
    assert!(either.is_valid("10.0.0.1"));

    let err = either.validate("neither").unwrap_err();
    assert_eq!(err.code, "or_failed");
    assert_eq!(err.nested.len(), 2);
}

#[test]
fn or_any_over_a_dynamic_list() {
    let formats = or_any(vec![
        Box::new(uuid()) as Box<dyn Validate<Input = str>>,
        Box::new(mac_address()),
        Box::new(ipv6()),
    ]);
    assert!(formats.is_valid("00:1A:2B:3C:4D:5E"));
    assert!(formats.is_valid("fe80::1"));
    assert_eq!(formats.validate("nope").unwrap_err().code, "or_any_failed");
}

#[test]
fn not_inverts_and_reports_its_own_code() {
    let no_spaces = contains(" ").not();
    assert!(no_spaces.is_valid("single"));
    assert_eq!(no_spaces.validate("two words").unwrap_err().code, "not_failed");
}

#[test]
fn when_only_validates_if_the_condition_holds() {
    // Only non-empty inputs must be an email.
    let check = email().when(|input: &str| !input.is_empty());
    assert!(check.is_valid(""));
    assert!(check.is_valid("user@example.com"));
    assert!(!check.is_valid("not-an-email"));
}

#[test]
fn optional_passes_none_through() {
    let check: Optional<Range> = range(1.0, 10.0).optional();
    assert!(check.is_valid(&None));
    assert!(check.is_valid(&Some(5.0)));
    assert!(!check.is_valid(&Some(42.0)));
}

#[test]
fn with_message_replaces_text_but_keeps_the_code() {
    let check = min_length(8).with_message("Password is too short");
    let err = check.validate("short").unwrap_err();
    assert_eq!(err.code, "min_length");
    assert_eq!(err.message, "Password is too short");
}

// A downstream-defined validator built with the declarative macro, proving
// the macro expands outside the defining crate.
validus::validator! {
    /// All-caps strings only.
    pub Shouting for str;
    rule(input) { !input.is_empty() && !input.chars().any(char::is_lowercase) }
    error(input) { ValidationError::new("shouting", "Must be ALL CAPS") }
    fn shouting();
}

mod macros {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn macro_defined_validator_works_downstream() {
        assert!(shouting().is_valid("HELLO"));
        assert!(shouting().is_valid("HELLO 123"));
        assert!(!shouting().is_valid("Hello"));
        assert_eq!(shouting().validate("x").unwrap_err().code, "shouting");
    }

    #[test]
    fn compose_chains_with_and_semantics() {
        let check = validus::compose!(min_length(2), max_length(5), alphabetic());
        assert!(check.is_valid("abc"));
        assert!(!check.is_valid("toolong"));
        assert!(!check.is_valid("ab3"));
    }

    #[test]
    fn any_of_chains_with_or_semantics() {
        let check = validus::any_of!(isbn10(), isbn13());
        assert!(check.is_valid("0306406152"));
        assert!(check.is_valid("9780306406157"));
        assert!(!check.is_valid("123"));
    }
}
