//! Exercises the dynamic layer as a whole: classifying [`Value`]s, lifting
//! typed validators over them, producing [`Report`]s, and building
//! validators from the [`Registry`].

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use validus::combinators::{ForNumber, ForString};
use validus::prelude::*;

fn sample_object() -> Value {
    let mut members = BTreeMap::new();
    members.insert("name".to_string(), Value::from("ada"));
    members.insert("age".to_string(), Value::from(36.0));
    Value::Object(members)
}

#[test]
fn classifier_covers_every_variant() {
    let cases: Vec<(Value, TypeTag)> = vec![
        (Value::Null, TypeTag::Null),
        (Value::Undefined, TypeTag::Undefined),
        (Value::Bool(true), TypeTag::Boolean),
        (Value::from(1.5), TypeTag::Number),
        (Value::from("hi"), TypeTag::String),
        (Value::Array(vec![]), TypeTag::Array),
        (sample_object(), TypeTag::Object),
        (Value::Symbol("iterator".into()), TypeTag::Symbol),
    ];
    for (value, expected) in cases {
        assert_eq!(value.type_tag(), expected);
    }
    // Unknown is a registry-side sentinel, not a classification result.
    assert!(TypeTag::ALL.contains(&TypeTag::Unknown));
}

#[test]
fn report_message_is_present_exactly_when_invalid() {
    let validator = ForString::new(min_length(3));

    let ok = Report::evaluate(&validator, Value::from("hello"));
    assert!(ok.is_valid());
    assert_eq!(ok.message(), None);
    assert_eq!(ok.data_type(), TypeTag::String);

    let short = Report::evaluate(&validator, Value::from("hi"));
    assert!(!short.is_valid());
    assert!(short.message().is_some());
}

#[test]
fn type_mismatch_is_a_soft_failure_with_both_types_named() {
    let validator = ForString::new(email());
    let report = Report::evaluate(&validator, Value::from(42.0));
    assert!(!report.is_valid());
    assert_eq!(report.message(), Some("Expected a `string` but got number"));
    assert_eq!(report.data_type(), TypeTag::Number);
}

#[test]
fn for_number_lifts_numeric_checks() {
    let validator = ForNumber::new(positive().and(integer()));
    assert!(validator.is_valid(&Value::from(3.0)));
    assert!(!validator.is_valid(&Value::from(-3.0)));
    assert!(!validator.is_valid(&Value::from("3")));
}

mod registry {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_type_check_common_tags() {
        let registry = Registry::with_defaults();
        for tag in [TypeTag::String, TypeTag::Number, TypeTag::Boolean, TypeTag::Array] {
            assert!(registry.contains(tag), "{tag} should be seeded");
        }

        let check = registry.make(TypeTag::String).unwrap();
        assert!(check.is_valid(&Value::from("text")));
        assert!(!check.is_valid(&Value::from(1.0)));
    }

    #[test]
    fn unregistered_tag_is_a_hard_error() {
        let registry = Registry::with_defaults();
        let err = registry.make(TypeTag::Symbol).unwrap_err();
        assert!(matches!(err, BuildError::UnknownTypeTag(TypeTag::Symbol)));
        assert!(matches!(
            registry.make(TypeTag::Unknown),
            Err(BuildError::UnknownTypeTag(TypeTag::Unknown))
        ));
    }

    #[test]
    fn registration_replaces_the_default() {
        let mut registry = Registry::with_defaults();
        registry.register(TypeTag::String, || {
            Box::new(ForString::new(email()))
        });

        let check = registry.make(TypeTag::String).unwrap();
        assert!(check.is_valid(&Value::from("user@example.com")));
        // A plain string no longer suffices once the factory demands email.
        assert!(!check.is_valid(&Value::from("not an email")));
    }

    #[test]
    fn made_validators_feed_straight_into_reports() {
        let registry = Registry::with_defaults();
        let check = registry.make(TypeTag::Object).unwrap();
        let report = Report::evaluate(&check, sample_object());
        assert!(report.is_valid());
        assert_eq!(report.data_type(), TypeTag::Object);
    }
}

mod value_predicates {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn emptiness_over_heterogeneous_values() {
        let empty_check = is_empty_value();
        assert!(empty_check.is_valid(&Value::from("")));
        assert!(empty_check.is_valid(&Value::Array(vec![])));
        assert!(empty_check.is_valid(&Value::Null));
        assert!(!empty_check.is_valid(&Value::from("x")));

        assert!(is_not_empty_value().is_valid(&Value::Array(vec![Value::Null])));
    }

    #[test]
    fn has_key_distinguishes_missing_key_from_wrong_type() {
        let check = has_key("name");
        assert!(check.is_valid(&sample_object()));

        let missing = check.validate(&Value::Object(BTreeMap::new())).unwrap_err();
        assert_ne!(missing.code, "type_mismatch");

        let wrong = check.validate(&Value::from(1.0)).unwrap_err();
        assert_eq!(wrong.code, "type_mismatch");
    }

    #[test]
    fn instance_of_matches_class_and_error_values() {
        let check = instance_of("Error");
        assert!(check.is_valid(&Value::Error("boom".into())));
        assert!(!check.is_valid(&Value::from("Error")));
    }
}

#[test]
fn json_round_trip_degrades_exotic_variants() {
    let value = Value::from(serde_json::json!({
        "name": "ada",
        "tags": ["math", "code"],
        "score": 9.5,
        "active": true,
        "extra": null
    }));
    assert_eq!(value.type_tag(), TypeTag::Object);

    let back = value.to_json();
    assert_eq!(back["name"], serde_json::json!("ada"));
    assert_eq!(back["tags"][1], serde_json::json!("code"));

    // Variants with no JSON counterpart degrade instead of failing.
    assert_eq!(Value::Undefined.to_json(), serde_json::Value::Null);
}
