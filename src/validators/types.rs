//! Type and shape predicates over dynamic [`Value`]s.

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata,
};
use crate::value::{TypeTag, Value};

/// Requires the value to classify as one specific type.
///
/// This is what the registry hands out by default: `IsType::new(TypeTag::String)`
/// accepts `Value::String` and rejects everything else with a `type_mismatch`
/// whose message names both the expected and actual tag.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::validators::is_type;
/// use validus::value::{TypeTag, Value};
///
/// let v = is_type(TypeTag::Number);
/// assert!(v.is_valid(&Value::Number(1.0)));
/// assert_eq!(
///     v.message_for(&Value::from("1")),
///     Some("Expected a `number` but got string".into()),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsType {
    pub expected: TypeTag,
}

impl IsType {
    /// Creates a predicate for one tag.
    #[must_use]
    pub const fn new(expected: TypeTag) -> Self {
        Self { expected }
    }
}

impl Validate for IsType {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let actual = input.type_tag();
        if actual == self.expected {
            Ok(())
        } else {
            Err(ValidationError::type_mismatch(self.expected, actual))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("IsType", ValidationComplexity::Constant)
            .with_description(format!("Value must classify as {}", self.expected))
            .with_tag("type")
    }
}

/// Creates an [`IsType`] predicate.
#[must_use]
pub const fn is_type(expected: TypeTag) -> IsType {
    IsType::new(expected)
}

/// Requires the value to be a class with the given name.
///
/// Membership is by name: `instance_of("Error")` also accepts error values,
/// mirroring host environments where errors are class instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceOf {
    pub class_name: String,
}

impl InstanceOf {
    /// Creates a predicate for one class name.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }
}

impl Validate for InstanceOf {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let matches = match input {
            Value::Class { name, .. } => *name == self.class_name,
            Value::Error(_) => self.class_name == "Error",
            _ => false,
        };
        if matches {
            Ok(())
        } else {
            Err(ValidationError::new(
                "instance_of",
                format!("Expected an instance of `{}`", self.class_name),
            )
            .with_param("class", self.class_name.clone())
            .with_param("actual", input.type_tag().to_string()))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::new("InstanceOf", ValidationComplexity::Constant).with_tag("type")
    }
}

/// Creates an [`InstanceOf`] predicate.
#[must_use]
pub fn instance_of(class_name: impl Into<String>) -> InstanceOf {
    InstanceOf::new(class_name)
}

/// Requires an empty value: nullish, or an empty string/array/object/map/set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsEmpty;

impl Validate for IsEmpty {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if input.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new("is_empty", "Value must be empty")
                .with_param("actual", input.type_tag().to_string()))
        }
    }
}

/// Requires a non-empty value; the inverse of [`IsEmpty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsNotEmpty;

impl Validate for IsNotEmpty {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if input.is_empty() {
            Err(ValidationError::new(
                "is_not_empty",
                "Value must not be empty",
            ))
        } else {
            Ok(())
        }
    }
}

/// Requires an object carrying the given key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HasKey {
    pub key: String,
}

impl HasKey {
    /// Creates a predicate for one key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Validate for HasKey {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input {
            Value::Object(fields) if fields.contains_key(&self.key) => Ok(()),
            Value::Object(_) => Err(ValidationError::new(
                "has_key",
                format!("Object must have key `{}`", self.key),
            )
            .with_param("key", self.key.clone())),
            other => Err(ValidationError::type_mismatch(
                TypeTag::Object,
                other.type_tag(),
            )),
        }
    }
}

/// Creates an [`IsEmpty`] predicate.
#[must_use]
pub const fn is_empty_value() -> IsEmpty {
    IsEmpty
}

/// Creates an [`IsNotEmpty`] predicate.
#[must_use]
pub const fn is_not_empty_value() -> IsNotEmpty {
    IsNotEmpty
}

/// Creates a [`HasKey`] predicate.
#[must_use]
pub fn has_key(key: impl Into<String>) -> HasKey {
    HasKey::new(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn is_type_accepts_matching_tag() {
        assert!(is_type(TypeTag::String).validate(&Value::from("x")).is_ok());
        assert!(is_type(TypeTag::Null).validate(&Value::Null).is_ok());
        assert!(is_type(TypeTag::Promise).validate(&Value::Promise).is_ok());
    }

    #[test]
    fn is_type_mismatch_names_both_tags() {
        let err = is_type(TypeTag::String)
            .validate(&Value::Number(1.0))
            .unwrap_err();
        assert_eq!(err.message, "Expected a `string` but got number");
    }

    #[test]
    fn null_and_undefined_are_distinct_tags() {
        assert!(is_type(TypeTag::Null).validate(&Value::Undefined).is_err());
        assert!(is_type(TypeTag::Undefined).validate(&Value::Null).is_err());
    }

    #[test]
    fn instance_of_matches_by_name() {
        let user = Value::Class {
            name: "User".into(),
            members: vec!["name".into()],
        };
        assert!(instance_of("User").validate(&user).is_ok());
        assert!(instance_of("Admin").validate(&user).is_err());
    }

    #[test]
    fn errors_are_error_instances() {
        let err_value = Value::Error("boom".into());
        assert!(instance_of("Error").validate(&err_value).is_ok());
        assert!(instance_of("User").validate(&err_value).is_err());
    }

    #[test]
    fn emptiness_predicates() {
        assert!(is_empty_value().validate(&Value::Null).is_ok());
        assert!(is_empty_value().validate(&Value::from("")).is_ok());
        assert!(is_empty_value().validate(&Value::from("x")).is_err());

        assert!(is_not_empty_value().validate(&Value::from("x")).is_ok());
        assert!(is_not_empty_value().validate(&Value::Array(vec![])).is_err());
    }

    #[test]
    fn has_key_requires_an_object() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), Value::from("ada"));
        let obj = Value::Object(fields);

        assert!(has_key("name").validate(&obj).is_ok());
        assert_eq!(has_key("age").validate(&obj).unwrap_err().code, "has_key");
        assert_eq!(
            has_key("name").validate(&Value::Null).unwrap_err().code,
            "type_mismatch"
        );
    }
}
