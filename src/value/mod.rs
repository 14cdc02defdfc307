//! Dynamic value model and type classification.
//!
//! Validators in this crate are statically typed (`str`, `f64`), but the
//! registry and the [`Report`](crate::foundation::Report) record operate on
//! loosely-typed data. [`Value`] models that data; [`TypeTag`] is the closed
//! set of classifications, and [`Value::type_tag`] is the total classifier:
//! every value maps to exactly one tag, nothing panics.

pub mod json;

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// TYPE TAG
// ============================================================================

/// The closed set of dynamic type classifications.
///
/// `Display` renders the lowercase name used in error messages and reports,
/// e.g. `TypeTag::Regexp` renders as `regexp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Null,
    Undefined,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
    Class,
    Date,
    Symbol,
    Regexp,
    Promise,
    Map,
    Set,
    Error,
    /// Reserved for foreign values no interop layer could model.
    /// [`Value::type_tag`] never produces it; the registry rejects it.
    Unknown,
}

impl TypeTag {
    /// Every tag, in classification precedence order.
    pub const ALL: [TypeTag; 17] = [
        TypeTag::Null,
        TypeTag::Undefined,
        TypeTag::String,
        TypeTag::Number,
        TypeTag::Boolean,
        TypeTag::Array,
        TypeTag::Function,
        TypeTag::Class,
        TypeTag::Date,
        TypeTag::Symbol,
        TypeTag::Regexp,
        TypeTag::Promise,
        TypeTag::Map,
        TypeTag::Set,
        TypeTag::Error,
        TypeTag::Object,
        TypeTag::Unknown,
    ];

    /// The lowercase name, as rendered by `Display`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
            Self::Class => "class",
            Self::Date => "date",
            Self::Symbol => "symbol",
            Self::Regexp => "regexp",
            Self::Promise => "promise",
            Self::Map => "map",
            Self::Set => "set",
            Self::Error => "error",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a lowercase tag name. Case-insensitive.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|tag| tag.as_str() == lower)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically-typed value.
///
/// Numbers are `f64` throughout; integrality is a validation concern, not a
/// representation concern. Object keys are ordered (`BTreeMap`) so reports
/// and serialized output are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    /// A named callable. Only the name is modeled.
    Function { name: String },
    /// A named class with its member names.
    Class { name: String, members: Vec<String> },
    Date(DateTime<Utc>),
    Symbol(String),
    /// A regular expression source string (not compiled).
    Regexp(String),
    Promise,
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    /// An error value carrying its message.
    Error(String),
}

impl Value {
    /// Classifies this value. Total: every value maps to exactly one tag.
    ///
    /// Precedence follows the variant order: null and undefined first, then
    /// primitives, then containers, with `object` as the structural catch-all
    /// for keyed data that is not one of the more specific shapes.
    #[must_use]
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Self::Null => TypeTag::Null,
            Self::Undefined => TypeTag::Undefined,
            Self::Bool(_) => TypeTag::Boolean,
            Self::Number(_) => TypeTag::Number,
            Self::String(_) => TypeTag::String,
            Self::Array(_) => TypeTag::Array,
            Self::Object(_) => TypeTag::Object,
            Self::Function { .. } => TypeTag::Function,
            Self::Class { .. } => TypeTag::Class,
            Self::Date(_) => TypeTag::Date,
            Self::Symbol(_) => TypeTag::Symbol,
            Self::Regexp(_) => TypeTag::Regexp,
            Self::Promise => TypeTag::Promise,
            Self::Map(_) => TypeTag::Map,
            Self::Set(_) => TypeTag::Set,
            Self::Error(_) => TypeTag::Error,
        }
    }

    /// Borrows the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric payload, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// True for `Null` and `Undefined`.
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Emptiness for container-like and string values.
    ///
    /// Nullish values are empty; strings are empty when blank after
    /// trimming; arrays, objects, maps, and sets are empty when they hold
    /// nothing. Every other value is non-empty, so `0` and `false` are not
    /// empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null | Self::Undefined => true,
            // Whitespace-only strings count as empty.
            Self::String(s) => s.trim().is_empty(),
            Self::Array(items) => items.is_empty(),
            Self::Object(fields) => fields.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Set(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        Self::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Date(dt)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_total() {
        let samples: Vec<(Value, TypeTag)> = vec![
            (Value::Null, TypeTag::Null),
            (Value::Undefined, TypeTag::Undefined),
            (Value::Bool(true), TypeTag::Boolean),
            (Value::Number(1.5), TypeTag::Number),
            (Value::from("hi"), TypeTag::String),
            (Value::Array(vec![]), TypeTag::Array),
            (Value::Object(BTreeMap::new()), TypeTag::Object),
            (Value::Function { name: "f".into() }, TypeTag::Function),
            (
                Value::Class {
                    name: "User".into(),
                    members: vec![],
                },
                TypeTag::Class,
            ),
            (Value::Date(Utc::now()), TypeTag::Date),
            (Value::Symbol("sym".into()), TypeTag::Symbol),
            (Value::Regexp("^a+$".into()), TypeTag::Regexp),
            (Value::Promise, TypeTag::Promise),
            (Value::Map(vec![]), TypeTag::Map),
            (Value::Set(vec![]), TypeTag::Set),
            (Value::Error("boom".into()), TypeTag::Error),
        ];

        for (value, expected) in samples {
            assert_eq!(value.type_tag(), expected, "value: {value:?}");
        }
    }

    #[test]
    fn classifier_never_yields_unknown() {
        assert!(!matches!(Value::Null.type_tag(), TypeTag::Unknown));
        assert!(!matches!(Value::Promise.type_tag(), TypeTag::Unknown));
    }

    #[test]
    fn tag_display_is_lowercase() {
        assert_eq!(TypeTag::String.to_string(), "string");
        assert_eq!(TypeTag::Regexp.to_string(), "regexp");
        assert_eq!(TypeTag::Unknown.to_string(), "unknown");
    }

    #[test]
    fn tag_parse_roundtrip() {
        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::parse(tag.as_str()), Some(tag));
        }
        assert_eq!(TypeTag::parse("STRING"), Some(TypeTag::String));
        assert_eq!(TypeTag::parse("widget"), None);
    }

    #[test]
    fn emptiness() {
        assert!(Value::Null.is_empty());
        assert!(Value::Undefined.is_empty());
        assert!(Value::from("").is_empty());
        assert!(Value::from("  \t ").is_empty());
        assert!(Value::Array(vec![]).is_empty());
        assert!(!Value::from("x").is_empty());
        assert!(!Value::Number(0.0).is_empty());
        assert!(!Value::Bool(false).is_empty());
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from("abc").as_str(), Some("abc"));
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Null.as_str(), None);
        assert!(Value::Undefined.is_nullish());
    }

    #[test]
    fn from_option() {
        assert_eq!(Value::from(Some(1.0_f64)), Value::Number(1.0));
        assert_eq!(Value::from(None::<f64>), Value::Null);
    }
}
