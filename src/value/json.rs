//! JSON interop for the dynamic value model.
//!
//! `serde_json::Value` is the common wire shape for loosely-typed data;
//! conversions here let callers feed decoded JSON straight into the registry
//! and get serializable reports back. JSON is strictly smaller than [`Value`]
//! (no dates, symbols, regexps, and so on), so the reverse direction encodes
//! the extra variants as strings or tagged nulls rather than failing.

use std::collections::BTreeMap;

use chrono::SecondsFormat;

use super::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            // Integers beyond 2^53 lose precision here, same as any f64 model.
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, v.into()))
                    .collect::<BTreeMap<_, _>>(),
            ),
        }
    }
}

impl Value {
    /// Encodes this value as JSON.
    ///
    /// Variants without a JSON counterpart degrade deterministically: dates
    /// become RFC 3339 strings, symbols/regexps/errors become their source
    /// strings, maps become arrays of `[key, value]` pairs, sets become
    /// arrays, and `Undefined`/`Promise` become null.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        match self {
            Self::Null | Self::Undefined | Self::Promise => serde_json::Value::Null,
            Self::Bool(b) => json!(b),
            Self::Number(n) if n.is_finite() => json!(n),
            // NaN and infinities have no JSON encoding.
            Self::Number(_) => serde_json::Value::Null,
            Self::String(s) | Self::Symbol(s) | Self::Regexp(s) | Self::Error(s) => json!(s),
            Self::Array(items) | Self::Set(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Self::Object(fields) => serde_json::Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Self::Function { name } => json!({ "function": name }),
            Self::Class { name, members } => json!({ "class": name, "members": members }),
            Self::Date(dt) => json!(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Map(entries) => serde_json::Value::Array(
                entries
                    .iter()
                    .map(|(k, v)| serde_json::Value::Array(vec![k.to_json(), v.to_json()]))
                    .collect(),
            ),
        }
    }
}
