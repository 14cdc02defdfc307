//! Structured validation outcome.
//!
//! [`Report`] bundles the verdict, the classified type of the value, and the
//! failure message (if any) into one record, so callers that want more than
//! a boolean get everything in a single pass.

use crate::foundation::Validate;
use crate::value::{TypeTag, Value};

/// The outcome of running one validator against one dynamic value.
///
/// Invariant: `message` is `Some` exactly when `is_valid` is false.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::foundation::Report;
/// use validus::combinators::ForString;
/// use validus::validators::credit_card;
/// use validus::value::Value;
///
/// let report = Report::evaluate(&ForString::new(credit_card()), Value::from(42.0));
/// assert!(!report.is_valid());
/// assert_eq!(report.message(), Some("Expected a `string` but got number"));
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    is_valid: bool,
    value: Value,
    message: Option<String>,
    data_type: TypeTag,
}

impl Report {
    /// Runs `validator` on `value` and records the outcome.
    ///
    /// The value is classified first, so `data_type` reflects the input even
    /// when the validator rejects it for having the wrong type.
    pub fn evaluate<V>(validator: &V, value: Value) -> Self
    where
        V: Validate<Input = Value> + ?Sized,
    {
        let data_type = value.type_tag();
        let message = validator
            .validate(&value)
            .err()
            .map(|e| e.message.into_owned());
        Self {
            is_valid: message.is_none(),
            value,
            message,
            data_type,
        }
    }

    /// The verdict.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The value that was checked.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the report, returning the checked value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// The failure message, `None` when valid.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The classified type of the checked value.
    #[must_use]
    pub fn data_type(&self) -> TypeTag {
        self.data_type
    }

    /// Serializes the report for transport or logging.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "is_valid": self.is_valid,
            "value": self.value.to_json(),
            "message": self.message,
            "data_type": self.data_type.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    struct RejectEverything;

    impl Validate for RejectEverything {
        type Input = Value;

        fn validate(&self, _input: &Value) -> Result<(), ValidationError> {
            Err(ValidationError::new("nope", "rejected"))
        }
    }

    struct AcceptEverything;

    impl Validate for AcceptEverything {
        type Input = Value;

        fn validate(&self, _input: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn valid_report_has_no_message() {
        let report = Report::evaluate(&AcceptEverything, Value::from("hello"));
        assert!(report.is_valid());
        assert_eq!(report.message(), None);
        assert_eq!(report.data_type(), TypeTag::String);
    }

    #[test]
    fn invalid_report_carries_message() {
        let report = Report::evaluate(&RejectEverything, Value::from(3.5));
        assert!(!report.is_valid());
        assert_eq!(report.message(), Some("rejected"));
        assert_eq!(report.data_type(), TypeTag::Number);
    }

    #[test]
    fn classifies_before_validating() {
        let report = Report::evaluate(&RejectEverything, Value::Null);
        assert_eq!(report.data_type(), TypeTag::Null);
    }

    #[test]
    fn json_shape() {
        let report = Report::evaluate(&AcceptEverything, Value::Bool(true));
        let json = report.to_json();
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["data_type"], "boolean");
        assert_eq!(json["message"], serde_json::Value::Null);
    }
}
