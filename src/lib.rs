//! # validus
//!
//! Reusable value validators: a format/checksum engine behind one uniform
//! contract.
//!
//! Every check implements [`Validate`](foundation::Validate), one method
//! returning `Ok(())` or a structured error, and composes through
//! combinators (`and`, `or`, `not`, conditionals, message overrides). On top
//! of the statically-typed validators sits a dynamic layer: a [`Value`](value::Value)
//! model with a total type classifier, adapters lifting `str`/`f64` checks
//! over `Value`, a [`Report`](foundation::Report) record, and a
//! [`Registry`](registry::Registry) producing validators by
//! [`TypeTag`](value::TypeTag).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use validus::prelude::*;
//!
//! // Static: compose string checks.
//! let username = min_length(3).and(max_length(20)).and(alphanumeric());
//! assert!(username.is_valid("alice42"));
//! assert_eq!(username.message_for("a"), Some("Must be at least 3 characters".into()));
//!
//! // Checksums and formats.
//! assert!(credit_card().is_valid("4539 1488 0343 6467"));
//! assert!(isbn13().is_valid("9780306406157"));
//! assert!(Uuid::with_version(4).is_valid("550e8400-e29b-41d4-a716-446655440000"));
//!
//! // Dynamic: registry + report.
//! let registry = Registry::with_defaults();
//! let string_check = registry.make(TypeTag::String)?;
//! let report = Report::evaluate(&string_check, Value::Number(42.0));
//! assert!(!report.is_valid());
//! assert_eq!(report.message(), Some("Expected a `string` but got number"));
//! ```
//!
//! # Failure channels
//!
//! Bad *input* is a soft failure: `validate` returns an error value,
//! `is_valid` returns false, and a type-mismatched dynamic value gets a
//! message naming both types. Bad *configuration* (an unsupported postal
//! country, a regex that does not compile, an unregistered type tag) is a
//! hard failure returned as [`BuildError`](foundation::BuildError) from the
//! constructor, before any input is seen.

#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod registry;
pub mod validators;
pub mod value;

mod macros;

pub mod prelude;

pub use foundation::{
    BuildError, Report, Validate, ValidateExt, ValidationError, ValidationErrors,
};
pub use registry::Registry;
pub use value::{TypeTag, Value};
