//! Validator introspection metadata.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// COMPLEXITY
// ============================================================================

/// Rough computational cost of running a validator once.
///
/// Used by callers that cache or reorder checks: constant-time checks run
/// first, expensive ones (regex over long input, full checksum passes) last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ValidationComplexity {
    /// Does not depend on input size.
    #[default]
    Constant,
    /// One pass over the input.
    Linear,
    /// Backtracking, multi-pass, or otherwise costly.
    Expensive,
}

impl fmt::Display for ValidationComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Constant => "constant",
            Self::Linear => "linear",
            Self::Expensive => "expensive",
        };
        f.write_str(s)
    }
}

// ============================================================================
// METADATA
// ============================================================================

/// Descriptive metadata attached to a validator.
///
/// Validators override [`Validate::metadata`](crate::foundation::Validate::metadata)
/// to report this; the default is an anonymous constant-cost entry.
#[derive(Debug, Clone, Default)]
pub struct ValidatorMetadata {
    /// Short name, e.g. `"CreditCard"`.
    pub name: Cow<'static, str>,
    /// One-line human description.
    pub description: Option<Cow<'static, str>>,
    /// Rough cost classification.
    pub complexity: ValidationComplexity,
    /// Whether results may be cached per input. False for validators that
    /// consult external state such as the current time.
    pub cacheable: bool,
    /// Free-form grouping tags, e.g. `["string", "checksum"]`.
    pub tags: Vec<Cow<'static, str>>,
}

impl ValidatorMetadata {
    /// Creates metadata with a name and complexity; cacheable by default.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, complexity: ValidationComplexity) -> Self {
        Self {
            name: name.into(),
            description: None,
            complexity,
            cacheable: true,
            tags: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a grouping tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Marks the validator as not cacheable.
    #[must_use]
    pub fn not_cacheable(mut self) -> Self {
        self.cacheable = false;
        self
    }
}
