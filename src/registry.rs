//! Type-tag-keyed validator registry.
//!
//! The registry maps [`TypeTag`]s to factories producing boxed dynamic
//! validators. [`Registry::with_defaults`] seeds a shape check for each of
//! the constructible tags; [`Registry::register`] swaps in richer validators
//! (a string tag backed by an email check, say). Asking for a tag with no
//! factory is the hard-error channel: [`Registry::make`] returns
//! [`BuildError::UnknownTypeTag`] rather than a validator that rejects
//! everything.

use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::{BuildError, Validate};
use crate::validators::IsType;
use crate::value::{TypeTag, Value};

/// A dynamic validator produced by the registry.
pub type BoxedValidator = Box<dyn Validate<Input = Value> + Send + Sync>;

impl std::fmt::Debug for dyn Validate<Input = Value> + Send + Sync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedValidator").field("name", &self.name()).finish()
    }
}

type Factory = Arc<dyn Fn() -> BoxedValidator + Send + Sync>;

/// Maps type tags to validator factories.
///
/// # Examples
///
/// ```rust,ignore
/// use validus::registry::Registry;
/// use validus::value::{TypeTag, Value};
///
/// let registry = Registry::with_defaults();
/// let v = registry.make(TypeTag::String)?;
/// assert!(v.is_valid(&Value::from("hello")));
/// assert!(!v.is_valid(&Value::Number(1.0)));
///
/// assert!(registry.make(TypeTag::Unknown).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    factories: HashMap<TypeTag, Factory>,
}

impl Registry {
    /// An empty registry with no factories at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with a shape check per constructible tag.
    ///
    /// Seeded tags: string, number, boolean, array, object, function, class,
    /// and date. The remaining tags (symbol, regexp, promise, map, set,
    /// error, null, undefined, unknown) stay unregistered until the caller
    /// provides a factory.
    #[must_use]
    pub fn with_defaults() -> Self {
        const DEFAULT_TAGS: [TypeTag; 8] = [
            TypeTag::String,
            TypeTag::Number,
            TypeTag::Boolean,
            TypeTag::Array,
            TypeTag::Object,
            TypeTag::Function,
            TypeTag::Class,
            TypeTag::Date,
        ];

        let mut registry = Self::new();
        for tag in DEFAULT_TAGS {
            registry.register(tag, move || Box::new(IsType::new(tag)));
        }
        registry
    }

    /// Registers (or replaces) the factory for a tag.
    pub fn register<F>(&mut self, tag: TypeTag, factory: F)
    where
        F: Fn() -> BoxedValidator + Send + Sync + 'static,
    {
        self.factories.insert(tag, Arc::new(factory));
    }

    /// Removes the factory for a tag, returning whether one existed.
    pub fn unregister(&mut self, tag: TypeTag) -> bool {
        self.factories.remove(&tag).is_some()
    }

    /// Builds a validator for the tag.
    ///
    /// # Errors
    ///
    /// [`BuildError::UnknownTypeTag`] when no factory is registered.
    pub fn make(&self, tag: TypeTag) -> Result<BoxedValidator, BuildError> {
        self.factories
            .get(&tag)
            .map(|factory| factory())
            .ok_or(BuildError::UnknownTypeTag(tag))
    }

    /// True when a factory exists for the tag.
    #[must_use]
    pub fn contains(&self, tag: TypeTag) -> bool {
        self.factories.contains_key(&tag)
    }

    /// The registered tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<TypeTag> {
        let mut tags: Vec<TypeTag> = self.factories.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// True when no factories are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("tags", &self.tags()).finish()
    }
}
