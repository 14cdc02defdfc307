//! Validator combinators.
//!
//! Combinators wrap validators to build richer ones without new code:
//! logical composition ([`And`], [`Or`], [`Not`]), conditional and optional
//! wrappers ([`When`], [`Optional`]), message overrides ([`WithMessage`]),
//! and the dynamic adapters ([`ForString`], [`ForNumber`], [`ForBool`]) that
//! lift statically-typed validators over [`Value`](crate::value::Value).
//!
//! All composition is by value and monomorphized; a combinator chain costs
//! the same as writing the checks inline.

pub mod and;
pub mod dynamic;
pub mod message;
pub mod not;
pub mod optional;
pub mod or;
pub mod when;

pub use and::{And, AndAll, and, and_all};
pub use dynamic::{ForBool, ForNumber, ForString};
pub use message::WithMessage;
pub use not::{Not, not};
pub use optional::Optional;
pub use or::{Or, OrAny, or, or_any};
pub use when::When;
