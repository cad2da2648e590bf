//! Sealed Value - runtime values for tagged unions.
//!
//! This crate provides:
//! - [`Value`]: field payloads (scalars, strings, lists, optionals, variants)
//! - [`VariantLayout`]: the frozen shape of one variant (fields, types, defaults,
//!   union membership)
//! - [`VariantValue`]: an immutable instance of a variant
//! - [`Overrides`]: named field replacements for [`VariantValue::copy`]
//!
//! # Immutability
//!
//! Heap payloads live behind [`Heap`], whose constructor is private to this
//! crate. A stored field can never be mutated; `copy` builds a new field
//! vector and leaves the original untouched.
//!
//! # Equality
//!
//! `PartialEq`/`Eq`/`Hash` compare structure. Identity is a separate
//! operation: [`VariantValue::same_instance`].

mod conform;
mod heap;
mod layout;
mod overrides;
mod value;
mod variant;

#[cfg(test)]
mod prop_tests;
#[cfg(test)]
mod test_helpers;

pub use conform::{check_field, conforms};
pub use heap::Heap;
pub use layout::{FieldLayout, RegistryToken, VariantLayout};
pub use overrides::Overrides;
pub use value::Value;
pub use variant::VariantValue;
