//! Sealed IR - shared vocabulary for tagged unions.
//!
//! This crate provides:
//! - [`Name`]: cheaply clonable identifier for unions, variants and fields
//! - [`UnionId`] / [`VariantId`]: dense indices handed out by the registry
//! - [`FieldType`]: the declared type of a variant field
//! - [`SealedError`] / [`ErrorCode`]: the error taxonomy shared by every crate
//!
//! Nothing here knows about runtime values; see `sealed_value`.

mod error;
mod error_code;
mod field_type;
mod ids;
mod name;

pub use error::{InvalidVariantReason, SealedError, SealedResult};
pub use error_code::ErrorCode;
pub use field_type::FieldType;
pub use ids::{UnionId, VariantId};
pub use name::Name;
