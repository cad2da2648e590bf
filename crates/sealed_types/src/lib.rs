//! Sealed Types - union definition and lookup.
//!
//! # Architecture
//!
//! ```text
//! RegistryBuilder (mutable, startup only)
//!     ├── variant(..)        -> VariantId
//!     ├── declare_union(..)  -> UnionId   (forward reference for recursive unions)
//!     └── union(..).member(..).sub_union(..).finish()
//!             │
//!             ▼ finish(): undefined/cyclic checks, leaf sets, membership
//! UnionRegistry (immutable, Send + Sync)
//!     ├── UnionDef  (members, flattened leaf set)
//!     └── Arc<VariantLayout> per variant (knows every union containing it)
//! ```
//!
//! The member set of a union is closed once the registry is frozen: there is
//! no way to register variants afterwards.

mod builder;
mod leaves;
mod registry;

pub use builder::{RegistryBuilder, UnionBuilder};
pub use registry::{Member, UnionDef, UnionRegistry};
