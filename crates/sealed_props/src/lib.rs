//! Sealed Props - explicit property interception.
//!
//! - [`Observable`]: runs a callback with `(name, old, new)` after each change
//! - [`Vetoable`]: asks a callback with `(name, old, new)` before each change
//!   and keeps the old value when it says no
//! - [`Memo`]: computes its value on first access and caches it forever,
//!   safe to share between threads
//!
//! None of these hook into field access implicitly; every interception point
//! is a method call.

mod memo;
mod observable;
mod vetoable;

pub use memo::Memo;
pub use observable::Observable;
pub use vetoable::Vetoable;
