//! Sealed Match - exhaustive dispatch over union values.
//!
//! A [`MatchTable`] is built once per union from a list of arms, each keyed by
//! a tag (a leaf variant or a nested union) and optionally refined by a
//! guard. Building checks coverage; dispatch is a walk over a precompiled
//! per-leaf decision chain.
//!
//! # Semantics
//!
//! - Every leaf of the union needs at least one arm, or the table needs a
//!   fallback; otherwise `build` fails with `NonExhaustiveMatch`.
//! - Arms covering the runtime tag are tried in declaration order. A guarded
//!   arm whose guard fails falls through to the next covering arm, then to
//!   the fallback.
//! - If every guard fails and there is no fallback, dispatch fails with
//!   `NonExhaustiveMatch` naming the tag.
//! - Values that are not members of the union fail with `NotAMember`.
//!
//! ```text
//! Pending:    Guard(arm 0) ── fail ──> Leaf(arm 1)
//! Processing: Guard(arm 2) ── fail ──> Guard(arm 3) ── fail ──> Fallback
//! Delivered:  Leaf(arm 4)
//! ```

mod builder;
mod exhaustiveness;
mod fields;
pub mod outcome;
mod table;
mod tree;

pub use builder::{MatchBuilder, MatchExt};
pub use fields::Fields;
pub use outcome::OutcomeUnion;
pub use table::MatchTable;

#[cfg(test)]
mod test_fixtures;
