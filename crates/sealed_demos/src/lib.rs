//! Sealed Demos - walkthrough of the union, match and property crates.
//!
//! Each section writes plain lines to the given writer so the whole run can
//! be compared against literal text. Sections build their own registries;
//! nothing is shared between them.
//!
//! # Sections
//!
//! 1. [`sealed`]: a flat union, a union of sub-unions with a variant in two
//!    of them, and a native Rust enum for comparison
//! 2. [`guards`]: guarded arms with fall-through and a fallback
//! 3. [`data`]: structural equality, `copy`, defaults, validated
//!    construction, an immutable bank account
//! 4. [`delegation`] and [`properties`]: composition and property cells
//! 5. [`outcome`]: the success/failure union convention

use std::io::Write;
use std::sync::Once;

pub mod data;
pub mod delegation;
mod error;
pub mod guards;
pub mod outcome;
pub mod properties;
pub mod sealed;

pub use error::{DemoError, DemoResult};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=sealed_match=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}

/// Run every section in order.
pub fn run_all(out: &mut dyn Write) -> DemoResult<()> {
    sealed::run(out)?;
    guards::run(out)?;
    data::run(out)?;
    delegation::run(out)?;
    properties::run(out)?;
    outcome::run(out)?;
    Ok(())
}
