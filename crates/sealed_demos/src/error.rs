//! Errors surfaced by the demo sections.

use std::io;

use sealed_ir::SealedError;

pub type DemoResult<T> = Result<T, DemoError>;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Sealed(#[from] SealedError),

    /// A domain rule of a demo model was violated.
    #[error("{0}")]
    Rejected(&'static str),
}
