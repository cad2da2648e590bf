//! Error taxonomy for union definition, construction, update and matching.
//!
//! Every failure surfaces immediately to the caller as a [`SealedError`];
//! nothing here retries or recovers. Each kind maps to a stable
//! [`ErrorCode`] for programmatic matching.

use std::fmt;

use crate::{ErrorCode, FieldType, Name};

/// Result alias used across the workspace.
pub type SealedResult<T> = Result<T, SealedError>;

/// Error raised by the union layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SealedError {
    /// Malformed definition, or a value that violates its declared shape.
    ///
    /// `scope` is the union or variant the problem was found in.
    #[error("invalid variant in `{scope}`: {reason}")]
    InvalidVariant {
        scope: Name,
        reason: InvalidVariantReason,
    },

    /// A copy/update or named construction referenced a field the variant
    /// does not declare.
    #[error("no field `{field}` on variant `{variant}`")]
    UnknownField { variant: Name, field: Name },

    /// No arm covers the runtime tag and no fallback was supplied.
    #[error("non-exhaustive match on `{union}`: {} not covered", join_names(.missing))]
    NonExhaustiveMatch { union: Name, missing: Vec<Name> },

    /// The value's variant does not belong to the union being matched.
    #[error("`{variant}` is not a member of `{union}`")]
    NotAMember { union: Name, variant: Name },
}

impl SealedError {
    /// Stable code for this error kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            SealedError::InvalidVariant { .. } => ErrorCode::E1001,
            SealedError::UnknownField { .. } => ErrorCode::E2001,
            SealedError::NonExhaustiveMatch { .. } => ErrorCode::E3001,
            SealedError::NotAMember { .. } => ErrorCode::E3002,
        }
    }

    /// Shorthand for building an `InvalidVariant` error.
    pub fn invalid(scope: impl Into<Name>, reason: InvalidVariantReason) -> Self {
        SealedError::InvalidVariant {
            scope: scope.into(),
            reason,
        }
    }

    /// Shorthand for building an `UnknownField` error.
    pub fn unknown_field(variant: impl Into<Name>, field: impl Into<Name>) -> Self {
        SealedError::UnknownField {
            variant: variant.into(),
            field: field.into(),
        }
    }
}

/// Why a definition or a stored field value was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidVariantReason {
    /// A union with this name already exists.
    DuplicateUnion { name: Name },
    /// A variant with this name already exists.
    DuplicateVariant { name: Name },
    /// A variant declares the same field twice.
    DuplicateField { field: Name },
    /// The same tag is listed twice in one union.
    DuplicateTag { tag: Name },
    /// A union was declared but never given any members.
    EmptyUnion,
    /// A union was declared but `finish` was never called on its builder.
    UndefinedUnion { name: Name },
    /// A union contains itself through its sub-unions.
    CyclicUnion { path: Vec<Name> },
    /// A match arm names a tag that is neither a leaf nor a sub-union.
    UnknownTag { tag: Name },
    /// Positional construction with the wrong number of fields.
    ArityMismatch { expected: usize, got: usize },
    /// Named construction left a field without a value or default.
    MissingField { field: Name },
    /// A field value does not satisfy the declared type.
    FieldTypeMismatch {
        field: Name,
        expected: FieldType,
        got: String,
    },
}

impl fmt::Display for InvalidVariantReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateUnion { name } => write!(f, "union `{name}` is defined twice"),
            Self::DuplicateVariant { name } => write!(f, "variant `{name}` is defined twice"),
            Self::DuplicateField { field } => write!(f, "field `{field}` is declared twice"),
            Self::DuplicateTag { tag } => write!(f, "tag `{tag}` is listed twice"),
            Self::EmptyUnion => write!(f, "union has no members"),
            Self::UndefinedUnion { name } => {
                write!(f, "union `{name}` was declared but never defined")
            }
            Self::CyclicUnion { path } => {
                write!(f, "union contains itself: {}", join_path(path))
            }
            Self::UnknownTag { tag } => write!(f, "unknown tag `{tag}`"),
            Self::ArityMismatch { expected, got } => {
                let field_word = if *expected == 1 { "field" } else { "fields" };
                write!(f, "expected {expected} {field_word}, got {got}")
            }
            Self::MissingField { field } => write!(f, "missing value for field `{field}`"),
            Self::FieldTypeMismatch {
                field,
                expected,
                got,
            } => write!(f, "field `{field}` expects {expected}, got {got}"),
        }
    }
}

fn join_names(names: &[Name]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("`{n}`")).collect();
    quoted.join(", ")
}

fn join_path(path: &[Name]) -> String {
    let parts: Vec<&str> = path.iter().map(Name::as_str).collect();
    parts.join(" -> ")
}
