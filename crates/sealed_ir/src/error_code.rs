use std::fmt;

/// Error codes for union diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Definition and construction errors
/// - E2xxx: Field access and update errors
/// - E3xxx: Match errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    // Definition (E1xxx)
    /// Invalid variant or union definition, or ill-typed field value
    E1001,

    // Fields (E2xxx)
    /// Unknown field in copy/update or named construction
    E2001,

    // Match (E3xxx)
    /// Non-exhaustive match
    E3001,
    /// Value is not a member of the matched union
    E3002,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
        }
    }

    /// One-line summary of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "invalid variant definition or field value",
            ErrorCode::E2001 => "unknown field",
            ErrorCode::E3001 => "non-exhaustive match",
            ErrorCode::E3002 => "value is not a member of the union",
        }
    }

    /// Check if this code is raised while matching.
    pub fn is_match_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
