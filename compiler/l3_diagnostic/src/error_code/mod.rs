//! Error codes for translator diagnostics.
//!
//! Each code is a stable identifier (e.g. `E2001`) whose first digit names the
//! translator that raised it.

use std::fmt;

/// Error codes for all translator diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Class-to-closure lowering (L31 → L3)
/// - E2xxx: Text rendering (L2 → Python-like source)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lowering Errors (E1xxx)
    /// Expression nesting exceeds the configured limit during lowering
    E1001,

    // Rendering Errors (E2xxx)
    /// Construct has no rendering in the target dialect
    E2001,
    /// Primitive application is missing its operand
    E2002,
    /// Expression nesting exceeds the configured limit during rendering
    E2003,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }

    /// One-line summary, suitable for `--explain` style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "expression nested too deeply to lower",
            ErrorCode::E2001 => "construct is not valid in L2",
            ErrorCode::E2002 => "primitive application is missing its operand",
            ErrorCode::E2003 => "expression nested too deeply to render",
        }
    }

    /// Check if this is a lowering error (E1xxx range).
    pub fn is_lowering_error(&self) -> bool {
        matches!(self, ErrorCode::E1001)
    }

    /// Check if this is a rendering error (E2xxx range).
    pub fn is_render_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
