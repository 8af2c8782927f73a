//! Translation failures.

use thiserror::Error;

use crate::ErrorCode;

/// Which translator raised a failure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lower,
    Render,
}

/// The single failure a translation reports.
///
/// Translators stop at the first failure in traversal order and return it
/// unchanged through every enclosing node.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum TranslateError {
    /// A node variant has no rule in the target dialect.
    #[error("{construct} is not valid in L2: {node}")]
    Unsupported {
        construct: &'static str,
        /// The offending node in concrete syntax.
        node: String,
    },

    #[error("`{op}` expects an operand")]
    MissingOperand { op: String },

    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep { phase: Phase, limit: usize },
}

impl TranslateError {
    pub fn unsupported(construct: &'static str, node: impl ToString) -> Self {
        TranslateError::Unsupported {
            construct,
            node: node.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TranslateError::Unsupported { .. } => ErrorCode::E2001,
            TranslateError::MissingOperand { .. } => ErrorCode::E2002,
            TranslateError::NestingTooDeep {
                phase: Phase::Lower,
                ..
            } => ErrorCode::E1001,
            TranslateError::NestingTooDeep {
                phase: Phase::Render,
                ..
            } => ErrorCode::E2003,
        }
    }

    /// `error[E2001]: let expression is not valid in L2: ...`
    pub fn to_diagnostic_string(&self) -> String {
        format!("error[{}]: {self}", self.code())
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
