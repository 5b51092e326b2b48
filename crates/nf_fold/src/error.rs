use std::fmt;

use crate::SequenceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldError {
    Sequence(SequenceError),
    /// A score table cell was read before it was computed.
    Unresolved { i: usize, j: usize },
    /// No decomposition of interval (i, j) reproduces its score.
    Inconsistent { i: usize, j: usize },
    /// Score table and sequence disagree on the length.
    LengthMismatch { sequence: usize, table: usize },
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldError::Sequence(e) => write!(f, "Invalid sequence: {}", e),
            FoldError::Unresolved { i, j } => {
                write!(f, "Score table entry ({}, {}) is unresolved; fill the table before traceback", i, j)
            }
            FoldError::Inconsistent { i, j } => {
                write!(f, "Score table entry ({}, {}) has no matching decomposition", i, j)
            }
            FoldError::LengthMismatch { sequence, table } => {
                write!(f, "Sequence length ({}) and score table size ({}) do not match", sequence, table)
            }
        }
    }
}

impl std::error::Error for FoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FoldError::Sequence(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SequenceError> for FoldError {
    fn from(e: SequenceError) -> Self {
        FoldError::Sequence(e)
    }
}
