//! Errors the scanner can run into.

use thiserror::Error;

use crate::ErrorCode;

/// A malformed construct found while scanning.
///
/// None of these stop the scanner. The `Display` text is the message part of
/// a report; the line goes into the `[line N]` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Unexpected character: '{ch}'.")]
    UnexpectedCharacter { line: usize, ch: char },

    #[error("Unterminated string.")]
    UnterminatedString { line: usize },

    #[error("Unterminated comment.")]
    UnterminatedComment { line: usize },
}

impl ScanError {
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. }
            | ScanError::UnterminatedString { line }
            | ScanError::UnterminatedComment { line } => *line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScanError::UnexpectedCharacter { .. } => ErrorCode::UnexpectedCharacter,
            ScanError::UnterminatedString { .. } => ErrorCode::UnterminatedString,
            ScanError::UnterminatedComment { .. } => ErrorCode::UnterminatedComment,
        }
    }
}
