//! Error types for CSV parsing and loading.
//!
//! Errors carry the byte span of the offending input so the CLI can render
//! labeled source snippets. There is no recovery: the first error aborts the
//! run, which fits the batch single-pass nature of the tool.

use std::ops::Range;

use thiserror::Error;

/// Errors raised while parsing or loading a CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is not well-formed CSV (stray quote, text after a closing
    /// quote, unterminated quoted field).
    #[error("malformed CSV record: {message}")]
    Syntax {
        message: String,
        span: Range<usize>,
    },

    /// A data row has fewer columns than the file's schema requires.
    #[error("row {row} has too few columns: expected at least {expected}, found {found}")]
    MalformedRow {
        /// 1-based record number, counting the header row if present.
        row: usize,
        expected: usize,
        found: usize,
        span: Range<usize>,
    },
}

impl ParseError {
    /// Byte span of the offending input.
    pub fn span(&self) -> Range<usize> {
        match self {
            ParseError::Syntax { span, .. } | ParseError::MalformedRow { span, .. } => {
                span.clone()
            }
        }
    }

    /// Help text for diagnostic rendering.
    pub fn help(&self) -> &'static str {
        match self {
            ParseError::Syntax { .. } => {
                "quote fields that contain commas or quotes, and close every opening quote"
            }
            ParseError::MalformedRow { .. } => {
                "members rows need name, annotation, and stereotype columns; \
                 connections rows need a kind and two participants"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ParseError::MalformedRow {
            row: 3,
            expected: 3,
            found: 1,
            span: 10..14,
        };
        assert_eq!(
            err.to_string(),
            "row 3 has too few columns: expected at least 3, found 1"
        );

        let err = ParseError::Syntax {
            message: "record does not end at a line break".to_string(),
            span: 0..1,
        };
        assert!(err.to_string().starts_with("malformed CSV record"));
    }

    #[test]
    fn test_span_accessor() {
        let err = ParseError::MalformedRow {
            row: 1,
            expected: 3,
            found: 2,
            span: 5..9,
        };
        assert_eq!(err.span(), 5..9);
    }
}
