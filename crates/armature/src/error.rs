//! Error types for armature operations.
//!
//! This module provides the main error type [`ArmatureError`] which wraps the
//! error conditions that can occur while loading, building, and exporting a
//! diagram. Nothing is recovered: every error propagates to the caller and
//! terminates the run.

use std::{io, path::PathBuf};

use thiserror::Error;

use armature_core::ConnectionError;
use armature_parser::ParseError;

use crate::export::ExportError;

/// The main error type for armature operations.
///
/// The `Parse` variant keeps the offending source text alongside the error so
/// callers can render labeled source snippets.
#[derive(Debug, Error)]
pub enum ArmatureError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read `{}`: {source}", .path.display())]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("{name}: {err}")]
    Parse {
        err: ParseError,
        /// Display name of the input (a path, or `members`/`connections`
        /// when parsing from strings).
        name: String,
        src: String,
    },

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ArmatureError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, name: impl Into<String>, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            name: name.into(),
            src: src.into(),
        }
    }
}
