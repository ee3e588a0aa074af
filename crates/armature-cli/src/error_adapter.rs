//! Error adapter for converting ArmatureError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Parse errors get
//! a labeled span over the offending CSV source; other errors render as plain
//! reports with help text where a likely fix is known.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, NamedSource, SourceSpan};

use armature::{ArmatureError, RelationKind};
use armature_parser::ParseError;

/// A renderable diagnostic assembled from an [`ArmatureError`].
pub struct Reportable {
    message: String,
    help: Option<String>,
    source: Option<NamedSource<String>>,
    label: Option<(SourceSpan, String)>,
}

impl Reportable {
    fn plain(message: String) -> Self {
        Self {
            message,
            help: None,
            source: None,
            label: None,
        }
    }

    fn with_help(message: String, help: String) -> Self {
        Self {
            message,
            help: Some(help),
            source: None,
            label: None,
        }
    }
}

impl fmt::Debug for Reportable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reportable")
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for Reportable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Reportable {}

impl MietteDiagnostic for Reportable {
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.source
            .as_ref()
            .map(|src| src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.label.as_ref().map(|(span, message)| {
            Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
                Some(message.clone()),
                *span,
            ))) as Box<dyn Iterator<Item = LabeledSpan>>
        })
    }
}

/// Convert an error into renderable diagnostics.
pub fn to_reportables(err: &ArmatureError) -> Vec<Reportable> {
    match err {
        ArmatureError::Parse { err, name, src } => {
            let span = err.span();
            vec![Reportable {
                message: err.to_string(),
                help: Some(err.help().to_string()),
                source: Some(NamedSource::new(name, src.clone())),
                label: Some((SourceSpan::from(span), label_for(err).to_string())),
            }]
        }
        ArmatureError::Connection(err) => vec![Reportable::with_help(
            err.to_string(),
            format!("recognized kinds: {}", RelationKind::NAMES.join(", ")),
        )],
        ArmatureError::Export(err) => vec![Reportable::with_help(
            err.to_string(),
            "is Graphviz (the `dot` executable) installed and on your PATH?".to_string(),
        )],
        other => vec![Reportable::plain(other.to_string())],
    }
}

fn label_for(err: &ParseError) -> &'static str {
    match err {
        ParseError::Syntax { .. } => "could not parse this record",
        ParseError::MalformedRow { .. } => "this row",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_gets_source_and_label() {
        let err = ArmatureError::new_parse_error(
            ParseError::MalformedRow {
                row: 2,
                expected: 3,
                found: 1,
                span: 5..9,
            },
            "members.csv",
            "a,b,c\nshort\n",
        );

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert!(reportables[0].source.is_some());
        assert!(reportables[0].label.is_some());
        assert!(reportables[0].help.is_some());
    }

    #[test]
    fn test_connection_error_lists_kinds() {
        let err = ArmatureError::Connection(armature::ConnectionError::UnknownRelation {
            kind: "banana".to_string(),
        });

        let reportables = to_reportables(&err);
        let help = reportables[0].help.as_deref().expect("help text");
        assert!(help.contains("inherits"));
        assert!(help.contains("associates"));
    }

    #[test]
    fn test_io_error_is_a_plain_report() {
        let err = ArmatureError::Io(std::io::Error::other("boom"));
        let reportables = to_reportables(&err);
        assert!(reportables[0].source.is_none());
        assert!(reportables[0].label.is_none());
    }
}
