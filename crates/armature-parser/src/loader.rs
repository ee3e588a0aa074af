//! Row-to-model loading for the two CSV schemas.
//!
//! The members file carries `DisplayName, Annotation, Stereotype` and the
//! connections file `RelationshipKind, Participant1, Participant2, ...`.
//! Every field is trimmed before use. Column semantics are positional only;
//! no further schema validation happens here.

use log::debug;

use armature_core::{Connection, Id, Member, RoleStereotype};

use crate::{csv, error::ParseError};

/// Columns a members row must have: name, annotation, stereotype.
const MEMBER_COLUMNS: usize = 3;
/// Columns a connections row must have: kind plus two participants.
const CONNECTION_COLUMNS: usize = 3;

/// Options shared by both CSV loaders.
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    /// When set, the first record of the file is skipped as a header row.
    pub has_headers: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { has_headers: true }
    }
}

/// Load members from CSV source text.
///
/// Per data row: column 0 is sanitized into the node identifier and kept raw
/// as the display name, column 1 is the annotation (`None` when empty after
/// trimming), and column 2 is looked up as a stereotype (`None` when
/// unrecognized).
///
/// # Errors
///
/// [`ParseError::Syntax`] for malformed CSV, [`ParseError::MalformedRow`]
/// when a data row has fewer than three columns.
pub fn parse_members(source: &str, options: &CsvOptions) -> Result<Vec<Member>, ParseError> {
    let mut members = Vec::new();

    for (row, record) in data_rows(source, options)? {
        let fields: Vec<&str> = record.fields.iter().map(|field| field.trim()).collect();
        if fields.len() < MEMBER_COLUMNS {
            return Err(ParseError::MalformedRow {
                row,
                expected: MEMBER_COLUMNS,
                found: fields.len(),
                span: record.span.clone(),
            });
        }

        let display_name = fields[0];
        let annotation = (!fields[1].is_empty()).then(|| fields[1].to_string());
        let stereotype = RoleStereotype::parse(fields[2]);

        members.push(Member::new(
            Id::sanitized(display_name),
            display_name,
            annotation,
            stereotype,
        ));
    }

    debug!(members = members.len(); "Loaded member rows");
    Ok(members)
}

/// Load connections from CSV source text.
///
/// Per data row: column 0 is the relationship kind, kept raw (validation is
/// lazy and happens at edge resolution); every remaining column is sanitized
/// into a participant identifier. Arbitrary arity is accepted, though only
/// the first two participants are meaningful to the style table.
///
/// # Errors
///
/// [`ParseError::Syntax`] for malformed CSV, [`ParseError::MalformedRow`]
/// when a data row has fewer than a kind and two participants.
pub fn parse_connections(
    source: &str,
    options: &CsvOptions,
) -> Result<Vec<Connection>, ParseError> {
    let mut connections = Vec::new();

    for (row, record) in data_rows(source, options)? {
        let fields: Vec<&str> = record.fields.iter().map(|field| field.trim()).collect();
        if fields.len() < CONNECTION_COLUMNS {
            return Err(ParseError::MalformedRow {
                row,
                expected: CONNECTION_COLUMNS,
                found: fields.len(),
                span: record.span.clone(),
            });
        }

        let participants = fields[1..].iter().map(|raw| Id::sanitized(raw)).collect();
        connections.push(Connection::new(fields[0], participants));
    }

    debug!(connections = connections.len(); "Loaded connection rows");
    Ok(connections)
}

/// Parse the source and yield `(row_number, record)` pairs for data rows.
///
/// Row numbers are 1-based and count the header row when present.
fn data_rows(
    source: &str,
    options: &CsvOptions,
) -> Result<impl Iterator<Item = (usize, csv::Record)>, ParseError> {
    let skip = if options.has_headers { 1 } else { 0 };
    let records = csv::parse_records(source)?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(index, record)| (index + 1, record))
        .skip(skip))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBERS: &str = "\
Name,Annotation,Stereotype
Foo Bar, <<note>>, Information Holder
Baz,,
";

    #[test]
    fn test_members_header_row_is_skipped() {
        let members = parse_members(MEMBERS, &CsvOptions::default()).expect("valid members");
        assert_eq!(members.len(), 2);
    }

    #[test]
    fn test_members_fields_are_trimmed_and_sanitized() {
        let members = parse_members(MEMBERS, &CsvOptions::default()).expect("valid members");

        assert_eq!(members[0].id(), "FooBar");
        assert_eq!(members[0].display_name(), "Foo Bar");
        assert_eq!(members[0].annotation(), Some("<<note>>"));
        assert_eq!(
            members[0].stereotype(),
            Some(RoleStereotype::InformationHolder)
        );
    }

    #[test]
    fn test_members_empty_optionals_are_none() {
        let members = parse_members(MEMBERS, &CsvOptions::default()).expect("valid members");
        assert_eq!(members[1].annotation(), None);
        assert_eq!(members[1].stereotype(), None);
    }

    #[test]
    fn test_members_unrecognized_stereotype_is_none() {
        let members = parse_members(
            "A,,NotAStereotype\n",
            &CsvOptions { has_headers: false },
        )
        .expect("valid members");
        assert_eq!(members[0].stereotype(), None);
    }

    #[test]
    fn test_members_without_headers() {
        let members = parse_members(
            "Solo,,Controller\n",
            &CsvOptions { has_headers: false },
        )
        .expect("valid members");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id(), "Solo");
    }

    #[test]
    fn test_members_short_row_is_malformed() {
        let err = parse_members("Kind,Annotation,Stereotype\nOnly Name\n", &CsvOptions::default())
            .expect_err("short row");
        assert_eq!(
            err,
            ParseError::MalformedRow {
                row: 2,
                expected: 3,
                found: 1,
                span: 27..36,
            }
        );
    }

    #[test]
    fn test_connections_rows() {
        let source = "Kind,From,To\ninherits, Child , Parent\n";
        let connections =
            parse_connections(source, &CsvOptions::default()).expect("valid connections");

        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].kind(), "inherits");
        assert_eq!(connections[0].participants()[0], "Child");
        assert_eq!(connections[0].participants()[1], "Parent");
    }

    #[test]
    fn test_connections_participants_are_sanitized() {
        let connections = parse_connections(
            "has,Foo Bar,Baz Qux\n",
            &CsvOptions { has_headers: false },
        )
        .expect("valid connections");
        assert_eq!(connections[0].participants()[0], "FooBar");
        assert_eq!(connections[0].participants()[1], "BazQux");
    }

    #[test]
    fn test_connections_unknown_kind_loads_without_error() {
        // Kind validation is lazy; loading must not reject it.
        let connections = parse_connections(
            "unknown_kind,A,B\n",
            &CsvOptions { has_headers: false },
        )
        .expect("loading should succeed");
        assert_eq!(connections[0].kind(), "unknown_kind");
        assert!(connections[0].edge().is_err());
    }

    #[test]
    fn test_connections_extra_participants_are_kept() {
        let connections = parse_connections(
            "associates,A,B,C,D\n",
            &CsvOptions { has_headers: false },
        )
        .expect("valid connections");
        assert_eq!(connections[0].participants().len(), 4);
    }

    #[test]
    fn test_connections_missing_participant_is_malformed() {
        let err = parse_connections("calls,A\n", &CsvOptions { has_headers: false })
            .expect_err("short row");
        assert!(matches!(
            err,
            ParseError::MalformedRow {
                row: 1,
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_header_only_files_yield_nothing() {
        let members =
            parse_members("Name,Annotation,Stereotype\n", &CsvOptions::default()).unwrap();
        let connections = parse_connections("Kind,From,To\n", &CsvOptions::default()).unwrap();
        assert!(members.is_empty());
        assert!(connections.is_empty());
    }
}
