//! CSV record parsing.
//!
//! A small winnow-based reader for the two input files. Fields are either
//! quoted (`"` delimited, with `""` escaping a literal quote) or bare (any
//! text up to a comma, quote, or line break); records are comma-separated
//! field lists ending at a line break or end of input. Blank lines are
//! skipped. Nothing here interprets field contents; trimming and column
//! semantics live in the [`loader`](crate::loader).

use winnow::{
    Parser as _,
    combinator::{alt, delimited, opt, repeat, separated},
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::{none_of, take_while},
};

use crate::error::ParseError;

type Input<'a> = LocatingSlice<&'a str>;

/// One parsed CSV record: its fields and the byte span it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Field values with quoting resolved, untrimmed.
    pub fields: Vec<String>,
    /// Byte range of the record in the source text.
    pub span: std::ops::Range<usize>,
}

/// Parse a quoted field: `"..."` with `""` as an escaped quote.
fn quoted_field(input: &mut Input<'_>) -> ModalResult<String> {
    delimited(
        '"',
        repeat(0.., alt(("\"\"".value('"'), none_of('"')))),
        '"',
    )
    .parse_next(input)
}

/// Parse a bare field: anything up to a comma, quote, or line break.
///
/// Matches the empty string, so a field is always present between
/// separators.
fn bare_field(input: &mut Input<'_>) -> ModalResult<String> {
    take_while(0.., |c: char| !matches!(c, ',' | '"' | '\r' | '\n'))
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

fn field(input: &mut Input<'_>) -> ModalResult<String> {
    alt((quoted_field, bare_field)).parse_next(input)
}

/// Parse one record: comma-separated fields.
fn record(input: &mut Input<'_>) -> ModalResult<Vec<String>> {
    separated(1.., field, ',').parse_next(input)
}

fn line_ending(input: &mut Input<'_>) -> ModalResult<()> {
    alt(("\r\n", "\n", "\r")).void().parse_next(input)
}

/// Parse an entire CSV source into records.
///
/// # Errors
///
/// [`ParseError::Syntax`] when a record does not end at a line break, which
/// covers stray quotes inside bare fields, text after a closing quote, and
/// unterminated quoted fields.
pub fn parse_records(source: &str) -> Result<Vec<Record>, ParseError> {
    let mut input = LocatingSlice::new(source);
    let mut records = Vec::new();

    while input.eof_offset() > 0 {
        // Blank lines carry no record.
        if let Ok(Some(())) = opt(line_ending).parse_next(&mut input) {
            continue;
        }

        let start = input.current_token_start();
        let fields = record(&mut input).map_err(|_| ParseError::Syntax {
            message: "could not parse record".to_string(),
            span: start..(start + 1).min(source.len()),
        })?;
        let end = input.current_token_start();

        if input.eof_offset() > 0 {
            line_ending(&mut input).map_err(|_| ParseError::Syntax {
                message: "record does not end at a line break".to_string(),
                span: start..(end + 1).min(source.len()),
            })?;
        }

        records.push(Record {
            fields,
            span: start..end,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(source: &str) -> Vec<Vec<String>> {
        parse_records(source)
            .expect("source should parse")
            .into_iter()
            .map(|record| record.fields)
            .collect()
    }

    #[test]
    fn test_simple_records() {
        assert_eq!(
            fields("a,b,c\nd,e,f\n"),
            vec![
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
                vec!["d".to_string(), "e".to_string(), "f".to_string()],
            ]
        );
    }

    #[test]
    fn test_missing_trailing_newline() {
        assert_eq!(fields("a,b"), vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            fields("a,b\r\nc,d\r\n"),
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ]
        );
    }

    #[test]
    fn test_empty_fields_are_kept() {
        assert_eq!(
            fields("a,,c\n"),
            vec![vec!["a".to_string(), String::new(), "c".to_string()]]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(
            fields("a,b\n\n\nc,d\n"),
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ]
        );
    }

    #[test]
    fn test_quoted_field_with_comma_and_newline_chars() {
        assert_eq!(
            fields("\"Foo, Bar\",x\n"),
            vec![vec!["Foo, Bar".to_string(), "x".to_string()]]
        );
    }

    #[test]
    fn test_doubled_quote_escapes() {
        assert_eq!(
            fields("\"say \"\"hi\"\"\",x\n"),
            vec![vec!["say \"hi\"".to_string(), "x".to_string()]]
        );
    }

    #[test]
    fn test_record_spans_cover_their_text() {
        let source = "a,b\ncc,dd\n";
        let records = parse_records(source).expect("source should parse");
        assert_eq!(&source[records[0].span.clone()], "a,b");
        assert_eq!(&source[records[1].span.clone()], "cc,dd");
    }

    #[test]
    fn test_unterminated_quote_is_an_error() {
        let err = parse_records("\"abc\n").expect_err("unterminated quote");
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn test_text_after_closing_quote_is_an_error() {
        let err = parse_records("\"abc\"def,x\n").expect_err("stray text");
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn test_empty_source_has_no_records() {
        assert_eq!(parse_records(""), Ok(vec![]));
        assert_eq!(parse_records("\n\n"), Ok(vec![]));
    }
}
