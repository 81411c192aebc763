//! Tests for vCard parse errors.

use super::decode;
use super::error::{ParseError, ParseErrorKind, Position};
use crate::rfc::vcard::core::Tag;

fn at(line: usize, column: usize, offset: usize) -> Position {
    Position {
        line,
        column,
        offset,
    }
}

#[test]
fn error_new() {
    let err = ParseError::new(ParseErrorKind::Structural, at(5, 3, 40), "test message");
    assert_eq!(err.line, 5);
    assert_eq!(err.column, 3);
    assert_eq!(err.offset, 40);
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert_eq!(err.message, "test message");
    assert_eq!(err.position(), at(5, 3, 40));
}

#[test]
fn error_unknown_tag() {
    let err = ParseError::unknown_tag(at(2, 1, 13), "FOO");
    assert_eq!(err.kind, ParseErrorKind::UnknownTag);
    assert!(err.message.contains("FOO"));

    let err = ParseError::unknown_tag(at(2, 1, 13), "");
    assert!(err.message.contains("expected a property name"));
}

#[test]
fn error_value_format_names_tag() {
    let err = ParseError::value_format(at(4, 5, 60), &Tag::Geo, "expected latitude;longitude");
    assert_eq!(err.kind, ParseErrorKind::ValueFormat);
    assert_eq!(err.message, "GEO: expected latitude;longitude");
}

#[test]
fn error_recursion_limit() {
    let err = ParseError::recursion_limit(at(1, 1, 0), 16);
    assert_eq!(err.kind, ParseErrorKind::RecursionLimit);
    assert!(err.message.contains("16"));
}

#[test]
fn error_display() {
    let err = ParseError::date_format(at(12, 6, 200), "bad date");
    let displayed = format!("{err}");
    assert!(displayed.contains("line 12"));
    assert!(displayed.contains("column 6"));
    assert!(displayed.contains("invalid date/time"));
    assert!(displayed.contains("bad date"));
}

#[test]
fn error_kind_display() {
    assert_eq!(format!("{}", ParseErrorKind::Structural), "structural error");
    assert_eq!(format!("{}", ParseErrorKind::UnknownTag), "unknown tag");
    assert_eq!(format!("{}", ParseErrorKind::ValueFormat), "invalid value");
    assert_eq!(format!("{}", ParseErrorKind::Escape), "escape error");
    assert_eq!(format!("{}", ParseErrorKind::DateFormat), "invalid date/time");
    assert_eq!(format!("{}", ParseErrorKind::NumericFormat), "invalid number");
    assert_eq!(
        format!("{}", ParseErrorKind::RecursionLimit),
        "recursion limit exceeded"
    );
}

#[test]
fn unknown_tag_reported_at_token() {
    let err = decode("BEGIN:VCARD\r\nFN:John\r\nFOO:bar\r\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnknownTag);
    assert_eq!(err.line, 3);
    assert_eq!(err.column, 1);
    assert_eq!(err.offset, 22);
}

#[test]
fn missing_begin() {
    let err = decode("FN:John\r\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert_eq!(err.offset, 0);
}

#[test]
fn missing_end() {
    let err = decode("BEGIN:VCARD\r\nFN:John\r\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
}

#[test]
fn record_cut_short() {
    let err = decode("BEGIN:VCARD\r\nFN:John").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert!(err.message.contains("FN"));
}

#[test]
fn empty_vcard() {
    let err = decode("BEGIN:VCARD\r\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
}

#[test]
fn begin_inside_vcard() {
    let err = decode("BEGIN:VCARD\r\nFN:A\r\nBEGIN:VCARD\r\nFN:B\r\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert_eq!(err.line, 3);
}

#[test]
fn bare_lf_inside_top_level_vcard() {
    let err = decode("BEGIN:VCARD\nFN:John\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert!(err.message.contains("CRLF"));
}

#[test]
fn unescaped_stop_character() {
    let err = decode("BEGIN:VCARD\r\nNOTE:Hello, world\r\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Escape);
    assert_eq!(err.column, 11);
}

#[test]
fn invalid_escape() {
    let err = decode("BEGIN:VCARD\r\nNOTE:C\\\\dir\r\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Escape);
}

#[test]
fn invalid_date() {
    let err = decode("BEGIN:VCARD\r\nBDAY:1996-13-01\r\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::DateFormat);
}

#[test]
fn invalid_number() {
    let err = decode("BEGIN:VCARD\r\nGEO:north;west\r\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NumericFormat);
}

#[test]
fn missing_separator_between_cards() {
    let err = decode("BEGIN:VCARD\r\nFN:A\r\nEND:VCARDBEGIN:VCARD\r\nFN:B\r\nEND:VCARD")
        .unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
}
