//! Primitive value grammars shared by the property parsers.
//!
//! Every function reads from a [`Cursor`] positioned at the start of its
//! value and leaves it on the first character it did not consume.

use chrono::{NaiveDate, NaiveTime};
use vcard3_core::config::TimeSeparator;

use super::cursor::Cursor;
use super::error::{ParseError, ParseResult};
use crate::rfc::vcard::core::{
    Base64Body, IndividualNames, Keyword, RawText, RevTime, Revision, Tag, UtcOffset, VCardString,
    params,
};

/// Characters that end an escaped string unless preceded by a backslash.
pub(crate) const STOP_CHARS: [char; 3] = [',', ';', ':'];

pub(crate) fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

/// Whitespace that marks a folded continuation line.
pub(crate) fn is_fold_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0b}')
}

/// Returns whether the cursor sits at a line ending or the end of input.
pub(crate) fn at_record_end(cursor: &Cursor<'_>) -> bool {
    matches!(cursor.peek(), None | Some('\r' | '\n'))
}

/// Consumes a parameter name or value token if it is one of `alternatives`.
///
/// The cursor is left untouched when the token does not match.
pub(crate) fn keyword(cursor: &mut Cursor<'_>, alternatives: &[&str]) -> bool {
    let checkpoint = cursor.save();
    let token = cursor.take_while(is_token_char);
    if !token.is_empty() && alternatives.contains(&token) {
        return true;
    }
    cursor.restore(checkpoint);
    false
}

/// Decodes an escaped string up to the first unescaped stop character or the
/// end of the record.
///
/// ## Errors
/// Returns an `Escape` error for a backslash that is not followed by `,`, `;`
/// or `:`.
pub(crate) fn escaped_string(cursor: &mut Cursor<'_>) -> ParseResult<VCardString> {
    let mut value = String::new();

    loop {
        match cursor.peek() {
            None | Some('\r' | '\n') => break,
            Some(c) if STOP_CHARS.contains(&c) => break,
            Some('\\') => {
                let at = cursor.position();
                cursor.bump();
                match cursor.peek() {
                    Some(c) if STOP_CHARS.contains(&c) => {
                        cursor.bump();
                        value.push(c);
                    }
                    None | Some('\r' | '\n') => {
                        return Err(ParseError::escape(at, "dangling backslash at end of value"));
                    }
                    Some(c) => {
                        return Err(ParseError::escape(
                            at,
                            format!("invalid escape sequence \\{c}"),
                        ));
                    }
                }
            }
            Some(c) => {
                cursor.bump();
                value.push(c);
            }
        }
    }

    Ok(VCardString::from_decoded(value))
}

/// Reads unescaped text to the end of the record.
pub(crate) fn raw_text(cursor: &mut Cursor<'_>) -> RawText {
    RawText::from_decoded(cursor.take_while(|c| !matches!(c, '\r' | '\n')))
}

/// Decodes escaped strings joined by `separator`.
///
/// An empty field is an empty list. A `,` list also ends before a `;`, which
/// separates the components of N.
pub(crate) fn escaped_list(
    cursor: &mut Cursor<'_>,
    separator: char,
) -> ParseResult<Vec<VCardString>> {
    if at_record_end(cursor) || (separator == ',' && cursor.peek() == Some(';')) {
        return Ok(Vec::new());
    }

    let mut items = vec![escaped_string(cursor)?];
    while cursor.eat(separator) {
        items.push(escaped_string(cursor)?);
    }
    Ok(items)
}

/// Parses the five `;`-separated comma lists of N.
///
/// Trailing components that are missing altogether decode as empty.
pub(crate) fn individual_names(cursor: &mut Cursor<'_>) -> ParseResult<IndividualNames> {
    let mut components: [Vec<VCardString>; 5] = Default::default();

    for (i, component) in components.iter_mut().enumerate() {
        if i > 0 && !cursor.eat(';') {
            break;
        }
        *component = escaped_list(cursor, ',')?;
    }

    let [family, given, additional, prefixes, suffixes] = components;
    Ok(IndividualNames {
        family,
        given,
        additional,
        prefixes,
        suffixes,
    })
}

/// Reads exactly `count` ASCII digits.
fn digits(cursor: &mut Cursor<'_>, count: usize) -> Option<u32> {
    let checkpoint = cursor.save();
    let mut value = 0;
    for _ in 0..count {
        let Some(digit) = cursor.eat_if(|c| c.is_ascii_digit()).and_then(|c| c.to_digit(10))
        else {
            cursor.restore(checkpoint);
            return None;
        };
        value = value * 10 + digit;
    }
    Some(value)
}

fn two_digits(cursor: &mut Cursor<'_>) -> Option<u8> {
    digits(cursor, 2).and_then(|value| u8::try_from(value).ok())
}

fn date_fields(cursor: &mut Cursor<'_>) -> Option<(i32, u32, u32)> {
    let year = i32::try_from(digits(cursor, 4)?).ok()?;
    cursor.eat('-').then_some(())?;
    let month = digits(cursor, 2)?;
    cursor.eat('-').then_some(())?;
    let day = digits(cursor, 2)?;
    Some((year, month, day))
}

/// Parses `YYYY-MM-DD`.
///
/// ## Errors
/// Returns a `DateFormat` error if the text is malformed or names a day that
/// does not exist.
pub(crate) fn date(cursor: &mut Cursor<'_>) -> ParseResult<NaiveDate> {
    let at = cursor.position();
    let (year, month, day) = date_fields(cursor)
        .ok_or_else(|| ParseError::date_format(at, "expected a date as YYYY-MM-DD"))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ParseError::date_format(
            at,
            format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
        )
    })
}

fn time_fields(cursor: &mut Cursor<'_>, separator: char) -> Option<(u32, u32, u32)> {
    let hour = digits(cursor, 2)?;
    cursor.eat(separator).then_some(())?;
    let minute = digits(cursor, 2)?;
    cursor.eat(separator).then_some(())?;
    let second = digits(cursor, 2)?;
    Some((hour, minute, second))
}

/// Parses a `REV` timestamp: a date, optionally followed by `T`, a time and
/// a `Z` designator.
///
/// ## Errors
/// Returns a `DateFormat` error if either component is malformed.
pub(crate) fn revision(cursor: &mut Cursor<'_>, separator: TimeSeparator) -> ParseResult<Revision> {
    let date = date(cursor)?;
    if !cursor.eat('T') {
        return Ok(Revision { date, time: None });
    }

    let at = cursor.position();
    let sep = separator.as_char();
    let (hour, minute, second) = time_fields(cursor, sep).ok_or_else(|| {
        ParseError::date_format(at, format!("expected a time as HH{sep}MM{sep}SS"))
    })?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        ParseError::date_format(
            at,
            format!("{hour:02}{sep}{minute:02}{sep}{second:02} is not a valid time"),
        )
    })?;
    let utc = cursor.eat('Z');

    Ok(Revision {
        date,
        time: Some(RevTime { time, utc }),
    })
}

/// Fails unless a date or timestamp runs to the end of the record.
pub(crate) fn expect_date_end(cursor: &Cursor<'_>) -> ParseResult<()> {
    if at_record_end(cursor) {
        Ok(())
    } else {
        Err(ParseError::date_format(
            cursor.position(),
            "unexpected characters after date",
        ))
    }
}

/// Parses `+HH:MM` or `-HHMM`.
///
/// ## Errors
/// Returns a `NumericFormat` error for a missing sign, missing digits or an
/// out-of-range offset.
pub(crate) fn utc_offset(cursor: &mut Cursor<'_>) -> ParseResult<UtcOffset> {
    let at = cursor.position();
    let negative = match cursor.peek() {
        Some('+') => false,
        Some('-') => true,
        _ => {
            return Err(ParseError::numeric_format(
                at,
                "UTC offset must start with '+' or '-'",
            ));
        }
    };
    cursor.bump();

    let malformed = || ParseError::numeric_format(at, "expected a UTC offset as +HH:MM");
    let hours = two_digits(cursor).ok_or_else(malformed)?;
    cursor.eat(':');
    let minutes = two_digits(cursor).ok_or_else(malformed)?;

    UtcOffset::new(negative, hours, minutes)
        .map_err(|err| ParseError::numeric_format(at, err.to_string()))
}

/// Parses a signed decimal such as `-122.082932`.
///
/// ## Errors
/// Returns a `NumericFormat` error if no digits are present or the value does
/// not fit a finite `f64`.
pub(crate) fn decimal(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let at = cursor.position();
    let start = cursor.save();

    cursor.eat_if(|c| c == '+' || c == '-');
    let integral = cursor.take_while(|c| c.is_ascii_digit());
    let fraction = if cursor.eat('.') {
        cursor.take_while(|c| c.is_ascii_digit())
    } else {
        ""
    };
    if integral.is_empty() && fraction.is_empty() {
        return Err(ParseError::numeric_format(at, "expected a decimal number"));
    }

    let text = cursor.since(start);
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::numeric_format(at, format!("{text:?} is not a finite number")))
}

/// Parses an unsigned integer.
///
/// ## Errors
/// Returns a `NumericFormat` error if there are no digits or the value
/// overflows `u32`.
pub(crate) fn unsigned(cursor: &mut Cursor<'_>) -> ParseResult<u32> {
    let at = cursor.position();
    let text = cursor.take_while(|c| c.is_ascii_digit());
    text.parse::<u32>()
        .map_err(|err| ParseError::numeric_format(at, format!("expected an integer: {err}")))
}

/// Fails unless a `TYPE=` block ends before `;` or `:`.
fn expect_block_end(cursor: &Cursor<'_>, tag: &Tag) -> ParseResult<()> {
    match cursor.peek() {
        Some(';' | ':') => Ok(()),
        _ => Err(ParseError::value_format(
            cursor.position(),
            tag,
            "expected ';' or ':' after TYPE parameter",
        )),
    }
}

/// Parses zero or more `;TYPE=a,b` qualifier blocks, flattened in order.
///
/// A `;` that does not open a `TYPE=` block is left unconsumed.
///
/// ## Errors
/// Returns a `ValueFormat` error for a token that is not a qualifier of `K`.
pub(crate) fn qualifiers<K: Keyword>(cursor: &mut Cursor<'_>, tag: &Tag) -> ParseResult<Vec<K>> {
    let mut found = Vec::new();

    loop {
        let checkpoint = cursor.save();
        if !(cursor.eat(';') && keyword(cursor, params::TYPE) && cursor.eat('=')) {
            cursor.restore(checkpoint);
            return Ok(found);
        }

        loop {
            let at = cursor.position();
            let token = cursor.take_while(is_token_char);
            let qualifier = K::from_keyword(token).ok_or_else(|| {
                ParseError::value_format(at, tag, format!("unknown qualifier {token:?}"))
            })?;
            found.push(qualifier);
            if !cursor.eat(',') {
                break;
            }
        }

        expect_block_end(cursor, tag)?;
    }
}

/// Parses an optional `;TYPE=token,token` block with free-form tokens.
///
/// Returns an empty list when no block is present.
///
/// ## Errors
/// Returns an `Escape` error for a malformed token, or a `ValueFormat` error
/// if the block is not followed by `;` or `:`.
pub(crate) fn type_tokens(cursor: &mut Cursor<'_>, tag: &Tag) -> ParseResult<Vec<VCardString>> {
    let checkpoint = cursor.save();
    if !(cursor.eat(';') && keyword(cursor, params::TYPE) && cursor.eat('=')) {
        cursor.restore(checkpoint);
        return Ok(Vec::new());
    }

    let mut tokens = vec![escaped_string(cursor)?];
    while cursor.eat(',') {
        tokens.push(escaped_string(cursor)?);
    }
    expect_block_end(cursor, tag)?;
    Ok(tokens)
}

/// Reads a base64 body, joining folded continuation lines.
///
/// A fold is `terminator` followed by one space, tab or vertical tab; both
/// are dropped.
///
/// ## Errors
/// Returns a `ValueFormat` error if the joined text is not valid base64.
pub(crate) fn base64_body(
    cursor: &mut Cursor<'_>,
    terminator: &str,
    tag: &Tag,
) -> ParseResult<Base64Body> {
    let at = cursor.position();
    let mut body = String::new();

    loop {
        body.push_str(cursor.take_while(is_base64_char));

        let checkpoint = cursor.save();
        if cursor.eat_str(terminator) && cursor.eat_if(is_fold_space).is_some() {
            continue;
        }
        cursor.restore(checkpoint);
        break;
    }

    Base64Body::new(body).map_err(|err| ParseError::value_format(at, tag, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::{AddrType, TelType};
    use crate::rfc::vcard::parse::ParseErrorKind;

    fn s(value: &str) -> VCardString {
        VCardString::new(value).unwrap()
    }

    /// Text values whose escaping has edge cases.
    const ESCAPE_CASES: &[&str] = &[
        "",
        ",",
        ";;;",
        ":,;",
        ",,,,,,",
        "a,b;c:d",
        " leading and trailing ",
        "tab\there",
        "Zoë: café; 東京, 🙂",
        "http://example.com/a;b,c",
    ];

    #[test]
    fn escaped_text_decodes_to_original() {
        use crate::rfc::vcard::build::escape_text;

        for &case in ESCAPE_CASES {
            let escaped = escape_text(case);

            let mut chars = escaped.chars();
            while let Some(c) = chars.next() {
                assert!(!STOP_CHARS.contains(&c), "unescaped {c:?} in {escaped:?}");
                if c == '\\' {
                    assert!(
                        chars.next().is_some_and(|next| STOP_CHARS.contains(&next)),
                        "stray backslash in {escaped:?}"
                    );
                }
            }

            let mut cursor = Cursor::new(&escaped);
            let decoded = escaped_string(&mut cursor).unwrap();
            assert_eq!(decoded, case);
            assert!(cursor.is_eof(), "{escaped:?} not fully consumed");
        }
    }

    #[test]
    fn escaped_comma_runs() {
        let mut cursor = Cursor::new("\\,\\,\\,x\\,;rest");
        assert_eq!(escaped_string(&mut cursor).unwrap(), ",,,x,");
        assert!(cursor.starts_with(";rest"));
    }

    #[test]
    fn escaped_string_resolves_escapes() {
        let mut cursor = Cursor::new("Accounting\\, Inc.\\; Division\\: North\r\n");
        let value = escaped_string(&mut cursor).unwrap();
        assert_eq!(value, "Accounting, Inc.; Division: North");
        assert!(cursor.starts_with("\r\n"));
    }

    #[test]
    fn escaped_string_stops_at_unescaped_stop_char() {
        let mut cursor = Cursor::new("a,b");
        assert_eq!(escaped_string(&mut cursor).unwrap(), "a");
        assert_eq!(cursor.peek(), Some(','));
    }

    #[test]
    fn escaped_string_rejects_bad_escapes() {
        let err = escaped_string(&mut Cursor::new("a\\nb")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Escape);
        assert_eq!(err.column, 2);

        let err = escaped_string(&mut Cursor::new("dangling\\")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Escape);

        let err = escaped_string(&mut Cursor::new("dangling\\\r\n")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Escape);
    }

    #[test]
    fn list_forms() {
        let mut cursor = Cursor::new("Jim,Jimmie\r\n");
        assert_eq!(escaped_list(&mut cursor, ',').unwrap(), vec![s("Jim"), s("Jimmie")]);

        let mut cursor = Cursor::new("Acme;;Lab\r\n");
        assert_eq!(
            escaped_list(&mut cursor, ';').unwrap(),
            vec![s("Acme"), s(""), s("Lab")]
        );

        let mut cursor = Cursor::new("\r\n");
        assert!(escaped_list(&mut cursor, ',').unwrap().is_empty());
    }

    #[test]
    fn names_fill_missing_components() {
        let names = individual_names(&mut Cursor::new("Public;John;Quinlan;Mr.;Esq.")).unwrap();
        assert_eq!(names.family, vec![s("Public")]);
        assert_eq!(names.suffixes, vec![s("Esq.")]);

        let names = individual_names(&mut Cursor::new("Doe;John")).unwrap();
        assert_eq!(names.given, vec![s("John")]);
        assert!(names.additional.is_empty());
        assert!(names.suffixes.is_empty());

        let names = individual_names(&mut Cursor::new(";;;Dr.,Prof.;")).unwrap();
        assert!(names.family.is_empty());
        assert_eq!(names.prefixes, vec![s("Dr."), s("Prof.")]);
    }

    #[test]
    fn dates_are_calendar_checked() {
        let parsed = date(&mut Cursor::new("1996-04-15")).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(1996, 4, 15).unwrap());

        let err = date(&mut Cursor::new("1996-02-30")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DateFormat);

        let err = date(&mut Cursor::new("19960415")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DateFormat);
    }

    #[test]
    fn revision_with_configured_separator() {
        let rev = revision(&mut Cursor::new("1995-10-31T22:27:10Z"), TimeSeparator::Colon)
            .unwrap();
        let time = rev.time.unwrap();
        assert_eq!(time.time, NaiveTime::from_hms_opt(22, 27, 10).unwrap());
        assert!(time.utc);

        let rev = revision(&mut Cursor::new("1995-10-31T22-27-10"), TimeSeparator::Dash).unwrap();
        assert!(!rev.time.unwrap().utc);

        let err = revision(&mut Cursor::new("1995-10-31T22-27-10Z"), TimeSeparator::Colon)
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DateFormat);

        let rev = revision(&mut Cursor::new("1997-11-15"), TimeSeparator::Colon).unwrap();
        assert!(rev.time.is_none());
    }

    #[test]
    fn offsets_with_and_without_colon() {
        let offset = utc_offset(&mut Cursor::new("-05:00")).unwrap();
        assert_eq!(offset.total_seconds(), -18_000);

        let offset = utc_offset(&mut Cursor::new("+0530")).unwrap();
        assert_eq!(offset.to_string(), "+05:30");

        let err = utc_offset(&mut Cursor::new("05:00")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NumericFormat);

        let err = utc_offset(&mut Cursor::new("+25:00")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NumericFormat);
    }

    #[test]
    fn decimals() {
        let mut cursor = Cursor::new("37.386013;-122.082932");
        assert!((decimal(&mut cursor).unwrap() - 37.386_013).abs() < 1e-9);
        assert!(cursor.eat(';'));
        assert!((decimal(&mut cursor).unwrap() + 122.082_932).abs() < 1e-9);

        let err = decimal(&mut Cursor::new("north")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NumericFormat);
        let err = decimal(&mut Cursor::new("-.")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NumericFormat);
    }

    #[test]
    fn qualifier_blocks_keep_order_and_stop_at_value() {
        let mut cursor = Cursor::new(";TYPE=WORK,VOICE;type=pref:+1-555-5555");
        let found: Vec<TelType> = qualifiers(&mut cursor, &Tag::Tel).unwrap();
        assert_eq!(found, vec![TelType::Work, TelType::Voice, TelType::Pref]);
        assert_eq!(cursor.peek(), Some(':'));
    }

    #[test]
    fn qualifier_block_restores_foreign_parameter() {
        let mut cursor = Cursor::new(";TYPE=HOME;CHARSET=utf-8:x");
        let found: Vec<AddrType> = qualifiers(&mut cursor, &Tag::Adr).unwrap();
        assert_eq!(found, vec![AddrType::Home]);
        assert!(cursor.starts_with(";CHARSET"));
    }

    #[test]
    fn qualifier_casing_is_exact() {
        let err = qualifiers::<AddrType>(&mut Cursor::new(";TYPE=Home:"), &Tag::Adr).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ValueFormat);
        assert!(err.message.starts_with("ADR"));
    }

    #[test]
    fn type_tokens_optional() {
        let mut cursor = Cursor::new(";TYPE=X509;ENCODING=b:");
        assert_eq!(type_tokens(&mut cursor, &Tag::Key).unwrap(), vec![s("X509")]);
        assert!(cursor.starts_with(";ENCODING"));

        let mut cursor = Cursor::new(":abc");
        assert!(type_tokens(&mut cursor, &Tag::Uid).unwrap().is_empty());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn base64_body_unfolds() {
        let mut cursor = Cursor::new("aGVs\r\n bG8=\r\nFN:x");
        let body = base64_body(&mut cursor, "\r\n", &Tag::Photo).unwrap();
        assert_eq!(body.as_str(), "aGVsbG8=");
        assert!(cursor.starts_with("\r\nFN"));

        let mut cursor = Cursor::new("aGVs\n\tbG8=\n");
        let body = base64_body(&mut cursor, "\n", &Tag::Photo).unwrap();
        assert_eq!(body.decode_bytes().unwrap(), b"hello");
    }

    #[test]
    fn keyword_matches_whole_tokens() {
        let mut cursor = Cursor::new("TYPES=");
        assert!(!keyword(&mut cursor, params::TYPE));
        assert_eq!(cursor.offset(), 0);
        assert!(keyword(&mut Cursor::new("uri:"), params::URI));
        assert!(!keyword(&mut Cursor::new("Uri:"), params::URI));
    }
}
