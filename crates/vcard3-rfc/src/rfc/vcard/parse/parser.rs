//! vCard document parser.

use std::iter::FusedIterator;
use std::num::NonZeroU32;

use vcard3_core::config::CodecConfig;
use vcard3_core::constants::{BEGIN_PREFIX, CRLF, END_PREFIX, LF, VCARD_KEYWORD, VCARD_KEYWORD_ALT};

use super::cursor::Cursor;
use super::error::{ParseError, ParseResult};
use super::values::{STOP_CHARS, is_token_char};
use crate::rfc::vcard::core::{Document, Entry, Tag, VCard};

const VCARD_KEYWORDS: [&str; 2] = [VCARD_KEYWORD, VCARD_KEYWORD_ALT];

/// Decodes vCard text with a fixed [`CodecConfig`].
///
/// A decoder holds no state between calls and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: CodecConfig,
}

impl Decoder {
    /// Creates a decoder.
    ///
    /// A `max_nesting_depth` above `MAX_NESTING_DEPTH` is not honored; the
    /// decoder stops at the ceiling instead.
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        if config.nesting_limit() < config.max_nesting_depth {
            tracing::warn!(
                requested = config.max_nesting_depth,
                limit = config.nesting_limit(),
                "AGENT nesting depth capped"
            );
        }
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes a whole document.
    ///
    /// ## Summary
    /// Parses every vCard in `input`. Empty input yields an empty document.
    ///
    /// ## Errors
    /// Returns the first parse error encountered; no partial document is
    /// produced.
    #[tracing::instrument(skip(self, input), fields(input_len = input.len()))]
    pub fn decode(&self, input: &str) -> ParseResult<Document> {
        tracing::debug!("Decoding vCard document");

        let document = self.cards(input).collect::<ParseResult<Document>>()?;

        tracing::debug!(count = document.len(), "Decoded vCards");

        Ok(document)
    }

    /// Streams the vCards of a document one at a time.
    ///
    /// The iterator stops after the first error.
    #[must_use]
    pub fn cards<'a>(&'a self, input: &'a str) -> CardIter<'a> {
        CardIter {
            parser: Parser::new(input, &self.config),
            state: IterState::Start,
        }
    }
}

/// Decodes a document with the default configuration.
///
/// ## Summary
/// Convenience wrapper around [`Decoder::decode`].
///
/// ## Errors
/// Returns a parse error if the document is malformed.
///
/// ## Example
///
/// ```rust
/// use vcard3_rfc::rfc::vcard::decode;
///
/// let doc = decode("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:John Doe\r\nEND:VCARD").unwrap();
/// assert_eq!(doc.cards()[0].formatted_name().unwrap(), "John Doe");
/// ```
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn decode(input: &str) -> ParseResult<Document> {
    Decoder::default().decode(input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IterState {
    Start,
    Running,
    Done,
}

/// Lazy iterator over the vCards of a document.
///
/// Single pass; yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct CardIter<'a> {
    parser: Parser<'a>,
    state: IterState,
}

impl CardIter<'_> {
    fn advance(&mut self) -> ParseResult<Option<VCard>> {
        match self.state {
            IterState::Done => return Ok(None),
            IterState::Start => {
                if self.parser.cursor.is_eof() {
                    return Ok(None);
                }
            }
            IterState::Running => {
                if !self.parser.card_separator()? {
                    return Ok(None);
                }
            }
        }

        self.state = IterState::Running;
        self.parser.vcard().map(Some)
    }
}

impl Iterator for CardIter<'_> {
    type Item = ParseResult<VCard>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(Some(card)) => Some(Ok(card)),
            Ok(None) => {
                self.state = IterState::Done;
                None
            }
            Err(err) => {
                tracing::debug!(%err, "vCard decoding failed");
                self.state = IterState::Done;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for CardIter<'_> {}

#[derive(Debug, Clone)]
pub(super) struct Parser<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) config: &'a CodecConfig,
    /// `AGENT` nesting level of the vCard being parsed; 0 at top level.
    pub(super) depth: usize,
}

impl<'a> Parser<'a> {
    pub(super) fn new(input: &'a str, config: &'a CodecConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            depth: 0,
        }
    }

    /// Line ending of entries at the current depth.
    pub(super) fn terminator(&self) -> &'static str {
        if self.depth == 0 { CRLF } else { LF }
    }

    /// Consumes the newline between two top-level vCards.
    ///
    /// Returns `false` at the end of input, including after a trailing
    /// newline.
    fn card_separator(&mut self) -> ParseResult<bool> {
        if self.cursor.is_eof() {
            return Ok(false);
        }
        if !(self.cursor.eat_str(LF) || self.cursor.eat_str(CRLF)) {
            return Err(ParseError::structural(
                self.cursor.position(),
                "expected a newline after END:VCARD",
            ));
        }
        Ok(!self.cursor.is_eof())
    }

    /// Parses `BEGIN:VCARD`, one or more entries and `END:VCARD`.
    pub(super) fn vcard(&mut self) -> ParseResult<VCard> {
        let start = self.cursor.position();
        self.begin_line()?;

        let mut entries = Vec::new();
        loop {
            if self.cursor.eat_str(END_PREFIX) {
                self.vcard_keyword(END_PREFIX)?;
                break;
            }
            if self.cursor.is_eof() {
                return Err(ParseError::structural(
                    self.cursor.position(),
                    "unexpected end of input before END:VCARD",
                ));
            }
            if self.cursor.starts_with(BEGIN_PREFIX) {
                return Err(ParseError::structural(
                    self.cursor.position(),
                    "BEGIN:VCARD inside a vCard; nested vCards must be AGENT values",
                ));
            }
            entries.push(self.entry()?);
        }

        tracing::trace!(entries = entries.len(), depth = self.depth, "Parsed vCard");

        VCard::new(entries).map_err(|err| ParseError::structural(start, err.to_string()))
    }

    fn begin_line(&mut self) -> ParseResult<()> {
        if !self.cursor.eat_str(BEGIN_PREFIX) {
            return Err(ParseError::structural(
                self.cursor.position(),
                "expected BEGIN:VCARD",
            ));
        }
        self.vcard_keyword(BEGIN_PREFIX)?;
        self.expect_terminator()
    }

    fn vcard_keyword(&mut self, prefix: &str) -> ParseResult<()> {
        if self.cursor.eat_any(&VCARD_KEYWORDS).is_some() {
            Ok(())
        } else {
            Err(ParseError::structural(
                self.cursor.position(),
                format!("expected VCARD or vCard after {prefix}"),
            ))
        }
    }

    /// Parses a vCard embedded in an `AGENT` value one level deeper.
    pub(super) fn nested_vcard(&mut self) -> ParseResult<VCard> {
        let limit = self.config.nesting_limit();
        if self.depth >= limit {
            return Err(ParseError::recursion_limit(self.cursor.position(), limit));
        }

        self.depth += 1;
        let card = self.vcard();
        self.depth -= 1;
        card
    }

    /// Parses one record: optional `item<N>.` prefix, tag, payload and
    /// terminator.
    fn entry(&mut self) -> ParseResult<Entry> {
        let prefix = self.prefix();

        let at = self.cursor.position();
        let token = self.cursor.take_while(is_token_char);
        let tag = Tag::from_keyword(token).ok_or_else(|| ParseError::unknown_tag(at, token))?;
        if tag == Tag::Item {
            return Err(ParseError::value_format(
                at,
                &tag,
                "group marker must be followed by a number and '.'",
            ));
        }

        let property = self.property(&tag)?;
        self.finish_record(&tag)?;

        tracing::trace!(%tag, group = prefix.map(NonZeroU32::get), "Parsed entry");

        Entry::new(prefix, tag, property).map_err(|err| ParseError::structural(at, err.to_string()))
    }

    /// Consumes an `item<N>.` group prefix if present.
    fn prefix(&mut self) -> Option<NonZeroU32> {
        let checkpoint = self.cursor.save();
        let group = self
            .cursor
            .eat_any(Tag::Item.alternatives())
            .and_then(|_| self.cursor.take_while(|c| c.is_ascii_digit()).parse().ok())
            .and_then(NonZeroU32::new)
            .filter(|_| self.cursor.eat('.'));

        if group.is_none() {
            self.cursor.restore(checkpoint);
        }
        group
    }

    /// Requires the record to end here.
    fn finish_record(&mut self, tag: &Tag) -> ParseResult<()> {
        let at = self.cursor.position();
        match self.cursor.peek() {
            None => Err(ParseError::structural(
                at,
                format!("unexpected end of input in {tag} record"),
            )),
            Some('\r' | '\n') => self.expect_terminator(),
            Some(c) if STOP_CHARS.contains(&c) => Err(ParseError::escape(
                at,
                format!("unescaped '{c}' in {tag} value"),
            )),
            Some(c) => Err(ParseError::value_format(
                at,
                tag,
                format!("unexpected character {c:?}"),
            )),
        }
    }

    fn expect_terminator(&mut self) -> ParseResult<()> {
        let terminator = self.terminator();
        if self.cursor.eat_str(terminator) {
            Ok(())
        } else {
            let expected = if self.depth == 0 { "CRLF" } else { "LF" };
            Err(ParseError::structural(
                self.cursor.position(),
                format!("expected {expected} line ending"),
            ))
        }
    }
}
