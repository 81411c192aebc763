//! vCard parse error types.

use std::fmt;

use crate::rfc::vcard::core::Tag;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A location in the decoded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number (1-based).
    pub line: usize,
    /// Column in characters (1-based).
    pub column: usize,
    /// Byte offset from the start of the input.
    pub offset: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An error that occurred during vCard parsing.
///
/// Decoding stops at the first error; no partial document is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Column where the error occurred (1-based).
    pub column: usize,
    /// Byte offset where the error occurred.
    pub offset: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, position: Position, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: position.line,
            column: position.column,
            offset: position.offset,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Creates an error for missing or mismatched `BEGIN`/`END` lines and
    /// truncated records.
    #[must_use]
    pub fn structural(position: Position, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Structural, position, message)
    }

    /// Creates an error for a tag that is neither known nor an extension.
    #[must_use]
    pub fn unknown_tag(position: Position, token: &str) -> Self {
        let message = if token.is_empty() {
            "expected a property name".to_string()
        } else {
            format!("unknown property {token:?}")
        };
        Self::new(ParseErrorKind::UnknownTag, position, message)
    }

    /// Creates an error for a payload that does not match its tag's grammar.
    #[must_use]
    pub fn value_format(position: Position, tag: &Tag, message: impl fmt::Display) -> Self {
        Self::new(
            ParseErrorKind::ValueFormat,
            position,
            format!("{tag}: {message}"),
        )
    }

    #[must_use]
    pub fn escape(position: Position, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Escape, position, message)
    }

    #[must_use]
    pub fn date_format(position: Position, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::DateFormat, position, message)
    }

    #[must_use]
    pub fn numeric_format(position: Position, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::NumericFormat, position, message)
    }

    #[must_use]
    pub fn recursion_limit(position: Position, max_depth: usize) -> Self {
        Self::new(
            ParseErrorKind::RecursionLimit,
            position,
            format!("AGENT vCards nested deeper than {max_depth} levels"),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {}: {}: {}",
            self.line, self.column, self.kind, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Missing or mismatched `BEGIN`/`END`, or a record cut short.
    Structural,
    /// Property name that is neither a known tag nor `X-` prefixed.
    UnknownTag,
    /// Payload does not match the shape its tag requires.
    ValueFormat,
    /// Dangling backslash, invalid escape, or an unescaped stop character.
    Escape,
    /// Invalid date or time.
    DateFormat,
    /// Invalid number.
    NumericFormat,
    /// `AGENT` nesting deeper than the configured maximum.
    RecursionLimit,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural => write!(f, "structural error"),
            Self::UnknownTag => write!(f, "unknown tag"),
            Self::ValueFormat => write!(f, "invalid value"),
            Self::Escape => write!(f, "escape error"),
            Self::DateFormat => write!(f, "invalid date/time"),
            Self::NumericFormat => write!(f, "invalid number"),
            Self::RecursionLimit => write!(f, "recursion limit exceeded"),
        }
    }
}
