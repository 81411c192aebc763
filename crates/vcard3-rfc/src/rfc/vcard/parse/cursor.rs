//! Character cursor with save/restore backtracking.

use super::error::Position;

/// A saved cursor location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Checkpoint(Position);

/// Reads a `&str` one character at a time.
///
/// All offsets are byte offsets into the input and always lie on character
/// boundaries. The line and column are updated as characters are consumed,
/// so [`Cursor::position`] is constant time.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    at: Position,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            at: Position {
                line: 1,
                column: 1,
                offset: 0,
            },
        }
    }

    pub(crate) fn save(&self) -> Checkpoint {
        Checkpoint(self.at)
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.at = checkpoint.0;
    }

    /// Returns the text consumed since `checkpoint`.
    pub(crate) fn since(&self, checkpoint: Checkpoint) -> &'a str {
        &self.input[checkpoint.0.offset..self.at.offset]
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.at.offset..]
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.at.offset >= self.input.len()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Moves past the next `len` bytes, counting lines and columns.
    fn advance(&mut self, len: usize) {
        let end = self.at.offset + len;
        for c in self.input[self.at.offset..end].chars() {
            if c == '\n' {
                self.at.line += 1;
                self.at.column = 1;
            } else {
                self.at.column += 1;
            }
        }
        self.at.offset = end;
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.advance(c.len_utf8());
        Some(c)
    }

    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance(expected.len_utf8());
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let c = self.peek().filter(|c| pred(*c))?;
        self.advance(c.len_utf8());
        Some(c)
    }

    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    pub(crate) fn eat_str(&mut self, expected: &str) -> bool {
        if self.starts_with(expected) {
            self.advance(expected.len());
            true
        } else {
            false
        }
    }

    /// Consumes the first of `alternatives` the input starts with.
    pub(crate) fn eat_any(&mut self, alternatives: &[&'static str]) -> Option<&'static str> {
        let found = alternatives
            .iter()
            .copied()
            .find(|alt| self.starts_with(alt))?;
        self.advance(found.len());
        Some(found)
    }

    pub(crate) fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.advance(len);
        &rest[..len]
    }

    #[cfg(test)]
    pub(crate) fn offset(&self) -> usize {
        self.at.offset
    }

    /// Returns the 1-based line and column of the next character.
    pub(crate) fn position(&self) -> Position {
        self.at
    }
}
