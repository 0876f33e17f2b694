//! Source buffer with a token start and a cursor.

use log::trace;

use std::fmt;

/// Immutable SQL text plus two byte offsets.
///
/// `start` marks the beginning of the token being scanned and `cursor`
/// the current position. Both only move forward and always sit on a
/// `char` boundary.
pub struct Scanner<'input> {
    /// The text being tokenized
    input: &'input str,
    /// start of the current token
    start: usize,
    /// current position
    cursor: usize,
}

impl<'input> Scanner<'input> {
    pub fn new(input: &'input str) -> Scanner<'input> {
        Scanner {
            input,
            start: 0,
            cursor: 0,
        }
    }

    /// Unconsumed input
    pub fn rest(&self) -> &'input str {
        &self.input[self.cursor..]
    }

    /// Character under the cursor, `None` at end of input
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// `n`th character after the cursor (`look_ahead(0) == peek()`)
    pub fn look_ahead(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Character just before the cursor, `None` at start of input
    pub fn look_behind(&self) -> Option<char> {
        self.input[..self.cursor].chars().next_back()
    }

    /// Start a new token at the cursor
    pub fn mark(&mut self) {
        self.start = self.cursor;
    }

    /// Consume one character and return the new current one
    pub fn bump(&mut self) -> Option<char> {
        if let Some(c) = self.peek() {
            self.consume(c.len_utf8());
        }
        self.peek()
    }

    /// Consume `n` characters (fewer at end of input)
    pub fn bump_by(&mut self, n: usize) -> Option<char> {
        let amt = self
            .rest()
            .char_indices()
            .nth(n)
            .map_or(self.input.len() - self.cursor, |(i, _)| i);
        self.consume(amt);
        self.peek()
    }

    /// Consume characters while `pred` holds
    pub fn bump_while<P: FnMut(char) -> bool>(&mut self, mut pred: P) {
        let amt = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.input.len() - self.cursor, |(i, _)| i);
        self.consume(amt);
    }

    /// Consume everything up to the end of input
    pub fn bump_to_end(&mut self) {
        self.consume(self.input.len() - self.cursor);
    }

    /// Consume `amt` bytes of the input.
    ///
    /// `amt` must land on a `char` boundary.
    pub fn consume(&mut self, amt: usize) {
        trace!(target: "scanner", "consume({})", amt);
        debug_assert!(self.cursor + amt <= self.input.len());
        debug_assert!(self.input.is_char_boundary(self.cursor + amt));
        self.cursor += amt;
    }

    /// Text between the token start and the cursor
    pub fn lexeme(&self) -> &'input str {
        &self.input[self.start..self.cursor]
    }
}

impl<'input> fmt::Debug for Scanner<'input> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("start", &self.start)
            .field("cursor", &self.cursor)
            .field("len", &self.input.len())
            .finish()
    }
}
