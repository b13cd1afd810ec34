//! Scanning cursor over an immutable in-memory input buffer.
//!
//! The cursor decodes one code point at a time and tracks three offsets:
//! `start` (beginning of the text accumulated for the next token), `pos`
//! (next byte to decode), and `last_width` (encoded byte length of the most
//! recently decoded code point). End of input is `None` from
//! [`next_char()`](Cursor::next_char) / [`peek()`](Cursor::peek) -- the
//! input is `&str`, so every in-bounds position decodes successfully.
//!
//! # Backup contract
//!
//! [`backup()`](Cursor::backup) undoes exactly one
//! [`next_char()`](Cursor::next_char) and is only meaningful immediately
//! after it. Rather than leaving a second consecutive `backup()` undefined,
//! the cursor zeroes `last_width` on every operation that invalidates the
//! undo (`backup`, `ignore`, `accept_sequence`), making a contract violation
//! an inert no-op instead of silent position corruption.

use crate::classify;

/// Position bookkeeping with single-step lookahead and backup.
///
/// # Invariant
///
/// `0 <= start <= pos <= input.len()`, with both offsets always on UTF-8
/// character boundaries.
#[derive(Clone, Debug)]
pub struct Cursor<'s> {
    /// Immutable input buffer, fixed for the lifetime of one scan.
    input: &'s str,
    /// Offset of the beginning of the token currently being accumulated.
    start: usize,
    /// Offset of the next code point to decode.
    pos: usize,
    /// Byte length of the most recently decoded code point; 0 when no undo
    /// is available (nothing read yet, end of input, or invalidated).
    last_width: usize,
}

impl<'s> Cursor<'s> {
    /// Create a cursor positioned at the start of `input`.
    pub fn new(input: &'s str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            last_width: 0,
        }
    }

    /// Decode and return the code point at the current position, advancing
    /// past it. Returns `None` at end of input (and records that no undo is
    /// available).
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        match self.rest().chars().next() {
            Some(c) => {
                self.last_width = c.len_utf8();
                self.pos += self.last_width;
                Some(c)
            }
            None => {
                self.last_width = 0;
                None
            }
        }
    }

    /// Rewind past the most recently decoded code point.
    ///
    /// Valid only immediately after [`next_char()`](Self::next_char); at any
    /// other time (including twice in a row) this is a no-op.
    #[inline]
    pub fn backup(&mut self) {
        self.pos -= self.last_width;
        self.last_width = 0;
    }

    /// Return the code point at the current position without consuming it.
    /// Idempotent.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Discard everything consumed since the last emission or ignore,
    /// without producing a token.
    #[inline]
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.last_width = 0;
    }

    /// Consume exactly one code point if it is a member of `valid`;
    /// otherwise leave the position unchanged and return `false`.
    pub fn accept(&mut self, valid: &str) -> bool {
        if self.next_char().is_some_and(|c| valid.contains(c)) {
            return true;
        }
        self.backup();
        false
    }

    /// Consume the maximal contiguous run of code points that are members
    /// of `valid`. A zero-length run is legal (position unchanged).
    pub fn accept_run(&mut self, valid: &str) {
        while self.next_char().is_some_and(|c| valid.contains(c)) {}
        self.backup();
    }

    /// Consume the maximal contiguous run of ASCII letters and underscores.
    pub fn accept_alpha(&mut self) {
        while self.next_char().is_some_and(classify::is_alpha) {}
        self.backup();
    }

    /// Consume the maximal contiguous run of ASCII decimal digits.
    pub fn accept_digits(&mut self) {
        while self.next_char().is_some_and(classify::is_digit) {}
        self.backup();
    }

    /// Consume `literal` if the input at the current position starts with
    /// exactly that text; otherwise leave the position unchanged and return
    /// `false`. A literal longer than the remaining input fails cleanly.
    ///
    /// Advances by the literal's encoded byte length, not its code-point
    /// count.
    pub fn accept_sequence(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            self.last_width = 0;
            return true;
        }
        false
    }

    /// Consume and discard whitespace code points until a non-whitespace
    /// code point or end of input, leaving the cursor just before the first
    /// non-whitespace code point. Consuming nothing leaves `start` untouched.
    pub fn ignore_whitespace(&mut self) {
        while self.peek().is_some_and(classify::is_space) {
            self.next_char();
            self.ignore();
        }
    }

    /// The text accumulated since the last emission or ignore -- what the
    /// next emitted token's literal would be.
    #[inline]
    pub fn lexeme(&self) -> &'s str {
        &self.input[self.start..self.pos]
    }

    /// The unconsumed remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'s str {
        &self.input[self.pos..]
    }

    /// Current byte offset into the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }
}
