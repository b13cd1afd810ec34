//! Pull-loop driver over caller-supplied state functions.
//!
//! The driver owns the [`Cursor`], a small FIFO of emitted-but-not-yet
//! returned tokens, and the current [`State`]. Each [`next_token()`]
//! call either drains the FIFO or invokes the current state function until
//! something is queued or the machine reaches [`State::Done`].
//!
//! States are plain function pointers, so a grammar of mutually recursive
//! states is written as ordinary `fn` items referring to each other by name:
//!
//! ```text
//! source --> StateFn --> StateFn --> ... --> State::Done
//!               |            |
//!             emit()       emit() / errorf()
//! ```
//!
//! [`next_token()`]: Lexer::next_token

use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

use crate::cursor::Cursor;
use crate::token::{Token, TokenType};

/// One unit of scanning logic supplied by the consumer.
///
/// A state function reads and advances the lexer's cursor, emits zero or
/// more tokens, and returns the next state. Being a plain `fn` pointer, it
/// carries no captured environment; all scanning state lives in the
/// [`Lexer`] it receives.
pub type StateFn = for<'s> fn(&mut Lexer<'s>) -> State;

/// The machine's next move: another state function, or stop.
#[derive(Clone, Copy, Debug)]
pub enum State {
    /// Continue scanning in the given state.
    Next(StateFn),
    /// Terminal: no further scanning possible. Reaching this through
    /// [`Lexer::errorf`] is an abnormal halt; returning it directly is
    /// ordinary completion. The distinction is carried entirely by whether
    /// an [`ILLEGAL`](TokenType::ILLEGAL) token was queued.
    Done,
}

/// Inline capacity of the pending-token FIFO. One state-function step may
/// emit more than one token before the driver next drains the queue; two
/// covers the common emit-then-fail step without heap allocation.
const PENDING_INLINE: usize = 2;

/// Pull-based lexer driving consumer state functions over one input.
///
/// Created once per input via [`Lexer::new`]; the position only ever moves
/// forward except for the cursor's single-step backup. Once terminal, every
/// further [`next_token()`](Lexer::next_token) yields `EOF` forever.
///
/// A `Lexer` owns its cursor and queue exclusively; it is not synchronized
/// and must be driven from a single logical thread of control. Separate
/// instances are fully independent.
pub struct Lexer<'s> {
    cursor: Cursor<'s>,
    /// Emitted-but-not-yet-returned tokens, drained in emission order.
    pending: SmallVec<[Token<'s>; PENDING_INLINE]>,
    state: State,
}

impl<'s> Lexer<'s> {
    /// Create a lexer over `input` starting in `initial`.
    ///
    /// `initial` may be [`State::Done`] for a no-op scanner that only ever
    /// yields `EOF`.
    pub fn new(input: &'s str, initial: State) -> Self {
        Self {
            cursor: Cursor::new(input),
            pending: SmallVec::new(),
            state: initial,
        }
    }

    /// Produce the next token.
    ///
    /// Drains the oldest pending token if any; otherwise runs the current
    /// state function (replacing the current state with its result) until a
    /// token is queued or the machine is terminal. Once terminal this
    /// returns a fresh `{EOF, ""}` token, idempotently, forever.
    pub fn next_token(&mut self) -> Token<'s> {
        loop {
            if !self.pending.is_empty() {
                return self.pending.remove(0);
            }
            match self.state {
                State::Done => return Token::eof(),
                State::Next(step) => self.state = step(self),
            }
        }
    }

    /// Package the text accumulated since the last emission as a
    /// `Token { kind, lexeme }`, enqueue it, and start accumulating afresh.
    pub fn emit(&mut self, kind: TokenType) {
        let literal = self.cursor.lexeme();
        trace!(%kind, literal, "emit");
        self.pending.push(Token::new(kind, literal));
        self.cursor.ignore();
    }

    /// Queue an [`ILLEGAL`](TokenType::ILLEGAL) token carrying `message` and
    /// return the terminal state. The only abnormal halt: tokens emitted
    /// earlier in the same step drain first, then the diagnostic, then `EOF`
    /// forever.
    ///
    /// Intended to be returned from the state function:
    ///
    /// ```
    /// use statelex::{Lexer, State};
    ///
    /// fn lex_fail(lexer: &mut Lexer<'_>) -> State {
    ///     let found = lexer.peek();
    ///     lexer.errorf(format_args!("unexpected {found:?}"))
    /// }
    /// # let mut lexer = Lexer::new("?", State::Next(lex_fail));
    /// # assert!(lexer.next_token().is_illegal());
    /// ```
    pub fn errorf(&mut self, message: impl fmt::Display) -> State {
        let message = message.to_string();
        trace!(message = %message, "scanning halted");
        self.pending.push(Token::new(TokenType::ILLEGAL, message));
        State::Done
    }

    // The cursor surface, re-exposed so a state function works against a
    // single receiver.

    /// See [`Cursor::next_char`].
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        self.cursor.next_char()
    }

    /// See [`Cursor::backup`].
    #[inline]
    pub fn backup(&mut self) {
        self.cursor.backup();
    }

    /// See [`Cursor::peek`].
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.cursor.peek()
    }

    /// See [`Cursor::ignore`].
    #[inline]
    pub fn ignore(&mut self) {
        self.cursor.ignore();
    }

    /// See [`Cursor::ignore_whitespace`].
    #[inline]
    pub fn ignore_whitespace(&mut self) {
        self.cursor.ignore_whitespace();
    }

    /// See [`Cursor::accept`].
    #[inline]
    pub fn accept(&mut self, valid: &str) -> bool {
        self.cursor.accept(valid)
    }

    /// See [`Cursor::accept_run`].
    #[inline]
    pub fn accept_run(&mut self, valid: &str) {
        self.cursor.accept_run(valid);
    }

    /// See [`Cursor::accept_alpha`].
    #[inline]
    pub fn accept_alpha(&mut self) {
        self.cursor.accept_alpha();
    }

    /// See [`Cursor::accept_digits`].
    #[inline]
    pub fn accept_digits(&mut self) {
        self.cursor.accept_digits();
    }

    /// See [`Cursor::accept_sequence`].
    #[inline]
    pub fn accept_sequence(&mut self, literal: &str) -> bool {
        self.cursor.accept_sequence(literal)
    }

    /// See [`Cursor::lexeme`].
    #[inline]
    pub fn lexeme(&self) -> &'s str {
        self.cursor.lexeme()
    }

    /// See [`Cursor::rest`].
    #[inline]
    pub fn rest(&self) -> &'s str {
        self.cursor.rest()
    }
}

/// Iterator sugar over [`Lexer::next_token`]: yields tokens up to, and
/// exclusive of, the terminal `EOF`.
impl<'s> Iterator for Lexer<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("cursor", &self.cursor)
            .field("pending", &self.pending)
            .field("state", &self.state)
            .finish()
    }
}
