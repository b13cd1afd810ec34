//! Token and token-type vocabulary.
//!
//! Token types are an open domain: each consumer defines its own vocabulary
//! as `TokenType` constants. Two values are reserved by the engine itself:
//! [`TokenType::EOF`] (end of input, literal always empty) and
//! [`TokenType::ILLEGAL`] (scanning failure, literal carries the diagnostic).

use std::borrow::Cow;
use std::fmt;

/// Symbolic token classification.
///
/// A thin copyable newtype over a static name. Consumers declare their own
/// vocabulary as constants:
///
/// ```
/// use statelex::TokenType;
///
/// const IDENT: TokenType = TokenType("IDENT");
/// assert_ne!(IDENT, TokenType::EOF);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenType(pub &'static str);

impl TokenType {
    /// End of input. Emitted by the driver, never by a state function.
    /// Its literal is always empty.
    pub const EOF: Self = Self("EOF");

    /// Scanning failure. Queued by [`Lexer::errorf`](crate::Lexer::errorf);
    /// its literal is a human-readable diagnostic rather than input text.
    pub const ILLEGAL: Self = Self("ILLEGAL");

    /// The symbolic name of this token type.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One emitted lexical unit: a type tag plus the literal text it covers.
///
/// Literals borrow from the input buffer when emitted via
/// [`Lexer::emit`](crate::Lexer::emit); diagnostic text from
/// [`Lexer::errorf`](crate::Lexer::errorf) is owned. Immutable once emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'s> {
    /// Symbolic classification, from the consumer's vocabulary or one of
    /// the reserved values.
    pub kind: TokenType,
    /// Exact substring consumed for this token, or the diagnostic message
    /// when `kind` is [`TokenType::ILLEGAL`].
    pub literal: Cow<'s, str>,
}

impl<'s> Token<'s> {
    /// Create a token from a kind and literal text.
    pub fn new(kind: TokenType, literal: impl Into<Cow<'s, str>>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// A fresh end-of-input token (empty literal).
    pub fn eof() -> Self {
        Self {
            kind: TokenType::EOF,
            literal: Cow::Borrowed(""),
        }
    }

    /// Returns `true` if this is the reserved end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::EOF
    }

    /// Returns `true` if this token reports a scanning failure.
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenType::ILLEGAL
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.literal)
    }
}

#[cfg(test)]
mod tests;
