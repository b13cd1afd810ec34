//! Pull-driven lexing engine for caller-defined grammars.
//!
//! The crate provides the machinery of a tokenizer without committing to any
//! grammar: a [`Cursor`] over an in-memory input buffer, a [`Lexer`] that
//! drives a state machine of caller-supplied [`StateFn`] functions, and a
//! [`Token`] emission contract. The caller writes one state function per
//! scanning context; each function reads and advances the shared cursor,
//! emits zero or more tokens, and names the next state (or [`State::Done`]).
//!
//! Tokens are produced strictly on demand: nothing is scanned until
//! [`Lexer::next_token`] is called, and each state-function invocation
//! performs one bounded unit of classify-and-consume work.
//!
//! # Example
//!
//! ```
//! use statelex::{Lexer, State, TokenType};
//!
//! const NUMBER: TokenType = TokenType("NUMBER");
//!
//! fn lex_number(lexer: &mut Lexer<'_>) -> State {
//!     lexer.ignore_whitespace();
//!     if lexer.peek().is_none() {
//!         return State::Done;
//!     }
//!     lexer.accept_digits();
//!     lexer.emit(NUMBER);
//!     State::Next(lex_number)
//! }
//!
//! let mut lexer = Lexer::new("7 42 1999", State::Next(lex_number));
//! assert_eq!(lexer.next_token().literal, "7");
//! assert_eq!(lexer.next_token().literal, "42");
//! assert_eq!(lexer.next_token().literal, "1999");
//! assert!(lexer.next_token().is_eof());
//! ```

pub mod classify;
mod cursor;
mod lexer;
mod token;

pub use cursor::Cursor;
pub use lexer::{Lexer, State, StateFn};
pub use token::{Token, TokenType};
