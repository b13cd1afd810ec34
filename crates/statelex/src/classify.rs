//! Stateless code-point classification predicates.
//!
//! Pure helpers over a single decoded code point, intended for use inside
//! consumer state functions (`lexer.peek().is_some_and(classify::is_alpha)`).
//! The engine itself only uses [`is_space`], for
//! [`Cursor::ignore_whitespace`](crate::Cursor::ignore_whitespace).

/// Returns `true` for Unicode whitespace (space, tab, newline, NBSP, ...).
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Returns `true` for an ASCII decimal digit (`0-9`).
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` for an ASCII letter or underscore.
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` for a line terminator (`\n` or `\r`).
#[inline]
pub fn is_end_of_line(c: char) -> bool {
    c == '\n' || c == '\r'
}
