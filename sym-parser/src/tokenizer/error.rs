//! Errors raised while tokenizing.

use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::EXPR;

/// A character that cannot start any token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", character),
    labels = ["this character"],
    help = format!("expressions may only contain numbers, names, {}, parentheses and commas", "+ - * / % ^ !".fg(EXPR)),
)]
pub struct InvalidCharacter {
    /// The character that could not be tokenized.
    pub character: char,

    /// The byte offset of the character.
    pub offset: usize,
}

/// A numeric literal that is not a valid floating-point number, such as `1e` or `.`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", lexeme),
    labels = ["this number"],
    help = "numbers need at least one digit and must fit in a 64-bit float; an exponent marker must be followed by digits",
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub lexeme: String,

    /// The byte offset of the literal.
    pub offset: usize,
}
