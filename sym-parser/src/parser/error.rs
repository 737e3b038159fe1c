//! Errors raised while parsing.

use ariadne::Fmt;
use crate::tokenizer::TokenKind;
use sym_attrs::ErrorKind;
use sym_error::EXPR;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "operands must be joined with an operator, such as `*`",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is never closed", "expected `)` here"],
    help = format!("add a closing {}", ")".fg(EXPR)),
)]
pub struct UnclosedParenthesis;

/// A function name was not followed by an argument list.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument list for `{}`", name),
    labels = ["this function"],
    help = format!("call it with parentheses, such as {}", format!("{}(x)", name).fg(EXPR)),
)]
pub struct MissingCallParenthesis {
    /// The name of the function.
    pub name: String,
}

/// A function was called with no arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` was called with no arguments", name),
    labels = ["this call"],
    help = "every function takes at least one argument",
)]
pub struct EmptyCall {
    /// The name of the function.
    pub name: String,
}

/// A built-in function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of arguments for `{}`", name),
    labels = ["this call"],
    help = format!("`{}` takes exactly {} argument{}, but {} {} given", name, expected, if *expected == 1 { "" } else { "s" }, given, if *given == 1 { "was" } else { "were" }),
)]
pub struct ArgumentCount {
    /// The name of the function.
    pub name: String,

    /// The number of arguments the function takes.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// The second argument of `integral` was not a variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a variable",
    labels = ["this should be the variable of integration"],
)]
pub struct ExpectedVariable;
