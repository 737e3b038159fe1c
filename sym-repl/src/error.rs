//! Errors in REPL commands, as opposed to errors in the expressions they carry.

use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::EXPR;

/// The command after `:` is not known.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `:{}`", name),
    labels = ["this command"],
    help = format!(
        "available commands: {}",
        ":simplify :diff :int :vars :steps :tokens".fg(EXPR),
    ),
)]
pub struct UnknownCommand {
    /// The name of the command, without the colon.
    pub name: String,
}

/// A command is missing one of its arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument for `:{}`", command),
    labels = ["expected more here"],
    help = format!("usage: {}", usage.fg(EXPR)),
)]
pub struct MissingArgument {
    /// The name of the command.
    pub command: &'static str,

    /// How the command is used.
    pub usage: &'static str,
}

/// The left-hand side of an assignment is neither a name nor a function header.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid assignment target",
    labels = ["this cannot be assigned to"],
    help = format!(
        "assign to a variable, such as {}, or define a function, such as {}",
        "x = 2".fg(EXPR),
        "f(x) = x^2".fg(EXPR),
    ),
)]
pub struct InvalidAssignment;

/// A command expected a variable name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a variable name", name),
    labels = ["expected a variable here"],
)]
pub struct ExpectedVariable {
    /// What was found instead.
    pub name: String,
}
