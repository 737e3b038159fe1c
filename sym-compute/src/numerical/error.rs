//! Errors raised while evaluating an expression.

use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::EXPR;

/// The variable is not bound in the context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", name),
    labels = ["this variable"],
    help = format!("to define it, type: {} = {}", name.fg(EXPR), "<expression>".fg(EXPR)),
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,
}

/// The function is neither built in nor defined in the context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        "define it first, such as `f(x) = x^2`".to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", suggestions[0].as_str().fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.as_str().fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function takes {} argument(s), but {} were given", name, expected, given),
    labels = ["this function call"],
)]
pub struct ArgumentCount {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// An argument is outside the domain the function accepts, such as `factorial(-1)`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid argument `{}` to `{}`", value, function),
    labels = ["this argument"],
    help = format!("the argument {}", reason),
)]
pub struct InvalidArgument {
    /// The function that rejected the argument.
    pub function: &'static str,

    /// The rejected value.
    pub value: f64,

    /// What the argument must satisfy.
    pub reason: &'static str,
}

/// The exact result of an integer-only function is too large to represent.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the result of `{}` is too large", function),
    labels = ["this call"],
    help = match limit {
        Some(limit) => format!("the largest accepted argument is {}", limit),
        None => format!("results must be exact integers no larger than {}", "2^53".fg(EXPR)),
    },
)]
pub struct Overflow {
    /// The function whose result overflowed.
    pub function: &'static str,

    /// The largest argument accepted, if the limit is a fixed argument threshold.
    pub limit: Option<u64>,
}

/// A user-defined function recursed too deeply.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "maximum recursion depth reached",
    labels = ["this function call"],
    help = format!("`{}` calls itself, directly or indirectly, with no way to stop", name),
)]
pub struct StackOverflow {
    /// The function that was being called.
    pub name: String,
}

/// An `integral(f, x)` marker has no numerical value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot evaluate an unsolved integral",
    labels = ["this integral"],
    help = format!("no antiderivative with respect to `{}` was found for this expression", var),
)]
pub struct UnevaluatedIntegral {
    /// The variable of integration.
    pub var: String,
}
