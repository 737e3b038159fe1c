//! Errors raised by symbolic transformations.

use sym_attrs::ErrorKind;

/// The expression contains a function with no derivative rule, such as `min(x, y)`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate `{}`", function),
    labels = ["this function"],
    help = "only single-argument elementary functions have derivative rules",
)]
pub struct NotDifferentiable {
    /// The name of the function.
    pub function: String,
}
