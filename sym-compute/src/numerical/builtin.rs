use super::ctxt::IntegerMode;
use sym_error::Error;

/// A trait implemented by all builtin functions that are represented as function nodes, such as
/// `min(a, b)` or `sec(x)`.
pub trait Builtin: std::fmt::Debug + Send + Sync {
    /// Returns the name of the function.
    fn name(&self) -> &'static str;

    /// The exact number of arguments the function takes.
    fn num_args(&self) -> usize;

    /// Evaluates the function. The number of arguments has already been checked.
    fn eval(&self, mode: IntegerMode, args: &[f64]) -> Result<f64, Error>;
}
