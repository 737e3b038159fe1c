//! Numerical evaluation and symbolic transformations of expressions parsed by `sym-parser`.
//!
//! - [`numerical`]: [`Eval`] evaluates an expression to an `f64` in a [`Ctxt`].
//! - [`symbolic::simplify`]: a single bottom-up rewriting pass.
//! - [`symbolic::derivative`]: structural differentiation.
//! - [`symbolic::integrate`]: heuristic antiderivatives that leave an `integral(f, x)` marker for
//!   forms no rule covers.
//!
//! Every transformation takes its input by reference and returns a new tree.

pub mod approx;
pub mod funcs;
pub mod numerical;
pub mod symbolic;

pub use numerical::{ctxt::Ctxt, eval::Eval};
pub use symbolic::{
    derivative::derivative,
    integrate::{integrate, is_unsupported},
    simplify::{simplify, simplify_with_steps},
};

use sym_error::Error;
use sym_parser::Expr;

/// Evaluates the expression with the given context.
pub fn evaluate(expr: &Expr, ctxt: &Ctxt) -> Result<f64, Error> {
    expr.eval(ctxt)
}
