//! Integration by parts, for a fixed set of products.

use sym_parser::{ast::{BinaryOp, UnaryOp}, Expr};
use super::is_euler;

/// Integrates `x*e^x`, `x*exp(x)`, `x*sin(x)` and `x*cos(x)`, with the factors in either order.
/// Returns [`None`] for any other product.
pub(super) fn by_parts(lhs: &Expr, rhs: &Expr, var: &str) -> Option<Expr> {
    let other = if lhs.is_var(var) {
        rhs
    } else if rhs.is_var(var) {
        lhs
    } else {
        return None;
    };
    let x = || Expr::var(var);

    match other {
        // ∫x*e^x = (x - 1)*e^x
        Expr::Unary(UnaryOp::Exp, arg) if arg.is_var(var) => {
            Some((x() - Expr::num(1.0)) * other.clone())
        },
        Expr::Binary(BinaryOp::Power, base, exp) if is_euler(base) && exp.is_var(var) => {
            Some((x() - Expr::num(1.0)) * other.clone())
        },

        // ∫x*sin(x) = sin(x) - x*cos(x)
        Expr::Unary(UnaryOp::Sin, arg) if arg.is_var(var) => {
            Some(other.clone() - x() * Expr::unary(UnaryOp::Cos, x()))
        },

        // ∫x*cos(x) = cos(x) + x*sin(x)
        Expr::Unary(UnaryOp::Cos, arg) if arg.is_var(var) => {
            Some(other.clone() + x() * Expr::unary(UnaryOp::Sin, x()))
        },

        _ => None,
    }
}
