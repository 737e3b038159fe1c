//! Quotients.

use crate::{approx::is_const, numerical::{ctxt::Ctxt, eval::Eval}};
use sym_parser::{ast::{BinaryOp, UnaryOp}, Expr};
use super::{antiderivative, slope, solved, Integration};

/// Integrates `num / den`.
pub(super) fn quotient(expr: &Expr, num: &Expr, den: &Expr, var: &str) -> Integration {
    if is_const(num, 1.0) && den.is_var(var) {
        return solved("reciprocal", expr, Expr::unary(UnaryOp::Ln, den.clone()));
    }

    if !den.contains_var(var) {
        return match antiderivative(num, var) {
            Integration::Solved(result) => solved("constant divisor", expr, result / den.clone()),
            Integration::Unsupported(_) => Integration::Unsupported(expr.clone()),
        };
    }

    if !num.contains_var(var) {
        if let Some(result) = reciprocal(den, var) {
            let result = if is_const(num, 1.0) { result } else { num.clone() * result };
            return solved("rational", expr, result);
        }
    }

    Integration::Unsupported(expr.clone())
}

/// Returns the antiderivative of `1 / den`.
///
/// - `1/x` → `ln(x)`
/// - `1/(a*x + b)` → `ln(|a*x + b|) / a`
/// - `1/(x^2 + c)`, `c > 0` → `atan(x/√c) / √c`
fn reciprocal(den: &Expr, var: &str) -> Option<Expr> {
    if den.is_var(var) {
        return Some(Expr::unary(UnaryOp::Ln, den.clone()));
    }

    if let Some(slope) = slope(den, var) {
        let ln = Expr::unary(UnaryOp::Ln, Expr::unary(UnaryOp::Abs, den.clone()));
        return Some(ln / slope);
    }

    let (square, c) = match den {
        Expr::Binary(BinaryOp::Add, lhs, rhs) if !rhs.contains_var(var) => (lhs, rhs),
        Expr::Binary(BinaryOp::Add, lhs, rhs) if !lhs.contains_var(var) => (rhs, lhs),
        _ => return None,
    };
    let Expr::Binary(BinaryOp::Power, base, exp) = &**square else {
        return None;
    };
    if !base.is_var(var) || !is_const(exp, 2.0) {
        return None;
    }

    let c = c.eval(&Ctxt::new()).ok().filter(|c| *c > 0.0)?;
    let root = Expr::num(c.sqrt());
    let x = Expr::var(var);
    Some(Expr::unary(UnaryOp::Atan, x / root.clone()) / root)
}
