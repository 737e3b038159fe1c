//! Derivatives of the builtin functions, with the chain rule applied.

use sym_error::Error;
use sym_parser::{ast::UnaryOp, keyword::{self, Keyword}, Expr};
use super::{differentiate, not_differentiable};

fn call(op: UnaryOp, arg: &Expr) -> Expr {
    Expr::unary(op, arg.clone())
}

/// `1 - u^2`
fn one_minus_square(u: &Expr) -> Expr {
    Expr::num(1.0) - u.clone().pow(Expr::num(2.0))
}

/// Computes `f'(u) * u'` for a unary operation `f`.
pub(super) fn unary_derivative(op: UnaryOp, u: &Expr, var: &str) -> Result<Expr, Error> {
    let outer = match op {
        UnaryOp::Negate => return Ok(-differentiate(u, var)?),
        UnaryOp::Floor | UnaryOp::Ceiling | UnaryOp::Round | UnaryOp::Sign => {
            return Ok(Expr::num(0.0));
        },
        UnaryOp::Factorial => return Err(not_differentiable(op.name())),
        UnaryOp::Sin => call(UnaryOp::Cos, u),
        UnaryOp::Cos => -call(UnaryOp::Sin, u),
        UnaryOp::Tan => Expr::num(1.0) / call(UnaryOp::Cos, u).pow(Expr::num(2.0)),
        UnaryOp::Asin => Expr::num(1.0) / Expr::unary(UnaryOp::Sqrt, one_minus_square(u)),
        UnaryOp::Acos => -(Expr::num(1.0) / Expr::unary(UnaryOp::Sqrt, one_minus_square(u))),
        UnaryOp::Atan => Expr::num(1.0) / (Expr::num(1.0) + u.clone().pow(Expr::num(2.0))),
        UnaryOp::Sinh => call(UnaryOp::Cosh, u),
        UnaryOp::Cosh => call(UnaryOp::Sinh, u),
        UnaryOp::Tanh => Expr::num(1.0) / call(UnaryOp::Cosh, u).pow(Expr::num(2.0)),
        UnaryOp::Exp => call(UnaryOp::Exp, u),
        UnaryOp::Ln => Expr::num(1.0) / u.clone(),
        UnaryOp::Log10 => Expr::num(1.0) / (u.clone() * call(UnaryOp::Ln, &Expr::num(10.0))),
        UnaryOp::Sqrt => Expr::num(1.0) / (Expr::num(2.0) * call(UnaryOp::Sqrt, u)),
        UnaryOp::Abs => call(UnaryOp::Sign, u),
    };

    Ok(outer * differentiate(u, var)?)
}

/// Computes the derivative of a call to a named function. Only the single-argument
/// trigonometric functions without an operator of their own have rules.
pub(super) fn named_derivative(name: &str, args: &[Expr], var: &str) -> Result<Expr, Error> {
    let [u] = args else {
        return Err(not_differentiable(name));
    };
    let named = |name: &str| Expr::call(name, vec![u.clone()]);

    let outer = match name {
        "sec" => named("sec") * call(UnaryOp::Tan, u),
        "csc" => -(named("csc") * named("cot")),
        "cot" => -(Expr::num(1.0) / call(UnaryOp::Sin, u).pow(Expr::num(2.0))),
        _ => return match keyword::function(name) {
            Some(Keyword::Unary(op)) => unary_derivative(op, u, var),
            _ => Err(not_differentiable(name)),
        },
    };

    Ok(outer * differentiate(u, var)?)
}
