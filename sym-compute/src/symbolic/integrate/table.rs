//! Antiderivatives of the elementary functions.

use sym_parser::{ast::UnaryOp, keyword::{self, Keyword}, Expr};
use super::{affine_substitution, solved, Integration};

fn unary(op: UnaryOp, arg: Expr) -> Expr {
    Expr::unary(op, arg)
}

fn ln_abs(arg: Expr) -> Expr {
    unary(UnaryOp::Ln, unary(UnaryOp::Abs, arg))
}

/// `sqrt(1 - u^2)`
fn sqrt_one_minus_square(u: &Expr) -> Expr {
    unary(UnaryOp::Sqrt, Expr::num(1.0) - u.clone().pow(Expr::num(2.0)))
}

/// Returns the single argument of a function node.
fn argument(expr: &Expr) -> Option<&Expr> {
    match expr {
        Expr::Unary(UnaryOp::Negate | UnaryOp::Factorial, _) => None,
        Expr::Unary(_, arg) => Some(arg),
        Expr::Function(_, args) if args.len() == 1 => args.first(),
        _ => None,
    }
}

/// Returns the antiderivative of the function `expr` applies, evaluated at `u`.
fn entry(expr: &Expr, u: &Expr) -> Option<Expr> {
    let u = || u.clone();
    let named = |name: &str| Expr::call(name, vec![u()]);

    Some(match expr {
        Expr::Unary(op, _) => match op {
            UnaryOp::Sin => -unary(UnaryOp::Cos, u()),
            UnaryOp::Cos => unary(UnaryOp::Sin, u()),
            UnaryOp::Tan => -ln_abs(unary(UnaryOp::Cos, u())),
            UnaryOp::Sinh => unary(UnaryOp::Cosh, u()),
            UnaryOp::Cosh => unary(UnaryOp::Sinh, u()),
            UnaryOp::Tanh => unary(UnaryOp::Ln, unary(UnaryOp::Cosh, u())),
            UnaryOp::Exp => unary(UnaryOp::Exp, u()),
            UnaryOp::Ln => u() * unary(UnaryOp::Ln, u()) - u(),
            UnaryOp::Log10 => {
                (u() * unary(UnaryOp::Ln, u()) - u()) / unary(UnaryOp::Ln, Expr::num(10.0))
            },
            UnaryOp::Sqrt => Expr::num(2.0) * u().pow(Expr::num(1.5)) / Expr::num(3.0),
            UnaryOp::Asin => u() * unary(UnaryOp::Asin, u()) + sqrt_one_minus_square(&u()),
            UnaryOp::Acos => u() * unary(UnaryOp::Acos, u()) - sqrt_one_minus_square(&u()),
            UnaryOp::Atan => {
                let ln = unary(UnaryOp::Ln, Expr::num(1.0) + u().pow(Expr::num(2.0)));
                u() * unary(UnaryOp::Atan, u()) - ln / Expr::num(2.0)
            },
            _ => return None,
        },
        Expr::Function(name, _) => match name.as_str() {
            "sec" => ln_abs(named("sec") + unary(UnaryOp::Tan, u())),
            "csc" => -ln_abs(named("csc") + named("cot")),
            "cot" => ln_abs(unary(UnaryOp::Sin, u())),
            _ => match keyword::function(name) {
                Some(Keyword::Unary(op)) => return entry(&Expr::unary(op, u()), &u()),
                _ => return None,
            },
        },
        _ => return None,
    })
}

/// Integrates a function of the variable from the table, substituting for an affine argument.
pub(super) fn function(expr: &Expr, var: &str) -> Integration {
    let Some(arg) = argument(expr) else {
        return Integration::Unsupported(expr.clone());
    };

    let result = if arg.is_var(var) {
        entry(expr, arg)
    } else {
        affine_substitution(arg, var, |u| entry(expr, u))
    };

    match result {
        Some(result) => solved("table", expr, result),
        None => Integration::Unsupported(expr.clone()),
    }
}
