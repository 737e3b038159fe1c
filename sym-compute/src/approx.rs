//! Tolerant comparisons of numbers and expressions.

use sym_parser::Expr;

/// Absolute tolerance used by every equality, zero, and one check on constants.
pub const EPSILON: f64 = 1e-10;

/// Largest integer below which every integer is exactly representable as an `f64`.
pub const MAX_EXACT_INT: u128 = 1 << 53;

/// Returns true if the two numbers are within [`EPSILON`] of each other.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the number is within [`EPSILON`] of zero.
pub fn is_zero(n: f64) -> bool {
    n.abs() < EPSILON
}

/// Returns true if the number is within [`EPSILON`] of one.
pub fn is_one(n: f64) -> bool {
    approx_eq(n, 1.0)
}

/// Returns the nearest integer if the number is within [`EPSILON`] of a non-negative integer.
pub fn as_natural(n: f64) -> Option<f64> {
    let rounded = n.round();
    if n.is_finite() && rounded >= 0.0 && approx_eq(n, rounded) {
        Some(rounded)
    } else {
        None
    }
}

/// Returns true if the expression is a constant within [`EPSILON`] of `value`.
pub fn is_const(expr: &Expr, value: f64) -> bool {
    expr.as_constant().is_some_and(|c| approx_eq(c, value))
}

/// Structural equality of two expressions, comparing constants with [`EPSILON`] tolerance.
pub fn expr_eq(a: &Expr, b: &Expr) -> bool {
    match (a, b) {
        (Expr::Constant(a), Expr::Constant(b)) => approx_eq(*a, *b),
        (Expr::Variable(a), Expr::Variable(b)) => a == b,
        (Expr::Unary(op_a, a), Expr::Unary(op_b, b)) => op_a == op_b && expr_eq(a, b),
        (Expr::Binary(op_a, la, ra), Expr::Binary(op_b, lb, rb)) => {
            op_a == op_b && expr_eq(la, lb) && expr_eq(ra, rb)
        },
        (Expr::Function(name_a, args_a), Expr::Function(name_b, args_b)) => {
            name_a == name_b
                && args_a.len() == args_b.len()
                && args_a.iter().zip(args_b).all(|(a, b)| expr_eq(a, b))
        },
        (
            Expr::Integral { integrand: a, var: var_a },
            Expr::Integral { integrand: b, var: var_b },
        ) => var_a == var_b && expr_eq(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sym_parser::parse;

    #[test]
    fn naturals() {
        assert_eq!(as_natural(3.0), Some(3.0));
        assert_eq!(as_natural(3.0 + 1e-12), Some(3.0));
        assert_eq!(as_natural(2.5), None);
        assert_eq!(as_natural(-1.0), None);
        assert_eq!(as_natural(f64::INFINITY), None);
    }

    #[test]
    fn tolerant_structural_equality() {
        let a = parse("x^2 + 0.1").unwrap();
        let b = Expr::var("x").pow(Expr::num(2.0)) + Expr::num(0.1 + 1e-12);
        assert!(expr_eq(&a, &b));
        assert!(!expr_eq(&a, &parse("x^2 + 0.2").unwrap()));
        assert!(!expr_eq(&parse("sin(x)").unwrap(), &parse("cos(x)").unwrap()));
    }
}
