//! Structural differentiation.
//!
//! [`derivative`] applies the usual rules (sum, product, quotient, power, and chain rule) to the
//! tree, then simplifies the result. Any subtree that does not mention the variable
//! differentiates to zero without being inspected, so `d/dx min(y, 2)` is `0` even though `min`
//! has no derivative rule.

mod function;

use log::debug;
use sym_error::Error;
use sym_parser::{ast::{BinaryOp, UnaryOp}, Expr};
use super::{error::NotDifferentiable, simplify::simplify};

/// Returns the simplified derivative of the expression with respect to `var`.
///
/// Returns [`NotDifferentiable`] if the expression contains a function of `var` with no
/// derivative rule, such as `min`, `max`, or factorial.
pub fn derivative(expr: &Expr, var: &str) -> Result<Expr, Error> {
    let raw = differentiate(expr, var).map_err(|err| {
        debug!("cannot differentiate {} with respect to {}: {}", expr, var, err);
        err
    })?;
    debug!("d/d{} {} = {}", var, expr, raw);
    Ok(simplify(&raw))
}

/// Returns the unsimplified derivative of the expression with respect to `var`.
pub(crate) fn differentiate(expr: &Expr, var: &str) -> Result<Expr, Error> {
    if !expr.contains_var(var) {
        return Ok(Expr::num(0.0));
    }

    match expr {
        Expr::Constant(_) => Ok(Expr::num(0.0)),
        Expr::Variable(name) => Ok(Expr::num(if name == var { 1.0 } else { 0.0 })),
        Expr::Unary(op, operand) => function::unary_derivative(*op, operand, var),
        Expr::Binary(op, lhs, rhs) => binary_derivative(expr, *op, lhs, rhs, var),
        Expr::Function(name, args) => function::named_derivative(name, args, var),
        Expr::Integral { integrand, var: bound } => {
            if bound == var {
                Ok((**integrand).clone())
            } else {
                // the simplifier leaves markers alone, so the new integrand is simplified here
                let integrand = simplify(&differentiate(integrand, var)?);
                Ok(Expr::integral(integrand, bound.clone()))
            }
        },
    }
}

/// Returns an error for a function with no derivative rule.
pub(crate) fn not_differentiable(function: &str) -> Error {
    Error::unspanned(NotDifferentiable { function: function.to_owned() })
}

/// `(u*v)' = u'*v + u*v'`
fn product_rule(u: &Expr, v: &Expr, var: &str) -> Result<Expr, Error> {
    Ok(differentiate(u, var)? * v.clone() + u.clone() * differentiate(v, var)?)
}

/// `(u/v)' = (u'*v - u*v') / v^2`
fn quotient_rule(u: &Expr, v: &Expr, var: &str) -> Result<Expr, Error> {
    let numerator = differentiate(u, var)? * v.clone() - u.clone() * differentiate(v, var)?;
    Ok(numerator / v.clone().pow(Expr::num(2.0)))
}

/// Derivative of `base^exponent`, where `this` is the whole power.
fn power_rule(this: &Expr, base: &Expr, exponent: &Expr, var: &str) -> Result<Expr, Error> {
    if !exponent.contains_var(var) {
        // (u^n)' = n*u^(n-1)*u'
        let reduced = base.clone().pow(exponent.clone() - Expr::num(1.0));
        return Ok(exponent.clone() * reduced * differentiate(base, var)?);
    }

    if !base.contains_var(var) {
        // (a^v)' = a^v*ln(a)*v'
        let ln = Expr::unary(UnaryOp::Ln, base.clone());
        return Ok(this.clone() * ln * differentiate(exponent, var)?);
    }

    // (u^v)' = u^v*(v'*ln(u) + v*u'/u)
    let ln = Expr::unary(UnaryOp::Ln, base.clone());
    let inner = differentiate(exponent, var)? * ln
        + exponent.clone() * differentiate(base, var)? / base.clone();
    Ok(this.clone() * inner)
}

fn binary_derivative(
    this: &Expr,
    op: BinaryOp,
    lhs: &Expr,
    rhs: &Expr,
    var: &str,
) -> Result<Expr, Error> {
    match op {
        BinaryOp::Add => Ok(differentiate(lhs, var)? + differentiate(rhs, var)?),
        BinaryOp::Subtract => Ok(differentiate(lhs, var)? - differentiate(rhs, var)?),
        BinaryOp::Multiply => product_rule(lhs, rhs, var),
        BinaryOp::Divide => quotient_rule(lhs, rhs, var),
        BinaryOp::Power => power_rule(this, lhs, rhs, var),
        BinaryOp::Modulo => {
            // u % v = u - floor(u/v)*v
            let quotient = Expr::unary(UnaryOp::Floor, lhs.clone() / rhs.clone());
            Ok(differentiate(lhs, var)? - quotient * differentiate(rhs, var)?)
        },
        BinaryOp::LogBase => {
            let ln = |e: &Expr| Expr::unary(UnaryOp::Ln, e.clone());
            quotient_rule(&ln(lhs), &ln(rhs), var)
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use super::*;
    use sym_parser::parse;

    fn eval_x(expr: &Expr, x: f64) -> f64 {
        expr.eval(&Ctxt::with_vars([("x", x)])).unwrap()
    }

    /// Approximates the derivative with a central difference.
    fn finite_difference(expr: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (eval_x(expr, x + DX) - eval_x(expr, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &str, points: impl IntoIterator<Item = f64>) {
        let expr = parse(function).unwrap();
        let symbolic = derivative(&expr, "x").unwrap();

        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&expr, point);
            assert_float_absolute_eq!(symbolically_computed, numerically_computed, 1e-4);
        }
    }

    fn derived(input: &str, var: &str) -> String {
        derivative(&parse(input).unwrap(), var).unwrap().to_string()
    }

    #[test]
    fn simple_forms() {
        assert_eq!(derived("x^2", "x"), "2 * x");
        assert_eq!(derived("sin(x)", "x"), "cos(x)");
        assert_eq!(derived("5", "x"), "0");
        assert_eq!(derived("y", "x"), "0");
        assert_eq!(derived("x", "x"), "1");
        assert_eq!(derived("x*y", "x"), "y");
        assert_eq!(derived("e^x", "x"), "e^x");
        assert_eq!(derived("tan(x)", "x"), "1 / cos(x)^2");
    }

    #[test]
    fn polynomial() {
        let d = derivative(&parse("x^3 - 2*x^2 + x - 1").unwrap(), "x").unwrap();
        let expected = parse("3*x^2 - 4*x + 1").unwrap();
        assert_float_absolute_eq!(eval_x(&d, 2.0), eval_x(&expected, 2.0), 1e-9);
        assert_float_absolute_eq!(eval_x(&d, 2.0), 5.0, 1e-9);
        test_for_function("x^2 + x + 1", [0., 1., 2., 5., 8.]);
    }

    #[test]
    fn chain_rule() {
        test_for_function("sin(2*x + 1)", [-1., 0., 0.5, 3.]);
        test_for_function("exp(x^2)", [-1., 0., 0.5, 1.]);
        test_for_function("ln(x^2 + 1)", [-2., 0., 1., 4.]);
        test_for_function("sqrt(1 + x^2)", [-2., 0., 1., 4.]);
        test_for_function("cos(x)^3", [-2., 0., 1., 4.]);
    }

    #[test]
    fn products_and_quotients() {
        test_for_function("x * sin(x)", [-2., 0., 1., 4.]);
        test_for_function("(x + 1) / (x^2 + 1)", [-2., 0., 1., 4.]);
        test_for_function("x^x", [0.5, 1., 2.]);
        test_for_function("2^x", [-1., 0., 3.]);
    }

    #[test]
    fn elementary_functions() {
        test_for_function("asin(x) + acos(x) * 2 + atan(x)", [-0.5, 0., 0.5]);
        test_for_function("sinh(x) + cosh(x) + tanh(x)", [-1., 0., 1.]);
        test_for_function("log10(x) + log(x, 3)", [0.5, 1., 7.]);
        test_for_function("sec(x) + csc(x) + cot(x)", [0.5, 1., 2.]);
        test_for_function("abs(x)", [-1.5, 2.]);
        test_for_function("x % 3", [1.5, 4.5]);
    }

    /// Names of the function nodes in `expr`.
    fn called_names(expr: &Expr) -> Vec<String> {
        match expr {
            Expr::Function(name, args) => std::iter::once(name.clone())
                .chain(args.iter().flat_map(called_names))
                .collect(),
            Expr::Unary(_, operand) => called_names(operand),
            Expr::Binary(_, lhs, rhs) => {
                let mut names = called_names(lhs);
                names.extend(called_names(rhs));
                names
            },
            _ => Vec::new(),
        }
    }

    #[test]
    fn secant_uses_tangent_operator() {
        let d = derivative(&parse("sec(3*x)").unwrap(), "x").unwrap();
        assert_eq!(called_names(&d), vec!["sec".to_string()]);
        test_for_function("sec(3*x)", [-0.4, 0.1, 0.3]);
    }

    #[test]
    fn operator_keywords_as_calls() {
        let d = derivative(&Expr::call("sin", vec![Expr::var("x")]), "x").unwrap();
        assert_float_absolute_eq!(eval_x(&d, 1.0), 1f64.cos(), 1e-12);

        let d = derivative(&Expr::call("LN", vec![Expr::var("x").pow(Expr::num(2.0))]), "x").unwrap();
        assert_float_absolute_eq!(eval_x(&d, 2.0), 1.0, 1e-9);

        assert!(derivative(&Expr::call("mystery", vec![Expr::var("x")]), "x").is_err());
    }

    #[test]
    fn step_functions() {
        assert_eq!(derived("floor(x) + round(x) + ceil(x) + sign(x)", "x"), "0");
    }

    #[test]
    fn partial_derivatives() {
        assert_eq!(derived("x^2 * y + y", "y"), "x^2 + 1");
        assert_eq!(derived("min(y, 2) + x", "x"), "1");
    }

    #[test]
    fn integral_marker() {
        assert_eq!(derived("integral(tan(x)^2, x)", "x"), "tan(x)^2");
        assert_eq!(derived("integral(x * y^2, x)", "y"), "integral(x * (2 * y), x)");
    }

    #[test]
    fn not_differentiable() {
        let err = derivative(&parse("min(x, 1)").unwrap(), "x").unwrap_err();
        assert_eq!(
            err.downcast_ref::<NotDifferentiable>(),
            Some(&NotDifferentiable { function: "min".to_owned() }),
        );
        assert!(derivative(&parse("x!").unwrap(), "x").unwrap_err().is::<NotDifferentiable>());
        assert!(derivative(&parse("f(x)").unwrap(), "x").unwrap_err().is::<NotDifferentiable>());
    }
}
