//! Heuristic antiderivatives.
//!
//! [`integrate`] tries a fixed list of rules, in order, on each node and takes the first that
//! matches:
//!
//! 1. an expression free of the variable: `c` → `c*x`;
//! 2. the variable: `x` → `x^2/2`;
//! 3. `e^x` → `e^x`;
//! 4. `x^n` for a numeric `n` → `x^(n+1)/(n+1)`, or `ln(x)` when `n = -1`;
//! 5. `1/x` → `ln(x)`;
//! 6. sums and differences, term by term;
//! 7. products with exactly one factor free of the variable, pulling that factor out;
//! 8. the products `x*e^x`, `x*sin(x)` and `x*cos(x)`, by parts (see [`parts`]);
//! 9. quotients with a constant numerator and a linear or `x^2 + c` denominator, and quotients
//!    with a constant denominator (see [`rational`]);
//! 10. elementary functions of the variable, from a table (see [`table`]).
//!
//! Rules 3, 4 and 10 also accept an affine argument `a*x + b` in place of `x`, through a single
//! substitution `u = a*x + b`.
//!
//! There is no search beyond this. When no rule matches, the result is the marker node
//! `integral(f, x)`, holding the untouched input. This is not an error: the marker is an ordinary
//! [`Expr`] that can sit inside an otherwise solved result, such as the second term of
//! `x^2 / 2 + integral(tan(x)^2, x)`, and [`is_unsupported`] finds it anywhere in a tree.

mod parts;
mod rational;
mod table;

use crate::{
    approx::{approx_eq, is_const},
    numerical::{ctxt::Ctxt, eval::Eval},
};
use log::debug;
use std::f64::consts::E;
use sym_parser::{ast::{BinaryOp, UnaryOp}, Expr};
use super::{derivative::derivative, simplify::simplify};

/// The outcome of integrating one subtree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Integration {
    /// An antiderivative was found. It may still contain markers for subtrees no rule covered.
    Solved(Expr),

    /// No rule applies. Holds the input, untouched.
    Unsupported(Expr),
}

impl Integration {
    /// Converts the outcome to an expression, wrapping an unsupported input in a marker.
    fn into_expr(self, var: &str) -> Expr {
        match self {
            Self::Solved(expr) => expr,
            Self::Unsupported(expr) => Expr::integral(expr, var),
        }
    }
}

/// Returns an antiderivative of the expression with respect to `var`, simplified.
///
/// This never fails. When no rule covers the input, the `integral(expr, var)` marker is returned
/// in its place.
pub fn integrate(expr: &Expr, var: &str) -> Expr {
    match antiderivative(expr, var) {
        Integration::Solved(result) => simplify(&result),
        Integration::Unsupported(expr) => {
            debug!("no rule for integral of {} d{}", expr, var);
            Expr::integral(expr, var)
        },
    }
}

/// Returns true if the expression contains an `integral(f, x)` marker anywhere.
pub fn is_unsupported(expr: &Expr) -> bool {
    expr.is_unsupported()
}

/// Logs the rule that matched.
fn solved(rule: &str, expr: &Expr, result: Expr) -> Integration {
    debug!("{}: integral of {} is {}", rule, expr, result);
    Integration::Solved(result)
}

/// Returns true if the expression is the constant `e`.
fn is_euler(expr: &Expr) -> bool {
    expr.as_constant().is_some_and(|c| approx_eq(c, E))
}

/// Returns the value of an expression with no variables, such as `-2` or `1/2`.
fn number(expr: &Expr) -> Option<f64> {
    if let Some(c) = expr.as_constant() {
        return Some(c);
    }
    if !expr.variables().is_empty() {
        return None;
    }
    expr.eval(&Ctxt::new()).ok().filter(|value| value.is_finite())
}

/// Returns true if the expression is structurally of the form `a*x + b`.
pub(super) fn is_affine(expr: &Expr, var: &str) -> bool {
    let free = |e: &Expr| !e.contains_var(var);
    match expr {
        Expr::Variable(name) => name == var,
        Expr::Unary(UnaryOp::Negate, operand) => is_affine(operand, var),
        Expr::Binary(BinaryOp::Add | BinaryOp::Subtract, lhs, rhs) => {
            (is_affine(lhs, var) && (free(rhs) || is_affine(rhs, var)))
                || (free(lhs) && is_affine(rhs, var))
        },
        Expr::Binary(BinaryOp::Multiply, lhs, rhs) => {
            (free(lhs) && is_affine(rhs, var)) || (is_affine(lhs, var) && free(rhs))
        },
        Expr::Binary(BinaryOp::Divide, lhs, rhs) => is_affine(lhs, var) && free(rhs),
        _ => false,
    }
}

/// Returns the slope `a` of an affine expression `a*x + b`, if it is nonzero.
fn slope(expr: &Expr, var: &str) -> Option<Expr> {
    if !is_affine(expr, var) {
        return None;
    }
    let slope = derivative(expr, var).ok()?;
    if slope.contains_var(var) || is_const(&slope, 0.0) {
        return None;
    }
    Some(slope)
}

/// Returns a variable name that does not appear in the expression.
fn fresh_var(expr: &Expr) -> String {
    let used = expr.variables();
    std::iter::once("u".to_owned())
        .chain((1..).map(|i| format!("u{}", i)))
        .find(|name| !used.contains(name))
        .unwrap_or_default()
}

/// Integrates `f(arg)` with `u = arg` for an affine `arg = a*x + b`, given `solve` that returns
/// the antiderivative of `f(u)`. The result is `F(a*x + b) / a`.
fn affine_substitution(
    arg: &Expr,
    var: &str,
    solve: impl FnOnce(&Expr) -> Option<Expr>,
) -> Option<Expr> {
    let slope = slope(arg, var)?;
    let u = fresh_var(arg);
    let antiderivative = solve(&Expr::var(u.as_str()))?;
    debug!("substituting {} = {}", u, arg);
    Some(antiderivative.substitute(&u, arg) / slope)
}

/// `u^n` → `u^(n+1)/(n+1)`, or `ln(u)` when `n = -1`.
fn power_of(u: &Expr, n: f64) -> Expr {
    if approx_eq(n, -1.0) {
        Expr::unary(UnaryOp::Ln, u.clone())
    } else {
        u.clone().pow(Expr::num(n + 1.0)) / Expr::num(n + 1.0)
    }
}

/// Rules 3 and 4, directly or through an affine substitution.
fn power(expr: &Expr, base: &Expr, exponent: &Expr, var: &str) -> Integration {
    if is_euler(base) {
        if exponent.is_var(var) {
            return solved("exponential", expr, expr.clone());
        }
        if let Some(result) = affine_substitution(exponent, var, |u| Some(Expr::num(E).pow(u.clone()))) {
            return solved("exponential, substituted", expr, result);
        }
        return Integration::Unsupported(expr.clone());
    }

    let Some(n) = number(exponent) else {
        return Integration::Unsupported(expr.clone());
    };
    if base.is_var(var) {
        return solved("power", expr, power_of(base, n));
    }
    match affine_substitution(base, var, |u| Some(power_of(u, n))) {
        Some(result) => solved("power, substituted", expr, result),
        None => Integration::Unsupported(expr.clone()),
    }
}

/// Rule 6. The sum is solved if either side is, with a marker standing in for the other.
fn linearity(expr: &Expr, op: BinaryOp, lhs: &Expr, rhs: &Expr, var: &str) -> Integration {
    match (antiderivative(lhs, var), antiderivative(rhs, var)) {
        (Integration::Unsupported(_), Integration::Unsupported(_)) => {
            Integration::Unsupported(expr.clone())
        },
        (lhs, rhs) => solved(
            "linearity",
            expr,
            Expr::binary(op, lhs.into_expr(var), rhs.into_expr(var)),
        ),
    }
}

/// Rules 7 and 8.
fn product(expr: &Expr, lhs: &Expr, rhs: &Expr, var: &str) -> Integration {
    let scaled = |factor: &Expr, rest: &Expr| match antiderivative(rest, var) {
        Integration::Solved(result) => solved("constant factor", expr, factor.clone() * result),
        Integration::Unsupported(_) => Integration::Unsupported(expr.clone()),
    };

    if !lhs.contains_var(var) {
        return scaled(lhs, rhs);
    }
    if !rhs.contains_var(var) {
        return scaled(rhs, lhs);
    }

    match parts::by_parts(lhs, rhs, var) {
        Some(result) => solved("by parts", expr, result),
        None => Integration::Unsupported(expr.clone()),
    }
}

/// Finds an antiderivative of the expression, without simplifying it.
pub(crate) fn antiderivative(expr: &Expr, var: &str) -> Integration {
    if !expr.contains_var(var) {
        return solved("constant", expr, expr.clone() * Expr::var(var));
    }

    match expr {
        Expr::Variable(_) => {
            let x = Expr::var(var);
            solved("variable", expr, x.pow(Expr::num(2.0)) / Expr::num(2.0))
        },
        Expr::Binary(BinaryOp::Power, base, exponent) => power(expr, base, exponent, var),
        Expr::Binary(op @ (BinaryOp::Add | BinaryOp::Subtract), lhs, rhs) => {
            linearity(expr, *op, lhs, rhs, var)
        },
        Expr::Unary(UnaryOp::Negate, operand) => match antiderivative(operand, var) {
            Integration::Solved(result) => solved("negation", expr, -result),
            Integration::Unsupported(_) => Integration::Unsupported(expr.clone()),
        },
        Expr::Binary(BinaryOp::Multiply, lhs, rhs) => product(expr, lhs, rhs, var),
        Expr::Binary(BinaryOp::Divide, lhs, rhs) => rational::quotient(expr, lhs, rhs, var),
        Expr::Unary(..) | Expr::Function(..) => table::function(expr, var),
        _ => Integration::Unsupported(expr.clone()),
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
        expr.eval(&Ctxt::with_vars([("x", x), ("y", 3.0)])).unwrap()
    }

    /// Checks that the derivative of the antiderivative matches the integrand at each point.
    fn round_trip(function: &str, points: impl IntoIterator<Item = f64>) {
        let expr = parse(function).unwrap();
        let integral = integrate(&expr, "x");
        assert!(!is_unsupported(&integral), "{} gave {}", function, integral);

        let derived = derivative(&integral, "x").unwrap();
        for point in points {
            assert_float_absolute_eq!(eval_x(&derived, point), eval_x(&expr, point), 1e-6);
        }
    }

    fn integrated(input: &str) -> String {
        integrate(&parse(input).unwrap(), "x").to_string()
    }

    #[test]
    fn direct_rules() {
        round_trip("5", [-1., 0., 2.]);
        round_trip("y^2", [1., 2.]);
        round_trip("x", [-1., 0., 2.]);
        round_trip("e^x", [-1., 0., 2.]);
        round_trip("x^3", [-1., 0., 2.]);
        round_trip("x^-2", [-1., 0.5, 2.]);
        round_trip("x^(-1)", [0.5, 2.]);
        round_trip("x^0.5", [0.5, 2.]);
        round_trip("1/x", [0.5, 2.]);
    }

    #[test]
    fn linear_combinations() {
        round_trip("3*x^2 + 2*x - 7", [-1., 0., 2.]);
        round_trip("-sin(x)", [-1., 0., 2.]);
        round_trip("x/2 - 4*cos(x)", [-1., 0., 2.]);
        round_trip("y*x", [-1., 0., 2.]);
    }

    #[test]
    fn by_parts() {
        round_trip("x*exp(x)", [-1., 0., 2.]);
        round_trip("exp(x)*x", [-1., 0., 2.]);
        round_trip("x*e^x", [-1., 0., 2.]);
        round_trip("x*sin(x)", [-1., 0., 2.]);
        round_trip("cos(x)*x", [-1., 0., 2.]);
    }

    #[test]
    fn rational() {
        round_trip("1/(2*x + 1)", [-3., 0., 2.]);
        round_trip("1/(3 - x)", [0., 2., 4.]);
        round_trip("1/(x^2 + 4)", [-1., 0., 2.]);
        round_trip("3/(x^2 + 4)", [-1., 0., 2.]);
        round_trip("2/x", [0.5, 2.]);
        round_trip("sin(x)/2", [-1., 0., 2.]);
    }

    #[test]
    fn table() {
        round_trip("sin(x) + cos(x) + tan(x)", [-1., 0., 0.5]);
        round_trip("sinh(x) + cosh(x) + tanh(x)", [-1., 0., 2.]);
        round_trip("exp(x) + ln(x) + log10(x) + sqrt(x)", [0.5, 1., 2.]);
        round_trip("asin(x) + acos(x) + atan(x)", [-0.5, 0., 0.5]);
        round_trip("sec(x) + csc(x) + cot(x)", [0.5, 1., 1.2]);
    }

    #[test]
    fn secant_of_affine_argument() {
        round_trip("sec(3*x)", [-0.4, 0.1, 0.3]);

        let result = integrate(&parse("sec(x)").unwrap(), "x");
        assert_float_absolute_eq!(eval_x(&result, 0.5), (1.0 / 0.5f64.cos() + 0.5f64.tan()).ln(), 1e-9);
    }

    #[test]
    fn operator_keywords_as_calls() {
        let result = integrate(&Expr::call("cos", vec![Expr::var("x")]), "x");
        assert!(!is_unsupported(&result));
        assert_float_absolute_eq!(eval_x(&result, 1.0), 1f64.sin(), 1e-9);
    }

    #[test]
    fn computed_exponents() {
        round_trip("x^(1/2)", [0.5, 2.]);
        round_trip("x^(-1/2) + (2*x + 1)^(2/3)", [0.5, 2.]);
        assert!(is_unsupported(&integrate(&parse("x^(y/2)").unwrap(), "x")));
    }

    #[test]
    fn affine_substitution() {
        round_trip("cos(3*x - 1)", [-1., 0., 2.]);
        round_trip("exp(2*x + 1)", [-1., 0., 2.]);
        round_trip("e^(x/2)", [-1., 0., 2.]);
        round_trip("(2*x + 1)^3", [-1., 0., 2.]);
        round_trip("(1 - x)^-1", [-1., 0., 0.5]);
        round_trip("sin(2*x)", (0..16).map(|i| i as f64 * std::f64::consts::TAU / 16.0));
    }

    #[test]
    fn closed_forms() {
        assert_eq!(integrated("1/x"), "ln(x)");
        assert_eq!(integrated("x"), "x^2 / 2");
        assert_eq!(integrated("y"), "y * x");

        let reciprocal_square = integrate(&parse("x^(-2)").unwrap(), "x");
        for x in [-2., -0.5, 0.5, 3.] {
            assert_float_absolute_eq!(eval_x(&reciprocal_square, x), -(1.0 / x), 1e-9);
        }
    }

    #[test]
    fn unsupported() {
        let expr = parse("tan(x)^2").unwrap();
        let result = integrate(&expr, "x");
        assert!(is_unsupported(&result));
        assert_eq!(result, Expr::integral(expr, "x"));

        for input in ["x*tan(x)", "sin(x^2)", "1/(x^2 - 4)", "x^y", "2^x", "min(x, 1)", "x!"] {
            assert!(is_unsupported(&integrate(&parse(input).unwrap(), "x")), "{}", input);
        }
    }

    #[test]
    fn nested_marker() {
        let result = integrate(&parse("x + tan(x)^2").unwrap(), "x");
        assert!(is_unsupported(&result));
        assert_eq!(result.to_string(), "x^2 / 2 + integral(tan(x)^2, x)");

        let result = integrate(&parse("2*tan(x)^2").unwrap(), "x");
        assert_eq!(result.to_string(), "integral(2 * tan(x)^2, x)");
    }

    #[test]
    fn affine_shapes() {
        let affine = |s: &str| is_affine(&parse(s).unwrap(), "x");
        assert!(affine("x"));
        assert!(affine("2*x + 1"));
        assert!(affine("-(x/3) - y"));
        assert!(!affine("x^2 + 1"));
        assert!(!affine("x*x"));
        assert!(!affine("5"));
    }
}
