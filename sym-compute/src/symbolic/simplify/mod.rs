//! Simplification of expressions.
//!
//! Simplification is a single bottom-up pass: the children of a node are simplified first, then
//! at most one rule is applied to the node itself. There is no search for a fixed point, so
//! simplification always terminates and never expands an expression; a rule that builds a new
//! node (for example `x*x = x^2`) simplifies only that node. Simplifying an already simplified
//! expression returns it unchanged.
//!
//! Rules, by node:
//!
//! - all-constant operands are folded into a constant, unless the result is not finite or
//!   cannot be evaluated;
//! - `-(-a)`, `a+0`, `a+a`, `a-0`, `a-a`, `0*a`, `1*a`, `a^b*a^c`, `0/a`, `a/1`, `a/a`, `a^0`,
//!   `a^1`, `1^a`, `0^a`;
//! - any other sum or difference goes through term collection (see [`terms`]).
//!
//! `integral(f, x)` markers are left untouched.

mod rules;
mod step;
mod terms;

pub use step::Step;

use super::step_collector::StepCollector;
use sym_parser::Expr;

/// Simplifies the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, returning the steps that were taken.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = simplify_with(expr, &mut steps);
    (expr, steps)
}

/// Simplifies the given expression, reporting every rule that fires to the step collector.
pub fn simplify_with(expr: &Expr, steps: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) | Expr::Integral { .. } => expr.clone(),
        Expr::Unary(op, operand) => {
            let operand = simplify_with(operand, steps);
            rules::unary(*op, operand, steps)
        },
        Expr::Binary(op, lhs, rhs) => {
            let lhs = simplify_with(lhs, steps);
            let rhs = simplify_with(rhs, steps);
            rules::binary(*op, lhs, rhs, steps)
        },
        Expr::Function(name, args) => {
            let args = args.iter().map(|arg| simplify_with(arg, steps)).collect();
            rules::function(name, args, steps)
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use sym_parser::parse;

    fn simplified(input: &str) -> String {
        simplify(&parse(input).unwrap()).to_string()
    }

    #[test]
    fn identities() {
        assert_eq!(simplified("x+0"), "x");
        assert_eq!(simplified("0+x"), "x");
        assert_eq!(simplified("x*0"), "0");
        assert_eq!(simplified("x-x"), "0");
        assert_eq!(simplified("x^0"), "1");
        assert_eq!(simplified("x^1"), "x");
        assert_eq!(simplified("1^x"), "1");
        assert_eq!(simplified("0^x"), "0");
        assert_eq!(simplified("1*x"), "x");
        assert_eq!(simplified("x/1"), "x");
        assert_eq!(simplified("0/x"), "0");
        assert_eq!(simplified("sin(x)/sin(x)"), "1");
        assert_eq!(simplified("-(-x)"), "x");
    }

    #[test]
    fn constant_folding() {
        assert_eq!(simplified("2 + 3 * 4"), "14");
        assert_eq!(simplified("x + 2 * 3"), "x + 6");
        assert_eq!(simplified("max(2, 5) * x"), "5 * x");
        assert_eq!(simplified("sqrt(16) + x"), "4 + x");
        assert_eq!(simplified("gcd(12, 18) + x"), "6 + x");
    }

    #[test]
    fn no_fold_to_non_finite() {
        assert_eq!(simplified("1 / 0"), "1 / 0");
        assert_eq!(simplified("ln(0)"), "ln(0)");
        assert_eq!(simplified("factorial(-1)"), "(-1)!");
    }

    #[test]
    fn unknown_functions_are_kept() {
        assert_eq!(simplified("f(1 + 1)"), "f(2)");
    }

    #[test]
    fn like_factors() {
        assert_eq!(simplified("x*x"), "x^2");
        assert_eq!(simplified("x^2*x^3"), "x^5");
        assert_eq!(simplified("x*x^a"), "x^(a + 1)");
        assert_eq!(simplified("x^a*x"), "x^(a + 1)");
        assert_eq!(simplified("x^a*x^b"), "x^(a + b)");
        assert_eq!(simplified("x^-1*x"), "1");
    }

    #[test]
    fn like_terms() {
        assert_eq!(simplified("x+x"), "2 * x");
        assert_eq!(simplified("2*x + 3*x - x"), "4 * x");
        assert_eq!(simplified("x + y - x"), "y");
        assert_eq!(simplified("1 + x + 2"), "3 + x");
        assert_eq!(simplified("x - 2*y + y*3"), "x + y");
        assert_eq!(simplified("-x + y"), "-x + y");
        assert_eq!(simplified("x - 3*y"), "x - 3 * y");
        assert_eq!(simplified("-1*(x + y) + z"), "-x - y + z");
        assert_eq!(simplified("x - -3"), "x + 3");
        assert_eq!(simplified("sin(x)*2 - 2*sin(x)"), "0");
    }

    #[test]
    fn tolerance() {
        assert_eq!(simplified("x*0.00000000001"), "0");
        assert_eq!(simplified("x + 0.00000000001"), "x");
        assert_eq!(simplified("x - 0.99999999999 * x"), "0");
    }

    #[test]
    fn sentinel_untouched() {
        assert_eq!(simplified("integral(x + 0, x) + 0"), "integral(x + 0, x)");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "x + 0",
            "x*x*x",
            "2*x + 3*y - x + 4 - y",
            "-(x + y) + 2*(x + y)",
            "0.5*(x + y) + 0.5*(x + y) - x",
            "-1*(x + y) + z",
            "2 * 2^x + 2^x",
            "x^2*x + sin(x)^2*sin(x)^-1",
            "(x + 1)/(x + 1) + exp(x)*0",
            "3*(4*x) - 12*x + log(x, 2)",
            "-(x*y) + y*x*2",
            "f(x) - f(x) + g(y, 1 + 1)",
            "x - -3",
        ];

        for input in inputs {
            let once = simplify(&parse(input).unwrap());
            let twice = simplify(&once);
            assert_eq!(twice.to_string(), once.to_string(), "input: {}", input);
        }
    }

    #[test]
    fn records_steps() {
        let (expr, steps) = simplify_with_steps(&parse("x*1 + 0").unwrap());
        assert_eq!(expr.to_string(), "x");
        assert_eq!(steps, vec![Step::MultiplyOne, Step::AddZero]);
    }
}
