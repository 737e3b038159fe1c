mod binary;
mod call;
mod unary;

pub(crate) use binary::eval_binary;
pub(crate) use unary::eval_unary;

use crate::numerical::{
    ctxt::Ctxt,
    error::{UndefinedVariable, UnevaluatedIntegral},
};
use sym_error::Error;
use sym_parser::Expr;

/// Any type that can be numerically evaluated.
pub trait Eval {
    /// Evaluates the expression with the given context. The context is never modified.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluates the expression with a default context, which binds no variables.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        eval_expr(self, ctxt, 0)
    }
}

/// Evaluates the expression, tracking how many user-defined function calls deep we are.
pub(crate) fn eval_expr(expr: &Expr, ctxt: &Ctxt, depth: usize) -> Result<f64, Error> {
    match expr {
        Expr::Constant(value) => Ok(*value),
        Expr::Variable(name) => ctxt
            .get_var(name)
            .ok_or_else(|| Error::unspanned(UndefinedVariable { name: name.clone() })),
        Expr::Unary(op, operand) => {
            let value = eval_expr(operand, ctxt, depth)?;
            unary::eval_unary(*op, value, ctxt.integer_mode)
        },
        Expr::Binary(op, lhs, rhs) => {
            let lhs = eval_expr(lhs, ctxt, depth)?;
            let rhs = eval_expr(rhs, ctxt, depth)?;
            Ok(binary::eval_binary(*op, lhs, rhs))
        },
        Expr::Function(name, args) => {
            let args = args
                .iter()
                .map(|arg| eval_expr(arg, ctxt, depth))
                .collect::<Result<Vec<_>, _>>()?;
            call::eval_call(name, &args, ctxt, depth)
        },
        Expr::Integral { var, .. } => Err(Error::unspanned(UnevaluatedIntegral { var: var.clone() })),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::numerical::{ctxt::IntegerMode, error::*};
    use pretty_assertions::assert_eq;
    use super::*;
    use sym_parser::parse;

    fn eval(input: &str) -> Result<f64, Error> {
        parse(input).unwrap().eval_default()
    }

    fn eval_with(input: &str, vars: &[(&str, f64)]) -> Result<f64, Error> {
        parse(input).unwrap().eval(&Ctxt::with_vars(vars.iter().copied()))
    }

    #[test]
    fn precedence() {
        assert_eq!(eval("2+3*4").unwrap(), 14.0);
        assert_eq!(eval("2^3^2").unwrap(), 512.0);
        assert_eq!(eval("-2^2").unwrap(), -4.0);
        assert_eq!(eval("(-2)^2").unwrap(), 4.0);
        assert_eq!(eval("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(eval("3!^2").unwrap(), 36.0);
    }

    #[test]
    fn variables() {
        assert_eq!(eval_with("x^2 + y", &[("x", 3.0), ("y", 1.0)]).unwrap(), 10.0);

        let err = eval("y").unwrap_err();
        assert_eq!(err.downcast_ref::<UndefinedVariable>().unwrap().name, "y");
    }

    #[test]
    fn ieee_division() {
        assert_eq!(eval("1 / 0").unwrap(), f64::INFINITY);
        assert_eq!(eval("-1 / 0").unwrap(), f64::NEG_INFINITY);
        assert!(eval("0 / 0").unwrap().is_nan());
        assert!(eval("ln(-1)").unwrap().is_nan());
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(eval("sin(pi / 2)").unwrap(), 1.0);
        assert_float_absolute_eq!(eval("log(8, 2)").unwrap(), 3.0, 1e-12);
        assert_float_absolute_eq!(eval("log10(1000)").unwrap(), 3.0, 1e-12);
        assert_float_absolute_eq!(eval("sec(0) + cot(pi / 4)").unwrap(), 2.0, 1e-12);
        assert_eq!(eval("max(2, 7) - min(2, 7)").unwrap(), 5.0);
        assert_eq!(eval("7 % 3").unwrap(), 1.0);
        assert_eq!(eval("abs(-2) + floor(2.7) + ceil(2.1) + round(2.5)").unwrap(), 10.0);
        assert_eq!(eval("sign(0) + sign(-4)").unwrap(), -1.0);
        assert_eq!(eval("nCr(5, 2) + perm(5, 2) + gcd(12, 18) + lcm(4, 6)").unwrap(), 48.0);
    }

    #[test]
    fn operator_keywords_as_calls() {
        let x = || vec![Expr::var("x")];
        let ctxt = Ctxt::with_vars([("x", 1.0)]);
        assert_float_absolute_eq!(Expr::call("sin", x()).eval(&ctxt).unwrap(), 1f64.sin());
        assert_float_absolute_eq!(Expr::call("Exp", x()).eval(&ctxt).unwrap(), 1f64.exp());

        let pow = Expr::call("pow", vec![Expr::num(2.0), Expr::num(10.0)]);
        assert_eq!(pow.eval_default().unwrap(), 1024.0);

        let err = Expr::call("cos", vec![]).eval_default().unwrap_err();
        assert!(err.is::<ArgumentCount>());
    }

    #[test]
    fn integer_only_arguments() {
        assert!(eval("factorial(-1)").unwrap_err().is::<InvalidArgument>());
        assert!(eval("2.5!").unwrap_err().is::<InvalidArgument>());
        assert!(eval("factorial(171)").unwrap_err().is::<Overflow>());
        assert_eq!(eval("factorial(5)").unwrap(), 120.0);

        let checked = Ctxt::new().with_integer_mode(IntegerMode::Checked);
        let expr = parse("factorial(171)").unwrap();
        assert!(expr.eval(&checked).unwrap_err().is::<Overflow>());
    }

    #[test]
    fn user_functions() {
        let mut ctxt = Ctxt::with_vars([("a", 10.0)]);
        ctxt.add_func("f", vec!["x".to_string()], parse("x^2 + a").unwrap());
        ctxt.add_native("hyp", 2, |args| args[0].hypot(args[1]));

        assert_eq!(parse("f(3)").unwrap().eval(&ctxt).unwrap(), 19.0);
        assert_eq!(parse("hyp(3, 4)").unwrap().eval(&ctxt).unwrap(), 5.0);

        let err = parse("f(1, 2)").unwrap().eval(&ctxt).unwrap_err();
        assert!(err.is::<ArgumentCount>());
    }

    #[test]
    fn runaway_recursion() {
        let mut ctxt = Ctxt::new();
        ctxt.add_func("f", vec!["x".to_string()], parse("f(x) + 1").unwrap());
        let err = parse("f(1)").unwrap().eval(&ctxt).unwrap_err();
        assert!(err.is::<StackOverflow>());
    }

    #[test]
    fn undefined_function_suggests() {
        let err = eval("mx(1, 2)").unwrap_err();
        let kind = err.downcast_ref::<UndefinedFunction>().unwrap();
        assert_eq!(kind.suggestions, vec!["max".to_string()]);
    }

    #[test]
    fn integral_marker_does_not_evaluate() {
        assert!(eval("integral(tan(x)^2, x)").unwrap_err().is::<UnevaluatedIntegral>());
    }
}
