use crate::{
    approx::{expr_eq, is_const},
    funcs,
    numerical::{ctxt::IntegerMode, eval::{eval_binary, eval_unary}},
    symbolic::step_collector::StepCollector,
};
use log::trace;
use sym_parser::{ast::{BinaryOp, UnaryOp}, Expr};
use super::{step::Step, terms};

/// Records a step that produced `result`.
fn record(steps: &mut dyn StepCollector<Step>, step: Step, result: &Expr) {
    trace!("{:?} -> {}", step, result);
    steps.push(step);
}

/// Returns the folded value if it is finite. Negative zero is normalized to zero.
fn finite(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some(if value == 0.0 { 0.0 } else { value })
}

/// Applies the rules for a unary node whose operand is already simplified.
pub(super) fn unary(op: UnaryOp, operand: Expr, steps: &mut dyn StepCollector<Step>) -> Expr {
    if let Some(value) = operand.as_constant() {
        if let Some(folded) = eval_unary(op, value, IntegerMode::Float).ok().and_then(finite) {
            let result = Expr::num(folded);
            record(steps, Step::FoldConstants, &result);
            return result;
        }
        return Expr::unary(op, operand);
    }

    match (op, operand) {
        (UnaryOp::Negate, Expr::Unary(UnaryOp::Negate, inner)) => {
            record(steps, Step::DoubleNegation, &inner);
            *inner
        },
        (op, operand) => Expr::unary(op, operand),
    }
}

/// Applies the rules for a binary node whose operands are already simplified.
pub(super) fn binary(
    op: BinaryOp,
    lhs: Expr,
    rhs: Expr,
    steps: &mut dyn StepCollector<Step>,
) -> Expr {
    if let (Some(a), Some(b)) = (lhs.as_constant(), rhs.as_constant()) {
        if let Some(folded) = finite(eval_binary(op, a, b)) {
            let result = Expr::num(folded);
            record(steps, Step::FoldConstants, &result);
            return result;
        }
        return Expr::binary(op, lhs, rhs);
    }

    match op {
        BinaryOp::Add => add(lhs, rhs, steps),
        BinaryOp::Subtract => subtract(lhs, rhs, steps),
        BinaryOp::Multiply => multiply(lhs, rhs, steps),
        BinaryOp::Divide => divide(lhs, rhs, steps),
        BinaryOp::Power => power(lhs, rhs, steps),
        BinaryOp::Modulo | BinaryOp::LogBase => Expr::binary(op, lhs, rhs),
    }
}

/// Applies the rules for a function call whose arguments are already simplified. Only builtin
/// functions can be folded, since the bodies of user functions are not known here.
pub(super) fn function(name: &str, args: Vec<Expr>, steps: &mut dyn StepCollector<Step>) -> Expr {
    let values = args.iter().map(Expr::as_constant).collect::<Option<Vec<_>>>();
    if let (Some(values), Some(builtin)) = (values, funcs::get(name)) {
        if builtin.num_args() == values.len() {
            if let Some(folded) = builtin
                .eval(IntegerMode::Float, &values)
                .ok()
                .and_then(finite)
            {
                let result = Expr::num(folded);
                record(steps, Step::FoldConstants, &result);
                return result;
            }
        }
    }

    Expr::call(name, args)
}

fn add(lhs: Expr, rhs: Expr, steps: &mut dyn StepCollector<Step>) -> Expr {
    if is_const(&lhs, 0.0) {
        record(steps, Step::AddZero, &rhs);
        return rhs;
    }
    if is_const(&rhs, 0.0) {
        record(steps, Step::AddZero, &lhs);
        return lhs;
    }
    if expr_eq(&lhs, &rhs) {
        let result = multiply(Expr::num(2.0), lhs, steps);
        record(steps, Step::CombineLikeTerms, &result);
        return result;
    }

    terms::collect(Expr::binary(BinaryOp::Add, lhs, rhs), steps)
}

fn subtract(lhs: Expr, rhs: Expr, steps: &mut dyn StepCollector<Step>) -> Expr {
    if is_const(&rhs, 0.0) {
        record(steps, Step::SubtractZero, &lhs);
        return lhs;
    }
    if expr_eq(&lhs, &rhs) {
        let result = Expr::num(0.0);
        record(steps, Step::SubtractSelf, &result);
        return result;
    }

    terms::collect(Expr::binary(BinaryOp::Subtract, lhs, rhs), steps)
}

/// Splits a factor into its base and explicit exponent, if any.
fn as_power(expr: &Expr) -> (&Expr, Option<&Expr>) {
    match expr {
        Expr::Binary(BinaryOp::Power, base, exp) => (base, Some(exp)),
        _ => (expr, None),
    }
}

fn multiply(lhs: Expr, rhs: Expr, steps: &mut dyn StepCollector<Step>) -> Expr {
    if is_const(&lhs, 0.0) || is_const(&rhs, 0.0) {
        let result = Expr::num(0.0);
        record(steps, Step::MultiplyZero, &result);
        return result;
    }
    if is_const(&lhs, 1.0) {
        record(steps, Step::MultiplyOne, &rhs);
        return rhs;
    }
    if is_const(&rhs, 1.0) {
        record(steps, Step::MultiplyOne, &lhs);
        return lhs;
    }

    // numeric bases are left alone, `2 * 2^x` is not rewritten to `2^(x + 1)`
    let (lhs_base, lhs_exp) = as_power(&lhs);
    let (rhs_base, rhs_exp) = as_power(&rhs);
    if lhs_base.as_constant().is_none() && expr_eq(lhs_base, rhs_base) {
        let exponent = match (lhs_exp, rhs_exp) {
            (Some(a), Some(b)) => binary(BinaryOp::Add, a.clone(), b.clone(), steps),
            (Some(a), None) | (None, Some(a)) => {
                binary(BinaryOp::Add, a.clone(), Expr::num(1.0), steps)
            },
            (None, None) => Expr::num(2.0),
        };
        let result = power(lhs_base.clone(), exponent, steps);
        record(steps, Step::CombineLikeFactors, &result);
        return result;
    }

    Expr::binary(BinaryOp::Multiply, lhs, rhs)
}

fn divide(lhs: Expr, rhs: Expr, steps: &mut dyn StepCollector<Step>) -> Expr {
    if is_const(&lhs, 0.0) && !is_const(&rhs, 0.0) {
        let result = Expr::num(0.0);
        record(steps, Step::DivideZero, &result);
        return result;
    }
    if is_const(&rhs, 1.0) {
        record(steps, Step::DivideOne, &lhs);
        return lhs;
    }
    if expr_eq(&lhs, &rhs) {
        let result = Expr::num(1.0);
        record(steps, Step::DivideSelf, &result);
        return result;
    }

    Expr::binary(BinaryOp::Divide, lhs, rhs)
}

fn power(lhs: Expr, rhs: Expr, steps: &mut dyn StepCollector<Step>) -> Expr {
    if is_const(&rhs, 0.0) {
        let result = Expr::num(1.0);
        record(steps, Step::PowerZero, &result);
        return result;
    }
    if is_const(&rhs, 1.0) {
        record(steps, Step::PowerOne, &lhs);
        return lhs;
    }
    if is_const(&lhs, 1.0) {
        let result = Expr::num(1.0);
        record(steps, Step::PowerOneLeft, &result);
        return result;
    }
    if is_const(&lhs, 0.0) {
        let result = Expr::num(0.0);
        record(steps, Step::PowerZeroLeft, &result);
        return result;
    }

    Expr::binary(BinaryOp::Power, lhs, rhs)
}
