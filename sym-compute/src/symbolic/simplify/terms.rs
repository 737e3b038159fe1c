//! Collection of like terms in sums and differences.
//!
//! A sum is flattened into a list of terms, each a numeric coefficient times an optional
//! non-numeric base. Nested sums, differences, and negations are flattened through, and a
//! numeric factor on either side of a product becomes part of the coefficient (so `2*(x + y)`
//! contributes `2*x` and `2*y`). Terms with structurally equal bases are merged, terms whose
//! coefficient is within tolerance of zero are dropped, and the sum is rebuilt with the terms in
//! the order they were first seen.

use crate::{
    approx::{expr_eq, is_one, is_zero},
    symbolic::step_collector::StepCollector,
};
use log::trace;
use sym_parser::{ast::{BinaryOp, UnaryOp}, Expr};
use super::{rules, step::Step};

/// A numeric coefficient times a base. A missing base is a plain number.
#[derive(Debug)]
struct Term {
    coef: f64,
    base: Option<Expr>,
}

impl Term {
    fn same_base(&self, other: &Term) -> bool {
        match (&self.base, &other.base) {
            (None, None) => true,
            (Some(a), Some(b)) => expr_eq(a, b),
            _ => false,
        }
    }
}

/// Flattens `expr`, scaled by `coef`, into the list of terms.
fn flatten(expr: &Expr, coef: f64, out: &mut Vec<Term>) {
    match expr {
        Expr::Constant(value) => out.push(Term { coef: coef * value, base: None }),
        Expr::Binary(BinaryOp::Add, lhs, rhs) => {
            flatten(lhs, coef, out);
            flatten(rhs, coef, out);
        },
        Expr::Binary(BinaryOp::Subtract, lhs, rhs) => {
            flatten(lhs, coef, out);
            flatten(rhs, -coef, out);
        },
        Expr::Unary(UnaryOp::Negate, operand) => flatten(operand, -coef, out),
        Expr::Binary(BinaryOp::Multiply, lhs, rhs) => match (lhs.as_constant(), rhs.as_constant()) {
            (Some(c), _) => flatten(rhs, coef * c, out),
            (_, Some(c)) => flatten(lhs, coef * c, out),
            _ => out.push(Term { coef, base: Some(expr.clone()) }),
        },
        _ => out.push(Term { coef, base: Some(expr.clone()) }),
    }
}

/// Builds the expression for a single term with a positive or negative coefficient.
fn term_expr(coef: f64, base: Option<Expr>, steps: &mut dyn StepCollector<Step>) -> Expr {
    match base {
        None => Expr::num(coef),
        Some(base) if is_one(coef) => base,
        Some(base) if is_one(-coef) => rules::unary(UnaryOp::Negate, base, steps),
        Some(base) => rules::binary(BinaryOp::Multiply, Expr::num(coef), base, steps),
    }
}

/// Collects like terms in the given sum or difference.
pub(super) fn collect(expr: Expr, steps: &mut dyn StepCollector<Step>) -> Expr {
    let mut flat = Vec::new();
    flatten(&expr, 1.0, &mut flat);

    let mut combined = false;
    let mut terms: Vec<Term> = Vec::with_capacity(flat.len());
    for term in flat {
        match terms.iter_mut().find(|t| t.same_base(&term)) {
            Some(existing) => {
                existing.coef += term.coef;
                combined = true;
            },
            None => terms.push(term),
        }
    }
    terms.retain(|term| !is_zero(term.coef));

    let mut iter = terms.into_iter();
    let result = match iter.next() {
        Some(first) => {
            let mut acc = term_expr(first.coef, first.base, steps);
            for term in iter {
                acc = if term.coef < 0.0 {
                    Expr::binary(BinaryOp::Subtract, acc, term_expr(-term.coef, term.base, steps))
                } else {
                    Expr::binary(BinaryOp::Add, acc, term_expr(term.coef, term.base, steps))
                };
            }
            acc
        },
        None => Expr::num(0.0),
    };

    if combined {
        trace!("{:?} -> {}", Step::CombineLikeTerms, result);
        steps.push(Step::CombineLikeTerms);
    }
    result
}
