//! The expression tree.
//!
//! [`Expr`] is a closed sum type. Every node exclusively owns its children, so a tree can never
//! contain cycles or shared subtrees, and nodes are never mutated after construction: every
//! operation returns a new tree.

mod fmt;
mod iter;
pub mod op;

use std::{collections::BTreeSet, ops};

pub use iter::ExprIter;
pub use op::{BinaryOp, UnaryOp};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mathematical expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A number. Named constants such as `pi` are folded into this at parse time.
    Constant(f64),

    /// A variable, resolved at evaluation time.
    Variable(String),

    /// A unary operation or a one-argument built-in function, such as `-x` or `sin(x)`.
    Unary(UnaryOp, Box<Expr>),

    /// A binary operation, such as `x + 1` or `log(x, 2)`.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),

    /// A call to a named function with at least one argument, resolved at evaluation time.
    Function(String, Vec<Expr>),

    /// An antiderivative that no integration rule could find.
    ///
    /// This is not an error: it is a normal value that can be nested inside an otherwise
    /// successful result, and it is written as `integral(integrand, var)`.
    Integral {
        integrand: Box<Expr>,
        var: String,
    },
}

impl Expr {
    /// Creates a [`Expr::Constant`].
    pub fn num(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a [`Expr::Variable`].
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a [`Expr::Unary`].
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary(op, Box::new(operand))
    }

    /// Creates a [`Expr::Binary`].
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Creates a [`Expr::Function`].
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Function(name.into(), args)
    }

    /// Creates the marker for an antiderivative that could not be found.
    pub fn integral(integrand: Expr, var: impl Into<String>) -> Self {
        Self::Integral {
            integrand: Box::new(integrand),
            var: var.into(),
        }
    }

    /// `self ^ exponent`.
    pub fn pow(self, exponent: Expr) -> Self {
        Self::binary(BinaryOp::Power, self, exponent)
    }

    /// Returns the value of this node if it is a [`Expr::Constant`].
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this node is the variable with the given name.
    pub fn is_var(&self, name: &str) -> bool {
        matches!(self, Self::Variable(v) if v == name)
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order.
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the direct children of this node, in order.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Self::Constant(_) | Self::Variable(_) => Vec::new(),
            Self::Unary(_, operand) => vec![&**operand],
            Self::Binary(_, lhs, rhs) => vec![&**lhs, &**rhs],
            Self::Function(_, args) => args.iter().collect(),
            Self::Integral { integrand, .. } => vec![&**integrand],
        }
    }

    /// Returns the names of all variables in the expression.
    ///
    /// The variable of an [`Expr::Integral`] marker counts, since the antiderivative it stands
    /// for is a function of it.
    pub fn variables(&self) -> BTreeSet<String> {
        self.post_order_iter()
            .filter_map(|expr| match expr {
                Self::Variable(name) => Some(name.clone()),
                Self::Integral { var, .. } => Some(var.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns true if the variable appears anywhere in the expression.
    pub fn contains_var(&self, name: &str) -> bool {
        self.post_order_iter().any(|expr| match expr {
            Self::Variable(v) => v == name,
            Self::Integral { var, .. } => var == name,
            _ => false,
        })
    }

    /// Returns a new tree with every occurrence of the variable replaced by `replacement`.
    ///
    /// An [`Expr::Integral`] marker over the same variable is left untouched, since the variable
    /// is bound by it.
    pub fn substitute(&self, name: &str, replacement: &Expr) -> Expr {
        match self {
            Self::Constant(_) => self.clone(),
            Self::Variable(v) if v == name => replacement.clone(),
            Self::Variable(_) => self.clone(),
            Self::Unary(op, operand) => Self::unary(*op, operand.substitute(name, replacement)),
            Self::Binary(op, lhs, rhs) => Self::binary(
                *op,
                lhs.substitute(name, replacement),
                rhs.substitute(name, replacement),
            ),
            Self::Function(f, args) => Self::call(
                f.clone(),
                args.iter().map(|arg| arg.substitute(name, replacement)).collect(),
            ),
            Self::Integral { var, .. } if var == name => self.clone(),
            Self::Integral { integrand, var } => {
                Self::integral(integrand.substitute(name, replacement), var.clone())
            },
        }
    }

    /// Returns true if an [`Expr::Integral`] marker appears anywhere in the expression.
    pub fn is_unsupported(&self) -> bool {
        self.post_order_iter().any(|expr| matches!(expr, Self::Integral { .. }))
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Add, self, rhs)
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Subtract, self, rhs)
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Multiply, self, rhs)
    }
}

impl ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Divide, self, rhs)
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::unary(UnaryOp::Negate, self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::parse;

    #[test]
    fn variables_are_sorted_and_unique() {
        let expr = parse("y * x + sin(x) - f(z, 2)").unwrap();
        let vars = expr.variables().into_iter().collect::<Vec<_>>();
        assert_eq!(vars, vec!["x", "y", "z"]);
    }

    #[test]
    fn constants_are_not_variables() {
        let expr = parse("pi * e + x").unwrap();
        assert_eq!(expr.variables().len(), 1);
    }

    #[test]
    fn substitute() {
        let expr = parse("x^2 + y").unwrap();
        let out = expr.substitute("x", &parse("t + 1").unwrap());
        assert_eq!(out, parse("(t + 1)^2 + y").unwrap());

        // original tree is untouched
        assert_eq!(expr, parse("x^2 + y").unwrap());
    }

    #[test]
    fn substitute_skips_bound_integral_variable() {
        let expr = Expr::integral(parse("tan(x)^2").unwrap(), "x") + Expr::var("x");
        let out = expr.substitute("x", &Expr::num(2.0));
        assert_eq!(out, Expr::integral(parse("tan(x)^2").unwrap(), "x") + Expr::num(2.0));
    }

    #[test]
    fn unsupported_marker_is_found_when_nested() {
        let expr = Expr::var("x") + Expr::num(3.0) * Expr::integral(Expr::var("x"), "x");
        assert!(expr.is_unsupported());
        assert!(!parse("x + 3").unwrap().is_unsupported());
    }

    #[test]
    fn post_order() {
        let expr = parse("a + b * c").unwrap();
        let order = expr.post_order_iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["a", "b", "c", "b * c", "a + b * c"]);
    }
}
