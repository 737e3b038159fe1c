use crate::{keyword, parser::{Associativity, Precedence}};
use std::fmt::{self, Display, Formatter};
use super::{BinaryOp, Expr, UnaryOp};

impl Expr {
    /// Returns the precedence this node has when written out. Function-call syntax and leaves
    /// bind the tightest; negative numbers bind like a unary minus.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Constant(value) if value.is_sign_negative() => Precedence::Neg,
            Self::Constant(_) | Self::Variable(_) => Precedence::Atom,
            Self::Unary(op, _) => op.precedence(),
            Self::Binary(op, _, _) => op.precedence(),
            Self::Function(..) | Self::Integral { .. } => Precedence::Atom,
        }
    }
}

/// Writes `expr`, wrapped in parentheses if `parens` is true.
fn fmt_wrapped(f: &mut Formatter, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Writes a comma-separated argument list in function-call syntax.
fn fmt_call<'a>(f: &mut Formatter, name: &str, args: impl IntoIterator<Item = &'a Expr>) -> fmt::Result {
    write!(f, "{}(", name)?;
    let mut iter = args.into_iter();
    if let Some(arg) = iter.next() {
        write!(f, "{}", arg)?;
        for arg in iter {
            write!(f, ", {}", arg)?;
        }
    }
    write!(f, ")")
}

fn fmt_constant(f: &mut Formatter, value: f64) -> fmt::Result {
    match keyword::constant_name(value) {
        Some(name) => write!(f, "{}", name),
        None => write!(f, "{}", value),
    }
}

/// Writes a binary operator in infix form, parenthesizing an operand only when reading the text
/// back would group it differently.
fn fmt_infix(f: &mut Formatter, op: BinaryOp, lhs: &Expr, rhs: &Expr) -> fmt::Result {
    let precedence = op.precedence();
    let (lhs_prec, rhs_prec) = (lhs.precedence(), rhs.precedence());
    let lhs_parens = lhs_prec < precedence
        || (lhs_prec == precedence && op.associativity() == Associativity::Right);
    let rhs_parens = rhs_prec < precedence
        || (rhs_prec == precedence && op.associativity() == Associativity::Left);

    fmt_wrapped(f, lhs, lhs_parens)?;
    match op {
        BinaryOp::Power => write!(f, "^")?,
        _ => write!(f, " {} ", op.symbol())?,
    }
    fmt_wrapped(f, rhs, rhs_parens)
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Constant(value) => fmt_constant(f, *value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Unary(UnaryOp::Negate, operand) => {
                write!(f, "-")?;
                fmt_wrapped(f, operand, operand.precedence() <= Precedence::Neg)
            },
            Self::Unary(UnaryOp::Factorial, operand) => {
                fmt_wrapped(f, operand, operand.precedence() < Precedence::Factorial)?;
                write!(f, "!")
            },
            Self::Unary(op, operand) => fmt_call(f, op.name(), [&**operand]),
            Self::Binary(BinaryOp::LogBase, value, base) => fmt_call(f, "log", [&**value, &**base]),
            Self::Binary(op, lhs, rhs) => fmt_infix(f, *op, lhs, rhs),
            Self::Function(name, args) => fmt_call(f, name, args),
            Self::Integral { integrand, var } => {
                write!(f, "integral({}, {})", integrand, var)
            },
        }
    }
}
