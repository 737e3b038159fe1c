//! Operators of the expression tree.

use crate::parser::{Associativity, Precedence};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A one-operand operation. Apart from [`UnaryOp::Negate`] and [`UnaryOp::Factorial`], these are
/// written with function-call syntax, such as `sin(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    Negate,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Sqrt,
    Abs,
    Floor,
    Ceiling,
    Round,
    Sign,
    Factorial,
}

impl UnaryOp {
    /// The name the operation is written with when using function-call syntax.
    pub fn name(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceiling => "ceil",
            Self::Round => "round",
            Self::Sign => "sign",
            Self::Factorial => "factorial",
        }
    }

    /// Returns the precedence of the unary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Negate => Precedence::Neg,
            Self::Factorial => Precedence::Factorial,
            _ => Precedence::Atom,
        }
    }
}

/// A two-operand operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,

    /// `log(x, b)`, the logarithm of the left operand in the base of the right operand.
    LogBase,
}

impl BinaryOp {
    /// The infix symbol of the operation. [`BinaryOp::LogBase`] is written as a call instead.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Modulo => "%",
            Self::LogBase => "log",
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Subtract => Precedence::Term,
            Self::Multiply | Self::Divide | Self::Modulo => Precedence::Factor,
            Self::Power => Precedence::Exp,
            Self::LogBase => Precedence::Atom,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}
