//! Reserved function and constant names.
//!
//! Names are matched case-insensitively. Anything not listed here is a variable, or a generic
//! function call when it is followed by `(`.

use crate::ast::{BinaryOp, UnaryOp};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// What a reserved function name parses into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Keyword {
    /// A one-argument function represented as a unary operator node.
    Unary(UnaryOp),

    /// A two-argument function represented as a binary operator node, such as `log(x, b)`.
    Binary(BinaryOp),

    /// A built-in function represented as a function node with the canonical name.
    Named {
        name: &'static str,
        arity: usize,
    },

    /// `integral(f, x)`, the marker left by the integrator for forms it cannot handle.
    Integral,
}

impl Keyword {
    /// The exact number of arguments the function accepts.
    pub fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) | Self::Integral => 2,
            Self::Named { arity, .. } => *arity,
        }
    }
}

static KEYWORDS: Lazy<HashMap<&'static str, Keyword>> = Lazy::new(|| {
    use Keyword::*;
    let named = |name, arity| Named { name, arity };
    HashMap::from([
        ("sin", Unary(UnaryOp::Sin)),
        ("cos", Unary(UnaryOp::Cos)),
        ("tan", Unary(UnaryOp::Tan)),
        ("asin", Unary(UnaryOp::Asin)),
        ("arcsin", Unary(UnaryOp::Asin)),
        ("acos", Unary(UnaryOp::Acos)),
        ("arccos", Unary(UnaryOp::Acos)),
        ("atan", Unary(UnaryOp::Atan)),
        ("arctan", Unary(UnaryOp::Atan)),
        ("sinh", Unary(UnaryOp::Sinh)),
        ("cosh", Unary(UnaryOp::Cosh)),
        ("tanh", Unary(UnaryOp::Tanh)),
        ("exp", Unary(UnaryOp::Exp)),
        ("ln", Unary(UnaryOp::Ln)),
        ("log10", Unary(UnaryOp::Log10)),
        ("sqrt", Unary(UnaryOp::Sqrt)),
        ("abs", Unary(UnaryOp::Abs)),
        ("floor", Unary(UnaryOp::Floor)),
        ("ceil", Unary(UnaryOp::Ceiling)),
        ("ceiling", Unary(UnaryOp::Ceiling)),
        ("round", Unary(UnaryOp::Round)),
        ("sign", Unary(UnaryOp::Sign)),
        ("factorial", Unary(UnaryOp::Factorial)),
        ("log", Binary(BinaryOp::LogBase)),
        ("pow", Binary(BinaryOp::Power)),
        ("sec", named("sec", 1)),
        ("csc", named("csc", 1)),
        ("cot", named("cot", 1)),
        ("min", named("min", 2)),
        ("max", named("max", 2)),
        ("atan2", named("atan2", 2)),
        ("gcd", named("gcd", 2)),
        ("lcm", named("lcm", 2)),
        ("perm", named("perm", 2)),
        ("npr", named("perm", 2)),
        ("binom", named("binom", 2)),
        ("ncr", named("binom", 2)),
        ("integral", Integral),
    ])
});

static CONSTANTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    use std::f64::consts::{E, PI, TAU};
    HashMap::from([
        ("pi", PI),
        ("π", PI),
        ("e", E),
        ("tau", TAU),
        ("τ", TAU),
        ("phi", PHI),
        ("φ", PHI),
    ])
});

/// Looks up a reserved function name.
pub fn function(name: &str) -> Option<Keyword> {
    KEYWORDS.get(name.to_lowercase().as_str()).copied()
}

/// Looks up a named constant.
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name.to_lowercase().as_str()).copied()
}

/// Returns the name a constant value is written with, if it is exactly one of the named
/// constants.
pub fn constant_name(value: f64) -> Option<&'static str> {
    use std::f64::consts::{E, PI, TAU};
    if value == PI {
        Some("pi")
    } else if value == E {
        Some("e")
    } else if value == TAU {
        Some("tau")
    } else if value == PHI {
        Some("phi")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive() {
        assert_eq!(function("SIN"), Some(Keyword::Unary(UnaryOp::Sin)));
        assert_eq!(function("Ceiling"), Some(Keyword::Unary(UnaryOp::Ceiling)));
        assert_eq!(constant("Pi"), Some(std::f64::consts::PI));
        assert_eq!(function("foo"), None);
        assert_eq!(constant("x"), None);
    }

    #[test]
    fn aliases_share_canonical_name() {
        assert_eq!(function("nCr"), function("binom"));
        assert_eq!(function("npr"), Some(Keyword::Named { name: "perm", arity: 2 }));
    }
}
