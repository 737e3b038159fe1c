//! Numerical evaluation of expressions.
//!
//! Arithmetic follows IEEE 754 double semantics, so `1 / 0` is infinity rather than an error.
//! Only the integer-only functions (factorial, gcd, lcm, permutations, combinations) validate
//! their arguments; see [`ctxt::IntegerMode`].

pub mod builtin;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod func;
