//! Reciprocal trigonometric functions and the two-argument arctangent.

use crate::numerical::{builtin::Builtin, ctxt::IntegerMode};
use sym_error::Error;

/// Secant function.
#[derive(Debug)]
pub struct Sec;

impl Sec {
    pub fn eval_static(x: f64) -> f64 {
        x.cos().recip()
    }
}

/// Cosecant function.
#[derive(Debug)]
pub struct Csc;

impl Csc {
    pub fn eval_static(x: f64) -> f64 {
        x.sin().recip()
    }
}

/// Cotangent function.
#[derive(Debug)]
pub struct Cot;

impl Cot {
    pub fn eval_static(x: f64) -> f64 {
        x.cos() / x.sin()
    }
}

/// Four-quadrant arctangent of `y / x`, in `(-pi, pi]`.
#[derive(Debug)]
pub struct Atan2;

impl Atan2 {
    pub fn eval_static(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
}

impl Builtin for Sec {
    fn name(&self) -> &'static str {
        "sec"
    }

    fn num_args(&self) -> usize {
        1
    }

    fn eval(&self, _: IntegerMode, args: &[f64]) -> Result<f64, Error> {
        Ok(Self::eval_static(args[0]))
    }
}

impl Builtin for Csc {
    fn name(&self) -> &'static str {
        "csc"
    }

    fn num_args(&self) -> usize {
        1
    }

    fn eval(&self, _: IntegerMode, args: &[f64]) -> Result<f64, Error> {
        Ok(Self::eval_static(args[0]))
    }
}

impl Builtin for Cot {
    fn name(&self) -> &'static str {
        "cot"
    }

    fn num_args(&self) -> usize {
        1
    }

    fn eval(&self, _: IntegerMode, args: &[f64]) -> Result<f64, Error> {
        Ok(Self::eval_static(args[0]))
    }
}

impl Builtin for Atan2 {
    fn name(&self) -> &'static str {
        "atan2"
    }

    fn num_args(&self) -> usize {
        2
    }

    fn eval(&self, _: IntegerMode, args: &[f64]) -> Result<f64, Error> {
        Ok(Self::eval_static(args[0], args[1]))
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use std::f64::consts::{FRAC_PI_4, PI};
    use super::*;

    #[test]
    fn reciprocals() {
        assert_float_absolute_eq!(Sec::eval_static(0.0), 1.0);
        assert_float_absolute_eq!(Csc::eval_static(PI / 2.0), 1.0);
        assert_float_absolute_eq!(Cot::eval_static(FRAC_PI_4), 1.0, 1e-12);
    }

    #[test]
    fn atan2_quadrants() {
        assert_float_absolute_eq!(Atan2::eval_static(1.0, -1.0), 3.0 * FRAC_PI_4, 1e-12);
        assert_float_absolute_eq!(Atan2::eval_static(-1.0, -1.0), -3.0 * FRAC_PI_4, 1e-12);
    }
}
