//! Functions that don't fit in any other category.

use crate::numerical::{builtin::Builtin, ctxt::IntegerMode};
use sym_error::Error;

/// Returns the smaller of two numbers.
#[derive(Debug)]
pub struct Min;

impl Min {
    pub fn eval_static(a: f64, b: f64) -> f64 {
        a.min(b)
    }
}

/// Returns the larger of two numbers.
#[derive(Debug)]
pub struct Max;

impl Max {
    pub fn eval_static(a: f64, b: f64) -> f64 {
        a.max(b)
    }
}

/// Sign function. Unlike [`f64::signum`], zero maps to zero.
#[derive(Debug)]
pub struct Sign;

impl Sign {
    pub fn eval_static(x: f64) -> f64 {
        if x == 0.0 {
            0.0
        } else {
            x.signum()
        }
    }
}

impl Builtin for Min {
    fn name(&self) -> &'static str {
        "min"
    }

    fn num_args(&self) -> usize {
        2
    }

    fn eval(&self, _: IntegerMode, args: &[f64]) -> Result<f64, Error> {
        Ok(Self::eval_static(args[0], args[1]))
    }
}

impl Builtin for Max {
    fn name(&self) -> &'static str {
        "max"
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
    use super::*;

    #[test]
    fn sign() {
        assert_eq!(Sign::eval_static(-3.5), -1.0);
        assert_eq!(Sign::eval_static(0.0), 0.0);
        assert_eq!(Sign::eval_static(2.0), 1.0);
        assert!(Sign::eval_static(f64::NAN).is_nan());
    }

    #[test]
    fn min_max() {
        assert_eq!(Min::eval_static(2.0, -1.0), -1.0);
        assert_eq!(Max::eval_static(2.0, -1.0), 2.0);
    }
}
