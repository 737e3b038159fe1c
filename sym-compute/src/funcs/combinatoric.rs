//! Counting functions. These only accept arguments within [`EPSILON`] of a non-negative integer.
//!
//! [`EPSILON`]: crate::approx::EPSILON

use crate::{
    approx::{as_natural, MAX_EXACT_INT},
    numerical::{
        builtin::Builtin,
        ctxt::IntegerMode,
        error::{InvalidArgument, Overflow},
    },
};
use sym_error::Error;

/// Converts the argument to an integer, failing if it is not a non-negative integer.
fn natural(function: &'static str, value: f64) -> Result<u64, Error> {
    let n = as_natural(value).ok_or_else(|| Error::unspanned(InvalidArgument {
        function,
        value,
        reason: "must be a non-negative integer",
    }))?;

    if n >= u64::MAX as f64 {
        return Err(overflow(function));
    }
    Ok(n as u64)
}

fn overflow(function: &'static str) -> Error {
    Error::unspanned(Overflow { function, limit: None })
}

/// Fails if the float result is not finite.
fn finite(function: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(overflow(function))
    }
}

/// Fails if the integer result is not exactly representable as an `f64`.
fn exact(function: &'static str, value: Option<u128>) -> Result<u128, Error> {
    value
        .filter(|value| *value <= MAX_EXACT_INT)
        .ok_or_else(|| overflow(function))
}

/// Factorial function.
#[derive(Debug)]
pub struct Factorial;

impl Factorial {
    /// The largest argument whose factorial is finite as an `f64`.
    pub const MAX_FLOAT_ARG: u64 = 170;

    pub fn eval_static(n: f64, mode: IntegerMode) -> Result<f64, Error> {
        let n = natural("factorial", n)?;
        match mode {
            IntegerMode::Float => {
                if n > Self::MAX_FLOAT_ARG {
                    return Err(Error::unspanned(Overflow {
                        function: "factorial",
                        limit: Some(Self::MAX_FLOAT_ARG),
                    }));
                }
                Ok((2..=n).map(|i| i as f64).product())
            },
            IntegerMode::Checked => {
                let mut acc = 1u128;
                for i in 2..=n as u128 {
                    acc = exact("factorial", acc.checked_mul(i))?;
                }
                Ok(acc as f64)
            },
        }
    }
}

/// Permutations function. Returns the number of ways to choose `k` items from `n` items, where
/// the order of the items matters. Zero if `k > n`.
#[derive(Debug)]
pub struct Perm;

impl Perm {
    pub fn eval_static(n: f64, k: f64, mode: IntegerMode) -> Result<f64, Error> {
        let (n, k) = (natural("perm", n)?, natural("perm", k)?);
        if k > n {
            return Ok(0.0);
        }

        match mode {
            IntegerMode::Float => {
                let mut acc = 1.0;
                for i in (n - k + 1)..=n {
                    acc = finite("perm", acc * i as f64)?;
                }
                Ok(acc)
            },
            IntegerMode::Checked => {
                let mut acc = 1u128;
                for i in (n - k + 1)..=n {
                    acc = exact("perm", acc.checked_mul(i as u128))?;
                }
                Ok(acc as f64)
            },
        }
    }
}

/// Combinations function. Returns the number of ways to choose `k` items from `n` items, where
/// the order of the items does not matter. Zero if `k > n`.
#[derive(Debug)]
pub struct Binom;

impl Binom {
    pub fn eval_static(n: f64, k: f64, mode: IntegerMode) -> Result<f64, Error> {
        let (n, k) = (natural("binom", n)?, natural("binom", k)?);
        if k > n {
            return Ok(0.0);
        }

        // C(n, k) = C(n, n - k); the partial products C(n, i) grow for i <= n / 2
        let k = k.min(n - k);
        match mode {
            IntegerMode::Float => {
                let mut acc = 1.0;
                for i in 0..k {
                    acc = finite("binom", acc * (n - i) as f64 / (i + 1) as f64)?;
                }
                Ok(acc.round())
            },
            IntegerMode::Checked => {
                let mut acc = 1u128;
                for i in 0..k {
                    // exact: C(n, i) * (n - i) is always divisible by i + 1
                    let product = acc.checked_mul((n - i) as u128);
                    acc = exact("binom", product.map(|p| p / (i + 1) as u128))?;
                }
                Ok(acc as f64)
            },
        }
    }
}

/// Greatest common divisor.
#[derive(Debug)]
pub struct Gcd;

impl Gcd {
    pub fn eval_int(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    pub fn eval_static(a: f64, b: f64) -> Result<f64, Error> {
        let (a, b) = (natural("gcd", a)?, natural("gcd", b)?);
        Ok(Self::eval_int(a, b) as f64)
    }
}

/// Least common multiple.
#[derive(Debug)]
pub struct Lcm;

impl Lcm {
    pub fn eval_static(a: f64, b: f64, mode: IntegerMode) -> Result<f64, Error> {
        let (a, b) = (natural("lcm", a)?, natural("lcm", b)?);
        if a == 0 || b == 0 {
            return Ok(0.0);
        }

        let lcm = (a / Gcd::eval_int(a, b)) as u128 * b as u128;
        match mode {
            IntegerMode::Float => finite("lcm", lcm as f64),
            IntegerMode::Checked => Ok(exact("lcm", Some(lcm))? as f64),
        }
    }
}

impl Builtin for Perm {
    fn name(&self) -> &'static str {
        "perm"
    }

    fn num_args(&self) -> usize {
        2
    }

    fn eval(&self, mode: IntegerMode, args: &[f64]) -> Result<f64, Error> {
        Self::eval_static(args[0], args[1], mode)
    }
}

impl Builtin for Binom {
    fn name(&self) -> &'static str {
        "binom"
    }

    fn num_args(&self) -> usize {
        2
    }

    fn eval(&self, mode: IntegerMode, args: &[f64]) -> Result<f64, Error> {
        Self::eval_static(args[0], args[1], mode)
    }
}

impl Builtin for Gcd {
    fn name(&self) -> &'static str {
        "gcd"
    }

    fn num_args(&self) -> usize {
        2
    }

    fn eval(&self, _: IntegerMode, args: &[f64]) -> Result<f64, Error> {
        Self::eval_static(args[0], args[1])
    }
}

impl Builtin for Lcm {
    fn name(&self) -> &'static str {
        "lcm"
    }

    fn num_args(&self) -> usize {
        2
    }

    fn eval(&self, mode: IntegerMode, args: &[f64]) -> Result<f64, Error> {
        Self::eval_static(args[0], args[1], mode)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    const FLOAT: IntegerMode = IntegerMode::Float;
    const CHECKED: IntegerMode = IntegerMode::Checked;

    #[test]
    fn factorial() {
        assert_eq!(Factorial::eval_static(0.0, FLOAT).unwrap(), 1.0);
        assert_eq!(Factorial::eval_static(5.0, FLOAT).unwrap(), 120.0);
        assert_eq!(Factorial::eval_static(5.0 + 1e-12, CHECKED).unwrap(), 120.0);
        assert!(Factorial::eval_static(170.0, FLOAT).unwrap().is_finite());
    }

    #[test]
    fn factorial_domain() {
        assert!(Factorial::eval_static(-1.0, FLOAT).unwrap_err().is::<InvalidArgument>());
        assert!(Factorial::eval_static(2.5, CHECKED).unwrap_err().is::<InvalidArgument>());
        assert!(Factorial::eval_static(f64::NAN, FLOAT).unwrap_err().is::<InvalidArgument>());
    }

    #[test]
    fn factorial_overflow() {
        let err = Factorial::eval_static(171.0, FLOAT).unwrap_err();
        assert_eq!(err.downcast_ref::<Overflow>().unwrap().limit, Some(170));

        // 18! fits in 53 bits, 19! does not
        assert_eq!(Factorial::eval_static(18.0, CHECKED).unwrap(), 6_402_373_705_728_000.0);
        assert!(Factorial::eval_static(19.0, CHECKED).unwrap_err().is::<Overflow>());
        assert!(Factorial::eval_static(171.0, CHECKED).unwrap_err().is::<Overflow>());
    }

    #[test]
    fn permutations() {
        assert_eq!(Perm::eval_static(5.0, 2.0, FLOAT).unwrap(), 20.0);
        assert_eq!(Perm::eval_static(5.0, 2.0, CHECKED).unwrap(), 20.0);
        assert_eq!(Perm::eval_static(2.0, 5.0, FLOAT).unwrap(), 0.0);
        assert!(Perm::eval_static(1000.0, 500.0, FLOAT).unwrap_err().is::<Overflow>());
        assert!(Perm::eval_static(100.0, 20.0, CHECKED).unwrap_err().is::<Overflow>());
    }

    #[test]
    fn combinations() {
        assert_eq!(Binom::eval_static(5.0, 2.0, FLOAT).unwrap(), 10.0);
        assert_eq!(Binom::eval_static(52.0, 5.0, CHECKED).unwrap(), 2_598_960.0);
        assert_eq!(Binom::eval_static(10.0, 10.0, FLOAT).unwrap(), 1.0);
        assert_eq!(Binom::eval_static(3.0, 4.0, CHECKED).unwrap(), 0.0);
        assert!(Binom::eval_static(2000.0, 1000.0, FLOAT).unwrap_err().is::<Overflow>());
        assert!(Binom::eval_static(100.0, 50.0, CHECKED).unwrap_err().is::<Overflow>());
    }

    #[test]
    fn gcd_lcm() {
        assert_eq!(Gcd::eval_static(12.0, 18.0).unwrap(), 6.0);
        assert_eq!(Gcd::eval_static(0.0, 7.0).unwrap(), 7.0);
        assert_eq!(Lcm::eval_static(4.0, 6.0, FLOAT).unwrap(), 12.0);
        assert_eq!(Lcm::eval_static(0.0, 6.0, CHECKED).unwrap(), 0.0);
        assert!(Gcd::eval_static(1.5, 3.0).unwrap_err().is::<InvalidArgument>());
    }
}
