//! Built-in functions.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method, which
//! can be used to evaluate the function directly from Rust. Functions that are written as
//! function nodes (such as `min(a, b)`) also implement [`Builtin`], so they can be looked up by
//! name at evaluation time. Functions with their own operator node (such as `sin` or `!`) are
//! dispatched by the evaluator directly.

pub mod combinatoric;
pub mod miscellaneous;
pub mod trigonometry;

use crate::numerical::builtin::Builtin;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTINS: Lazy<HashMap<&'static str, Box<dyn Builtin>>> = Lazy::new(all);

/// Returns a list of all builtin functions that are evaluated through function nodes.
pub fn all() -> HashMap<&'static str, Box<dyn Builtin>> {
    use combinatoric::*;
    use miscellaneous::*;
    use trigonometry::*;

    macro_rules! build {
        ($($upname:ident),* $(,)?) => {
            [
                $(
                    Box::new($upname) as Box<dyn Builtin>,
                )*
            ]
                .into_iter()
                .map(|builtin| (builtin.name(), builtin))
                .collect()
        };
    }

    build! {
        Sec,
        Csc,
        Cot,
        Atan2,
        Min,
        Max,
        Gcd,
        Lcm,
        Perm,
        Binom,
    }
}

/// Returns the builtin function with the given name.
pub fn get(name: &str) -> Option<&'static dyn Builtin> {
    BUILTINS.get(name).map(|builtin| &**builtin)
}

/// Returns the names of all builtin functions.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.keys().copied()
}
