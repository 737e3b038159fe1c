use std::{fmt, sync::Arc};
use sym_parser::Expr;

/// A native function body.
pub type NativeFn = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// A function added to a context at runtime.
#[derive(Clone)]
pub enum Func {
    /// A Rust closure taking a fixed number of arguments.
    Native {
        /// The number of arguments the closure takes.
        arity: usize,

        /// The closure.
        f: NativeFn,
    },

    /// A function defined by an expression, such as `f(x, y) = x^2 + y`.
    UserDefined {
        /// The names the arguments are bound to while evaluating the body.
        params: Vec<String>,

        /// The body of the function.
        body: Expr,
    },
}

impl Func {
    /// The exact number of arguments the function takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::Native { arity, .. } => *arity,
            Self::UserDefined { params, .. } => params.len(),
        }
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native { arity, .. } => f.debug_struct("Native").field("arity", arity).finish_non_exhaustive(),
            Self::UserDefined { params, body } => f.debug_struct("UserDefined")
                .field("params", params)
                .field("body", &body.to_string())
                .finish(),
        }
    }
}
