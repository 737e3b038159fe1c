use crate::funcs;
use levenshtein::levenshtein;
use std::{collections::HashMap, sync::Arc};
use super::func::Func;
use sym_parser::Expr;

/// The maximum depth of nested user-defined function calls. This is used to detect stack
/// overflows.
pub const MAX_RECURSION_DEPTH: usize = 256;

/// How integer-only functions (factorial, gcd, lcm, permutations, combinations) compute their
/// results and detect overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegerMode {
    /// Compute in `f64`. A factorial argument above 170 overflows, and any other result that is
    /// not finite overflows.
    #[default]
    Float,

    /// Compute with checked integer arithmetic. A result that is not exactly representable as an
    /// `f64` (that is, larger than 2^53) overflows.
    Checked,
}

/// A context to use when evaluating an expression, containing the variables and functions that
/// can be used within the expression.
///
/// Evaluation only ever borrows the context immutably.
#[derive(Debug, Clone, Default)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,

    /// The functions in the context, in addition to the builtins.
    funcs: HashMap<String, Func>,

    /// How integer-only functions handle overflow.
    pub integer_mode: IntegerMode,
}

impl Ctxt {
    /// Creates a new context with no variables or user functions.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Creates a context binding the given variables.
    pub fn with_vars<'a>(vars: impl IntoIterator<Item = (&'a str, f64)>) -> Ctxt {
        let mut ctxt = Ctxt::new();
        for (name, value) in vars {
            ctxt.add_var(name, value);
        }
        ctxt
    }

    /// Sets how integer-only functions handle overflow.
    pub fn with_integer_mode(mut self, mode: IntegerMode) -> Ctxt {
        self.integer_mode = mode;
        self
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Add a user-defined function to the context.
    pub fn add_func(&mut self, name: &str, params: Vec<String>, body: Expr) {
        self.funcs.insert(name.to_string(), Func::UserDefined { params, body });
    }

    /// Add a native function to the context.
    pub fn add_native(
        &mut self,
        name: &str,
        arity: usize,
        f: impl Fn(&[f64]) -> f64 + Send + Sync + 'static,
    ) {
        self.funcs.insert(name.to_string(), Func::Native { arity, f: Arc::new(f) });
    }

    /// Get a function in the context.
    pub fn get_func(&self, name: &str) -> Option<&Func> {
        self.funcs.get(name)
    }

    /// Returns the names of builtin and context functions whose names are similar to the given
    /// name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<String> {
        let mut similar = funcs::names()
            .map(str::to_string)
            .chain(self.funcs.keys().cloned())
            .filter(|candidate| levenshtein(name, candidate) < 2)
            .collect::<Vec<_>>();
        similar.sort();
        similar.dedup();
        similar
    }
}

impl From<HashMap<String, f64>> for Ctxt {
    fn from(vars: HashMap<String, f64>) -> Self {
        Ctxt {
            vars,
            ..Default::default()
        }
    }
}
