use crate::{
    funcs,
    numerical::{
        ctxt::{Ctxt, MAX_RECURSION_DEPTH},
        error::{ArgumentCount, StackOverflow, UndefinedFunction},
        func::Func,
    },
};
use sym_error::Error;
use sym_parser::keyword::{self, Keyword};
use super::{eval_binary, eval_expr, eval_unary};

fn check_args(name: &str, expected: usize, args: &[f64]) -> Result<(), Error> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(Error::unspanned(ArgumentCount {
            name: name.to_string(),
            expected,
            given: args.len(),
        }))
    }
}

/// Calls a builtin, or a function from the context, with evaluated arguments.
pub(super) fn eval_call(name: &str, args: &[f64], ctxt: &Ctxt, depth: usize) -> Result<f64, Error> {
    if let Some(builtin) = funcs::get(name) {
        check_args(name, builtin.num_args(), args)?;
        return builtin.eval(ctxt.integer_mode, args);
    }

    // operators spelled as calls, such as `sin` in a function node built by hand
    match keyword::function(name) {
        Some(Keyword::Unary(op)) => {
            check_args(name, 1, args)?;
            if let [x] = args {
                return eval_unary(op, *x, ctxt.integer_mode);
            }
        },
        Some(Keyword::Binary(op)) => {
            check_args(name, 2, args)?;
            if let [lhs, rhs] = args {
                return Ok(eval_binary(op, *lhs, *rhs));
            }
        },
        _ => (),
    }

    match ctxt.get_func(name) {
        Some(Func::Native { arity, f }) => {
            check_args(name, *arity, args)?;
            Ok(f(args))
        },
        Some(Func::UserDefined { params, body }) => {
            check_args(name, params.len(), args)?;
            if depth >= MAX_RECURSION_DEPTH {
                return Err(Error::unspanned(StackOverflow { name: name.to_string() }));
            }

            // the body sees the caller's bindings, shadowed by the parameters
            let mut scope = ctxt.clone();
            for (param, value) in params.iter().zip(args) {
                scope.add_var(param, *value);
            }
            eval_expr(body, &scope, depth + 1)
        },
        None => Err(Error::unspanned(UndefinedFunction {
            name: name.to_string(),
            suggestions: ctxt.get_similar_funcs(name),
        })),
    }
}
