//! Executing commands against the bindings of a REPL session.

use crate::command::{Command, Input};
use log::info;
use sym_compute::{
    derivative,
    integrate,
    is_unsupported,
    simplify,
    simplify_with_steps,
    Ctxt,
    Eval,
};
use sym_error::Error;
use sym_parser::tokenizer::tokenize;

/// The state kept between lines: variables and user-defined functions.
#[derive(Debug, Default)]
pub struct Session {
    ctxt: Ctxt,
}

impl Session {
    /// Creates a new session with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates the input with the session's bindings.
    fn eval(&self, input: &Input) -> Result<f64, Error> {
        let expr = input.parse()?;
        expr.eval(&self.ctxt).map_err(|err| err.offset_spans(input.offset))
    }

    /// Executes the command, returning the text to print, if any.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>, Error> {
        let output = match command {
            Command::Eval(input) => self.eval(&input)?.to_string(),
            Command::Assign { name, body } => {
                let value = self.eval(&body)?;
                self.ctxt.add_var(name, value);
                format!("{} = {}", name, value)
            },
            Command::Define { name, params, body } => {
                let body = body.parse()?;
                info!("defined {}({})", name, params.join(", "));
                self.ctxt.add_func(name, params, body);
                return Ok(None);
            },
            Command::Simplify(input) => simplify(&input.parse()?).to_string(),
            Command::Diff { var, body } => derivative(&body.parse()?, var)?.to_string(),
            Command::Int { var, body } => {
                let result = integrate(&body.parse()?, var);
                if is_unsupported(&result) {
                    info!("no closed form for part of the integral");
                }
                result.to_string()
            },
            Command::Vars(input) => {
                let vars = input.parse()?.variables();
                vars.into_iter().collect::<Vec<_>>().join(", ")
            },
            Command::Steps(input) => {
                let (result, steps) = simplify_with_steps(&input.parse()?);
                steps
                    .iter()
                    .map(|step| format!("{:?}\n", step))
                    .chain(std::iter::once(format!("= {}", result)))
                    .collect()
            },
            Command::Tokens(input) => {
                let tokens = tokenize(input.text).map_err(|err| err.offset_spans(input.offset))?;
                tokens
                    .iter()
                    .map(|token| format!("{:?} {:?} {:?}", token.kind, token.lexeme, token.span))
                    .collect::<Vec<_>>()
                    .join("\n")
            },
        };
        Ok(Some(output))
    }
}
