//! Splitting a line of input into a command and its arguments.

use crate::error::{ExpectedVariable, InvalidAssignment, MissingArgument, UnknownCommand};
use std::ops::Range;
use sym_error::Error;
use sym_parser::{
    parse,
    tokenizer::{tokenize, TokenKind},
    Expr,
};

/// A slice of the line, remembering where it starts so errors point into the whole line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input<'a> {
    /// The text of the slice.
    pub text: &'a str,

    /// The byte offset of the slice in the line.
    pub offset: usize,
}

impl<'a> Input<'a> {
    /// Returns the trimmed slice of `line` that starts at `start`.
    fn rest(line: &'a str, start: usize) -> Self {
        let rest = &line[start..];
        let trimmed = rest.trim_start();
        Self {
            text: trimmed.trim_end(),
            offset: start + rest.len() - trimmed.len(),
        }
    }

    /// Parses the slice as an expression.
    pub fn parse(&self) -> Result<Expr, Error> {
        parse(self.text).map_err(|err| err.offset_spans(self.offset))
    }

    /// The span of the slice in the line.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.text.len()
    }
}

/// A line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    /// `<expr>`
    Eval(Input<'a>),

    /// `<name> = <expr>`
    Assign { name: &'a str, body: Input<'a> },

    /// `<name>(<params>) = <expr>`
    Define { name: &'a str, params: Vec<String>, body: Input<'a> },

    /// `:simplify <expr>`
    Simplify(Input<'a>),

    /// `:diff <var> <expr>`
    Diff { var: &'a str, body: Input<'a> },

    /// `:int <var> <expr>`
    Int { var: &'a str, body: Input<'a> },

    /// `:vars <expr>`
    Vars(Input<'a>),

    /// `:steps <expr>`
    Steps(Input<'a>),

    /// `:tokens <expr>`
    Tokens(Input<'a>),
}

/// Returns the next whitespace-separated word at or after `start`, and the index after it.
fn next_word(line: &str, start: usize) -> Option<(Input<'_>, usize)> {
    let word = Input::rest(line, start);
    if word.text.is_empty() {
        return None;
    }
    let len = word.text.find(char::is_whitespace).unwrap_or(word.text.len());
    let end = word.offset + len;
    Some((Input { text: &line[word.offset..end], offset: word.offset }, end))
}

/// Returns true if the text is a single identifier that is not a keyword or constant.
fn is_identifier(text: &str) -> bool {
    matches!(
        tokenize(text).as_deref(),
        Ok([ident, end]) if ident.kind == TokenKind::Identifier && end.kind == TokenKind::End
    )
}

fn missing(line: &str, command: &'static str, usage: &'static str) -> Error {
    Error::new(vec![line.len()..line.len()], MissingArgument { command, usage })
}

/// Parses a `:` command. `start` is the index just after the colon.
fn parse_colon_command(line: &str, start: usize) -> Result<Command<'_>, Error> {
    let Some((word, after)) = next_word(line, start) else {
        return Err(Error::new(vec![start..start], UnknownCommand { name: String::new() }));
    };

    // the expression argument, or an error if it is missing
    let expr_after = |index: usize, command: &'static str, usage: &'static str| {
        let body = Input::rest(line, index);
        if body.text.is_empty() {
            Err(missing(line, command, usage))
        } else {
            Ok(body)
        }
    };
    // the variable name and expression arguments
    let var_and_expr = |command: &'static str, usage: &'static str| {
        let (var, after_var) = next_word(line, after).ok_or_else(|| missing(line, command, usage))?;
        if !is_identifier(var.text) {
            return Err(Error::new(vec![var.span()], ExpectedVariable { name: var.text.to_owned() }));
        }
        Ok((var.text, expr_after(after_var, command, usage)?))
    };

    match word.text {
        "simplify" => Ok(Command::Simplify(expr_after(after, "simplify", ":simplify <expr>")?)),
        "diff" => {
            let (var, body) = var_and_expr("diff", ":diff <var> <expr>")?;
            Ok(Command::Diff { var, body })
        },
        "int" => {
            let (var, body) = var_and_expr("int", ":int <var> <expr>")?;
            Ok(Command::Int { var, body })
        },
        "vars" => Ok(Command::Vars(expr_after(after, "vars", ":vars <expr>")?)),
        "steps" => Ok(Command::Steps(expr_after(after, "steps", ":steps <expr>")?)),
        "tokens" => Ok(Command::Tokens(expr_after(after, "tokens", ":tokens <expr>")?)),
        name => Err(Error::new(vec![word.span()], UnknownCommand { name: name.to_owned() })),
    }
}

/// Parses the left-hand side of `lhs = body`.
fn parse_assignment<'a>(line: &'a str, eq: usize, body: Input<'a>) -> Result<Command<'a>, Error> {
    let lhs = Input::rest(&line[..eq], 0);
    let invalid = || Error::new(vec![lhs.span()], InvalidAssignment);
    let tokens = tokenize(lhs.text).map_err(|err| err.offset_spans(lhs.offset))?;

    match tokens.as_slice() {
        [name, end] if name.kind == TokenKind::Identifier && end.kind == TokenKind::End => {
            Ok(Command::Assign { name: name.lexeme, body })
        },
        [name, open, params @ .., close, end]
            if name.kind == TokenKind::Identifier
                && open.kind == TokenKind::OpenParen
                && close.kind == TokenKind::CloseParen
                && end.kind == TokenKind::End =>
        {
            // identifiers separated by commas
            let mut names = Vec::new();
            for (i, token) in params.iter().enumerate() {
                let expected = if i % 2 == 0 { TokenKind::Identifier } else { TokenKind::Comma };
                if token.kind != expected {
                    return Err(invalid());
                }
                if expected == TokenKind::Identifier {
                    names.push(token.lexeme.to_owned());
                }
            }
            if params.len() % 2 == 0 && !params.is_empty() {
                return Err(invalid());
            }
            Ok(Command::Define { name: name.lexeme, params: names, body })
        },
        _ => Err(invalid()),
    }
}

/// Parses a line of input.
pub fn parse_command(line: &str) -> Result<Command<'_>, Error> {
    let input = Input::rest(line, 0);
    if input.text.starts_with(':') {
        return parse_colon_command(line, input.offset + 1);
    }

    match line.find('=') {
        Some(eq) => parse_assignment(line, eq, Input::rest(line, eq + 1)),
        None => Ok(Command::Eval(input)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn expressions() {
        assert_eq!(
            parse_command("  1 + x ").unwrap(),
            Command::Eval(Input { text: "1 + x", offset: 2 }),
        );
    }

    #[test]
    fn assignments() {
        assert_eq!(
            parse_command("x = 2").unwrap(),
            Command::Assign { name: "x", body: Input { text: "2", offset: 4 } },
        );
        assert_eq!(
            parse_command("f(a, b) = a * b").unwrap(),
            Command::Define {
                name: "f",
                params: vec!["a".to_owned(), "b".to_owned()],
                body: Input { text: "a * b", offset: 10 },
            },
        );
        assert_eq!(
            parse_command("g() = 3").unwrap(),
            Command::Define { name: "g", params: vec![], body: Input { text: "3", offset: 6 } },
        );
    }

    #[test]
    fn invalid_assignments() {
        for line in ["sin = 2", "2 = x", "f(a,) = a", "f(a b) = a", "pi = 3"] {
            assert!(parse_command(line).unwrap_err().is::<InvalidAssignment>(), "{}", line);
        }
    }

    #[test]
    fn commands() {
        assert_eq!(
            parse_command(":diff x x^2").unwrap(),
            Command::Diff { var: "x", body: Input { text: "x^2", offset: 8 } },
        );
        assert_eq!(
            parse_command(":int  t  sin(t)").unwrap(),
            Command::Int { var: "t", body: Input { text: "sin(t)", offset: 9 } },
        );
        assert_eq!(
            parse_command(":tokens 2 + 3").unwrap(),
            Command::Tokens(Input { text: "2 + 3", offset: 8 }),
        );
    }

    #[test]
    fn command_errors() {
        let err = parse_command(":derive x x").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&UnknownCommand { name: "derive".to_owned() }));
        assert_eq!(err.spans, vec![1..7]);

        assert!(parse_command(":diff x").unwrap_err().is::<MissingArgument>());
        assert!(parse_command(":simplify").unwrap_err().is::<MissingArgument>());
        assert!(parse_command(":diff 2 x").unwrap_err().is::<ExpectedVariable>());
    }

    #[test]
    fn spans_point_into_line() {
        let Command::Simplify(body) = parse_command(":simplify 1 + $").unwrap() else {
            panic!("expected :simplify");
        };
        let err = body.parse().unwrap_err();
        assert_eq!(err.spans, vec![14..15]);
    }
}
