//! Lexer, parser and expression tree of the symbolic math engine.
//!
//! Text is turned into [`tokenizer::Token`]s by [`tokenizer::tokenize`], then into an
//! [`ast::Expr`] by the recursive-descent [`parser::Parser`]. The tree is an immutable value:
//! every transformation in `sym-compute` builds a new tree, and [`ast::Expr`]'s
//! [`Display`](std::fmt::Display) output parses back to an equivalent tree.

pub mod ast;
pub mod keyword;
pub mod parser;
pub mod tokenizer;

pub use ast::Expr;
pub use parser::{parse, Parser};
pub use sym_error::Error;

/// Returns true if the error was raised while tokenizing, rather than while parsing.
pub fn is_lex_error(err: &Error) -> bool {
    err.is::<tokenizer::error::InvalidCharacter>() || err.is::<tokenizer::error::InvalidNumber>()
}
