pub mod error;
mod expr;

use crate::{ast::Expr, tokenizer::{tokenize, Token, TokenKind}};
use error::{ExpectedEof, UnexpectedEof};
use log::debug;
use std::ops::Range;
use sym_error::{Error, ErrorKind};

/// Parses the source into an expression. All of the source must be consumed.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source)?.try_parse_full()
}

/// A recursive-descent parser over a buffer of tokens. The buffer is never modified; the parser
/// only moves a cursor over it.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing. The last token is always
    /// [`TokenKind::End`].
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Tokenizes the source and creates a parser over the tokens.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self::from_tokens(tokenize(source)?))
    }

    /// Creates a parser over already produced tokens. An end token is appended if the tokens do
    /// not already end with one.
    pub fn from_tokens(mut tokens: Vec<Token<'source>>) -> Self {
        if tokens.last().map_or(true, |token| token.kind != TokenKind::End) {
            let end = tokens.last().map_or(0, |token| token.span.end);
            tokens.push(Token { span: end..end, kind: TokenKind::End, lexeme: "" });
        }
        debug!("parsing {} tokens", tokens.len());

        Self {
            tokens: tokens.into_boxed_slice(),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the span of the previously consumed token.
    pub fn prev_span(&self) -> Range<usize> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(0..0, |token| token.span.clone())
    }

    /// Returns the current token without moving the cursor.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the current token, treating a cursor past the buffer as the end.
    pub fn peek_kind(&self) -> TokenKind {
        self.current_token().map_or(TokenKind::End, |token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if the current token is the end token.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) if token.kind != TokenKind::End => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            _ => Err(self.error(UnexpectedEof)),
        }
    }

    /// Consumes the current token if it is of the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == kind && kind != TokenKind::End {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Parses an expression. All the tokens must be consumed; if not, an error is returned.
    pub fn try_parse_full(&mut self) -> Result<Expr, Error> {
        let expr = self.parse_expr()?;
        if self.peek_kind() == TokenKind::End {
            Ok(expr)
        } else {
            let end = self.eof_span().start;
            Err(Error::new(vec![self.span().start..end], ExpectedEof))
        }
    }
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`), division (`/`), and modulo (`%`), which separate
    /// factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of factorial (`!`).
    Factorial,

    /// Numbers, names, parenthesized expressions and calls.
    Atom,
}

impl Precedence {
    /// Returns the next higher precedence.
    pub fn next(self) -> Self {
        match self {
            Self::Any => Self::Term,
            Self::Term => Self::Factor,
            Self::Factor => Self::Neg,
            Self::Neg => Self::Exp,
            Self::Exp => Self::Factorial,
            Self::Factorial | Self::Atom => Self::Atom,
        }
    }
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}
