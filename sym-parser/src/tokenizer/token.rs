use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// [`TokenKind::Function`], [`TokenKind::Constant`] (except for the glyphs) and
/// [`TokenKind::End`] are never produced by the regex lexer itself; identifiers are reclassified
/// against the keyword tables in [`super::tokenize`], and the end marker is appended there.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum TokenKind {
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]*)?")]
    #[regex(r"\.[0-9]*([eE][+-]?[0-9]*)?")]
    Number,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    #[token("π")]
    #[token("τ")]
    #[token("φ")]
    Constant,

    Function,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("%")]
    Mod,

    #[token("^")]
    Exp,

    #[token("!")]
    Factorial,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    End,
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from. `span.start` is the offset
    /// of the token.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns the byte offset of this token in the source.
    pub fn offset(&self) -> usize {
        self.span.start
    }
}
