pub mod error;
pub mod token;

use crate::keyword;
use error::{InvalidCharacter, InvalidNumber};
use logos::Logos;
use sym_error::Error;
pub use token::{Token, TokenKind};

/// Returns the tokens of the input, ending with a [`TokenKind::End`] token whose span is empty
/// and sits at the end of the input.
///
/// Identifiers that match a reserved function name become [`TokenKind::Function`], and those
/// that match a named constant become [`TokenKind::Constant`]; matching is case-insensitive, and
/// the lexeme keeps its original case.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();
        let kind = match result {
            Ok(TokenKind::Number) => {
                if !matches!(lexeme.parse::<f64>(), Ok(value) if value.is_finite()) {
                    return Err(Error::new(vec![span.clone()], InvalidNumber {
                        lexeme: lexeme.to_string(),
                        offset: span.start,
                    }));
                }
                TokenKind::Number
            },
            Ok(TokenKind::Identifier) => classify(lexeme),
            Ok(kind) => kind,
            Err(()) => {
                let character = input[span.start..].chars().next().unwrap_or('\u{fffd}');
                let end = span.start + character.len_utf8();
                return Err(Error::new(vec![span.start..end], InvalidCharacter {
                    character,
                    offset: span.start,
                }));
            },
        };

        tokens.push(Token { span, kind, lexeme });
    }

    tokens.push(Token {
        span: input.len()..input.len(),
        kind: TokenKind::End,
        lexeme: "",
    });

    Ok(tokens)
}

/// Reclassifies an identifier against the keyword tables.
fn classify(lexeme: &str) -> TokenKind {
    if keyword::function(lexeme).is_some() {
        TokenKind::Function
    } else if keyword::constant(lexeme).is_some() {
        TokenKind::Constant
    } else {
        TokenKind::Identifier
    }
}
