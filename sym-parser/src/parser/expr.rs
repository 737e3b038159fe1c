//! The grammar, from lowest to highest precedence:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('-' | '+')? power
//! power   := postfix ('^' unary)?
//! postfix := primary '!'*
//! primary := number | name | constant | call | '(' expr ')'
//! ```
//!
//! A `+` sign is only accepted where no binary operator directly precedes it, so `x + + 2` is
//! rejected while `x + -2` is not. Unary minus binds looser than `^`, so `-2^2` is `-(2^2)`.

use crate::{
    ast::{BinaryOp, Expr},
    keyword::{self, Keyword},
    tokenizer::{error::InvalidNumber, Token, TokenKind},
};
use std::ops::Range;
use sym_error::Error;
use super::{
    error::{
        ArgumentCount,
        EmptyCall,
        ExpectedVariable,
        MissingCallParenthesis,
        UnclosedParenthesis,
        UnexpectedEof,
        UnexpectedToken,
    },
    Associativity,
    Parser,
    Precedence,
};

/// The tokens that can start an operand.
const OPERAND_START: &[TokenKind] = &[
    TokenKind::Number,
    TokenKind::Identifier,
    TokenKind::Constant,
    TokenKind::Function,
    TokenKind::OpenParen,
    TokenKind::Sub,
];

/// Returns the binary operator handled by precedence climbing for the given token, if any.
/// Exponentiation is parsed separately in [`Parser::parse_power`].
fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Add => Some(BinaryOp::Add),
        TokenKind::Sub => Some(BinaryOp::Subtract),
        TokenKind::Mul => Some(BinaryOp::Multiply),
        TokenKind::Div => Some(BinaryOp::Divide),
        TokenKind::Mod => Some(BinaryOp::Modulo),
        _ => None,
    }
}

/// Moves the arguments of a call into a fixed-size array, failing if the count is wrong.
fn take_args<const N: usize>(args: Vec<Expr>, name: &str, span: Range<usize>) -> Result<[Expr; N], Error> {
    let given = args.len();
    args.try_into().map_err(|_| Error::new(vec![span], ArgumentCount {
        name: name.to_string(),
        expected: N,
        given,
    }))
}

impl<'source> Parser<'source> {
    /// Parses a full expression, stopping at the first token that cannot continue it.
    pub fn parse_expr(&mut self) -> Result<Expr, Error> {
        self.parse_binary(Precedence::Term, false)
    }

    /// Parses operands joined by binary operators of at least the given precedence.
    ///
    /// `after_operator` is true when the first operand directly follows a binary operator.
    fn parse_binary(&mut self, min: Precedence, after_operator: bool) -> Result<Expr, Error> {
        let mut lhs = self.parse_unary(after_operator)?;

        while let Some(op) = binary_op(self.peek_kind()) {
            let precedence = op.precedence();
            if precedence < min {
                break;
            }
            self.cursor += 1;

            // for left-associative operators, an operator of the same precedence ends the
            // right-hand side so that it is picked up by this loop instead
            let rhs_min = match op.associativity() {
                Associativity::Left => precedence.next(),
                Associativity::Right => precedence,
            };
            let rhs = self.parse_binary(rhs_min, true)?;
            lhs = Expr::binary(op, lhs, rhs);
        }

        Ok(lhs)
    }

    /// Parses an optional sign followed by a power.
    fn parse_unary(&mut self, after_operator: bool) -> Result<Expr, Error> {
        match self.peek_kind() {
            TokenKind::Sub => {
                self.cursor += 1;
                Ok(-self.parse_power()?)
            },
            TokenKind::Add if !after_operator => {
                self.cursor += 1;
                self.parse_power()
            },
            TokenKind::Add => Err(self.error(UnexpectedToken {
                expected: OPERAND_START,
                found: TokenKind::Add,
            })),
            _ => self.parse_power(),
        }
    }

    /// Parses a right-associative exponentiation. The exponent may carry its own sign.
    fn parse_power(&mut self) -> Result<Expr, Error> {
        let base = self.parse_postfix()?;
        if self.eat(TokenKind::Exp) {
            let exponent = self.parse_unary(true)?;
            Ok(base.pow(exponent))
        } else {
            Ok(base)
        }
    }

    /// Parses a primary expression followed by any number of factorial operators.
    fn parse_postfix(&mut self) -> Result<Expr, Error> {
        let mut expr = self.parse_primary()?;
        while self.eat(TokenKind::Factorial) {
            expr = Expr::unary(crate::ast::UnaryOp::Factorial, expr);
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, Error> {
        let token = match self.current_token() {
            Some(token) => token.clone(),
            None => return Err(self.error(UnexpectedEof)),
        };

        match token.kind {
            TokenKind::Number => {
                self.cursor += 1;
                token.lexeme
                    .parse::<f64>()
                    .map(Expr::num)
                    .map_err(|_| Error::new(vec![token.span.clone()], InvalidNumber {
                        lexeme: token.lexeme.to_string(),
                        offset: token.offset(),
                    }))
            },
            TokenKind::Constant => {
                self.cursor += 1;
                Ok(keyword::constant(token.lexeme).map_or_else(|| Expr::var(token.lexeme), Expr::num))
            },
            TokenKind::Identifier => {
                self.cursor += 1;
                // one token of lookahead decides between a variable and a call
                if self.peek_kind() == TokenKind::OpenParen {
                    let (args, _) = self.parse_args(&token)?;
                    Ok(Expr::call(token.lexeme, args))
                } else {
                    Ok(Expr::var(token.lexeme))
                }
            },
            TokenKind::Function => {
                self.cursor += 1;
                self.parse_keyword_call(&token)
            },
            TokenKind::OpenParen => self.parse_paren(),
            TokenKind::End => Err(self.error(UnexpectedEof)),
            found => Err(self.error(UnexpectedToken {
                expected: OPERAND_START,
                found,
            })),
        }
    }

    /// Parses a parenthesized expression. The cursor must be on the opening parenthesis.
    fn parse_paren(&mut self) -> Result<Expr, Error> {
        let open = self.span();
        self.cursor += 1;

        let expr = self.parse_expr()?;
        self.close_paren(open)?;
        Ok(expr)
    }

    /// Consumes the closing parenthesis matching the one at `open`.
    fn close_paren(&mut self, open: Range<usize>) -> Result<(), Error> {
        match self.peek_kind() {
            TokenKind::CloseParen => {
                self.cursor += 1;
                Ok(())
            },
            TokenKind::End => Err(Error::new(vec![open, self.eof_span()], UnclosedParenthesis)),
            found => Err(self.error(UnexpectedToken {
                expected: &[TokenKind::CloseParen],
                found,
            })),
        }
    }

    /// Parses the parenthesized, comma-separated arguments of a call to `name`. The cursor must
    /// be on the opening parenthesis. Returns the arguments and the span of the whole call.
    fn parse_args(&mut self, name: &Token) -> Result<(Vec<Expr>, Range<usize>), Error> {
        let open = self.span();
        self.cursor += 1;

        if self.peek_kind() == TokenKind::CloseParen {
            self.cursor += 1;
            return Err(Error::new(vec![name.span.start..self.prev_span().end], EmptyCall {
                name: name.lexeme.to_string(),
            }));
        }

        let mut args = Vec::new();
        loop {
            args.push(self.parse_expr()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.close_paren(open).map_err(|mut err| {
            if err.is::<UnexpectedToken>() {
                err = self.error(UnexpectedToken {
                    expected: &[TokenKind::Comma, TokenKind::CloseParen],
                    found: self.peek_kind(),
                });
            }
            err
        })?;

        Ok((args, name.span.start..self.prev_span().end))
    }

    /// Parses a call to a reserved function. The cursor must be right after the name.
    fn parse_keyword_call(&mut self, name: &Token) -> Result<Expr, Error> {
        let Some(keyword) = keyword::function(name.lexeme) else {
            let (args, _) = self.parse_args(name)?;
            return Ok(Expr::call(name.lexeme, args));
        };

        if self.peek_kind() != TokenKind::OpenParen {
            return Err(Error::new(vec![name.span.clone()], MissingCallParenthesis {
                name: name.lexeme.to_string(),
            }));
        }

        let (args, span) = self.parse_args(name)?;
        let lower = name.lexeme.to_lowercase();
        match keyword {
            Keyword::Unary(op) => {
                let [arg] = take_args(args, &lower, span)?;
                Ok(Expr::unary(op, arg))
            },
            Keyword::Binary(op) => {
                let [lhs, rhs] = take_args(args, &lower, span)?;
                Ok(Expr::binary(op, lhs, rhs))
            },
            Keyword::Named { name, arity } => {
                if args.len() != arity {
                    return Err(Error::new(vec![span], ArgumentCount {
                        name: lower,
                        expected: arity,
                        given: args.len(),
                    }));
                }
                Ok(Expr::call(name, args))
            },
            Keyword::Integral => match take_args(args, &lower, span.clone())? {
                [integrand, Expr::Variable(var)] => Ok(Expr::integral(integrand, var)),
                _ => Err(Error::new(vec![span], ExpectedVariable)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{
        ast::{BinaryOp, Expr, UnaryOp},
        parse,
        parser::error::*,
    };

    fn num(n: f64) -> Expr {
        Expr::num(n)
    }

    fn var(name: &str) -> Expr {
        Expr::var(name)
    }

    #[test]
    fn precedence() {
        assert_eq!(parse("2+3*4").unwrap(), num(2.0) + num(3.0) * num(4.0));
        assert_eq!(parse("2*3+4").unwrap(), num(2.0) * num(3.0) + num(4.0));
        assert_eq!(parse("8 % 3 / 2").unwrap(), Expr::binary(BinaryOp::Modulo, num(8.0), num(3.0)) / num(2.0));
    }

    #[test]
    fn left_associative() {
        assert_eq!(parse("1 - 2 - 3").unwrap(), (num(1.0) - num(2.0)) - num(3.0));
        assert_eq!(parse("1 / 2 / 3").unwrap(), (num(1.0) / num(2.0)) / num(3.0));
    }

    #[test]
    fn power_right_associative() {
        assert_eq!(parse("2^3^2").unwrap(), num(2.0).pow(num(3.0).pow(num(2.0))));
    }

    #[test]
    fn negation_binds_looser_than_power() {
        assert_eq!(parse("-2^2").unwrap(), -num(2.0).pow(num(2.0)));
        assert_eq!(parse("2^-x").unwrap(), num(2.0).pow(-var("x")));
        assert_eq!(parse("-x * y").unwrap(), -var("x") * var("y"));
        assert_eq!(parse("+x").unwrap(), var("x"));
        assert_eq!(parse("x * -y").unwrap(), var("x") * -var("y"));
    }

    #[test]
    fn factorial() {
        assert_eq!(parse("3!").unwrap(), Expr::unary(UnaryOp::Factorial, num(3.0)));
        assert_eq!(
            parse("x!!").unwrap(),
            Expr::unary(UnaryOp::Factorial, Expr::unary(UnaryOp::Factorial, var("x"))),
        );
        assert_eq!(parse("2^3!").unwrap(), num(2.0).pow(Expr::unary(UnaryOp::Factorial, num(3.0))));
    }

    #[test]
    fn constants_fold_at_parse_time() {
        assert_eq!(parse("pi").unwrap(), num(std::f64::consts::PI));
        assert_eq!(parse("τ").unwrap(), num(std::f64::consts::TAU));
        assert_eq!(parse("E").unwrap(), num(std::f64::consts::E));
    }

    #[test]
    fn calls() {
        assert_eq!(parse("Sin(x)").unwrap(), Expr::unary(UnaryOp::Sin, var("x")));
        assert_eq!(parse("log(8, 2)").unwrap(), Expr::binary(BinaryOp::LogBase, num(8.0), num(2.0)));
        assert_eq!(parse("pow(x, 2)").unwrap(), var("x").pow(num(2.0)));
        assert_eq!(parse("nCr(5, 2)").unwrap(), Expr::call("binom", vec![num(5.0), num(2.0)]));
        assert_eq!(parse("sec(x)").unwrap(), Expr::call("sec", vec![var("x")]));
        assert_eq!(
            parse("integral(x, x)").unwrap(),
            Expr::integral(var("x"), "x"),
        );
    }

    #[test]
    fn unknown_names_become_generic_calls() {
        assert_eq!(parse("f(x, 2)").unwrap(), Expr::call("f", vec![var("x"), num(2.0)]));
        assert_eq!(parse("Foo").unwrap(), var("Foo"));
    }

    #[test]
    fn repeated_plus_sign() {
        let err = parse("x + + 2").unwrap_err();
        assert!(err.is::<UnexpectedToken>());
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn premature_end() {
        assert!(parse("2 +").unwrap_err().is::<UnexpectedEof>());
        assert!(parse("").unwrap_err().is::<UnexpectedEof>());
    }

    #[test]
    fn unmatched_parens() {
        let err = parse("(1 + 2").unwrap_err();
        assert!(err.is::<UnclosedParenthesis>());
        assert_eq!(err.spans, vec![0..1, 6..6]);

        assert!(parse("1 + 2)").unwrap_err().is::<ExpectedEof>());
        assert!(parse("2 * )").unwrap_err().is::<UnexpectedToken>());
        assert!(parse("()").unwrap_err().is::<UnexpectedToken>());
    }

    #[test]
    fn trailing_tokens() {
        let err = parse("1 2").unwrap_err();
        assert!(err.is::<ExpectedEof>());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn function_without_parens() {
        assert!(parse("sin x").unwrap_err().is::<MissingCallParenthesis>());
        assert!(parse("cos").unwrap_err().is::<MissingCallParenthesis>());
    }

    #[test]
    fn wrong_arity() {
        let err = parse("sin(1, 2)").unwrap_err();
        let kind = err.downcast_ref::<ArgumentCount>().unwrap();
        assert_eq!((kind.expected, kind.given), (1, 2));
        assert!(parse("max(1)").unwrap_err().is::<ArgumentCount>());
        assert!(parse("log(8)").unwrap_err().is::<ArgumentCount>());
        assert!(parse("integral(x, 2)").unwrap_err().is::<ExpectedVariable>());
    }

    #[test]
    fn empty_call() {
        assert!(parse("f()").unwrap_err().is::<EmptyCall>());
        assert!(parse("sqrt()").unwrap_err().is::<EmptyCall>());
    }

    #[test]
    fn lex_errors_surface() {
        let err = parse("2 # 3").unwrap_err();
        assert!(crate::is_lex_error(&err));
        assert!(!crate::is_lex_error(&parse("2 +").unwrap_err()));
    }
}
