//! Recursive-descent evaluation over a token stream.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := ('+' | '-') unary | power
//! power      := primary ('^' unary)?
//! primary    := number | '(' expression ')' | function '(' expression ')'
//! ```
//!
//! Exponentiation is right-associative and binds tighter than unary minus,
//! so `-2^2` is `-4` and `2^3^2` is `512`.
//!
//! Nesting of parentheses, calls, signs and exponents is capped at
//! [`MAX_DEPTH`]; deeper input is an invalid expression.

use super::error::CalcError;
use super::tokenizer::Token;

/// Maximum nesting depth accepted by the parser.
pub const MAX_DEPTH: usize = 256;

/// Evaluate a complete token stream to a number.
///
/// Trailing tokens after a full expression, a missing operand or an
/// unclosed call are all invalid expressions. Runtime division by zero
/// yields an infinite value; the caller decides how to present it.
pub fn evaluate_tokens(tokens: &[Token]) -> Result<f64, CalcError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expression()?;

    if let Some(token) = parser.peek() {
        tracing::trace!(%token, position = parser.pos, "trailing token");
        return Err(CalcError::InvalidExpression);
    }

    Ok(value)
}

/// Whether any division has a literal zero as its divisor.
pub fn divides_by_literal_zero(tokens: &[Token]) -> bool {
    tokens
        .windows(2)
        .any(|pair| matches!(pair, [Token::Slash, Token::Number(n)] if *n == 0.0))
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), CalcError> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            _ => Err(CalcError::InvalidExpression),
        }
    }

    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    value /= self.unary()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // Every nested construct recurses through here.
    fn unary(&mut self) -> Result<f64, CalcError> {
        if self.depth >= MAX_DEPTH {
            tracing::trace!(position = self.pos, "expression nested too deeply");
            return Err(CalcError::InvalidExpression);
        }

        self.depth += 1;
        let value = self.signed();
        self.depth -= 1;
        value
    }

    fn signed(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, CalcError> {
        let base = self.primary()?;
        if self.peek() == Some(Token::Caret) {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, CalcError> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(value)
            }
            Some(Token::Function(func)) => {
                self.expect(Token::LParen)?;
                let argument = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(func.apply(argument))
            }
            _ => Err(CalcError::InvalidExpression),
        }
    }
}
