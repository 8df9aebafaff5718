use super::Var;
use crate::error;
use crate::lang::{token::*, Error, Lexer};

type Result<T> = std::result::Result<T, Error>;

/// Evaluates one expression starting at the current program counter.
///
/// On return the lexer sits one token past the end of the expression;
/// callers push that token back before reading on.
pub fn evaluate(lex: &mut Lexer, var: &Var) -> Result<f64> {
    let token = lex.next_token()?;
    if token.is_end() {
        return Err(error!(NoExpressionPresent));
    }
    Expression { lex, var, token }.relational()
}

/// Repeated multiplication, with the exponent truncated toward zero.
/// A zero exponent gives one; any other exponent below two leaves the
/// base unchanged, so negative and fractional powers are not supported.
pub fn raise(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        return 1.0;
    }
    let mut result = base;
    let mut remaining = exponent as i32 as i64 - 1;
    while remaining > 0 {
        let next = result * base;
        remaining -= 1;
        if next.is_nan() || next.to_bits() == result.to_bits() {
            return next;
        }
        if next == -result {
            return if remaining % 2 == 0 { next } else { result };
        }
        result = next;
    }
    result
}

struct Expression<'a> {
    lex: &'a mut Lexer,
    var: &'a Var,
    token: Token,
}

impl<'a> Expression<'a> {
    fn advance(&mut self) -> Result<()> {
        self.token = self.lex.next_token()?;
        Ok(())
    }

    fn delimiter(&self) -> Option<Delimiter> {
        match self.token {
            Token::Delimiter(d) => Some(d),
            _ => None,
        }
    }

    fn relational(&mut self) -> Result<f64> {
        let left = self.sum()?;
        let op = match self.delimiter() {
            Some(op) if op.is_relational() => op,
            _ => return Ok(left),
        };
        self.advance()?;
        let right = self.relational()?;
        let truth = match op {
            Delimiter::Less => left < right,
            Delimiter::LessEqual => left <= right,
            Delimiter::Greater => left > right,
            Delimiter::GreaterEqual => left >= right,
            Delimiter::Equal => left == right,
            _ => left != right,
        };
        Ok(if truth { 1.0 } else { 0.0 })
    }

    fn sum(&mut self) -> Result<f64> {
        let mut result = self.term()?;
        loop {
            match self.delimiter() {
                Some(Delimiter::Plus) => {
                    self.advance()?;
                    result += self.term()?;
                }
                Some(Delimiter::Minus) => {
                    self.advance()?;
                    result -= self.term()?;
                }
                _ => return Ok(result),
            }
        }
    }

    fn term(&mut self) -> Result<f64> {
        let mut result = self.power()?;
        loop {
            let op = match self.delimiter() {
                Some(op @ Delimiter::Multiply)
                | Some(op @ Delimiter::Divide)
                | Some(op @ Delimiter::Modulus) => op,
                _ => return Ok(result),
            };
            self.advance()?;
            let rhs = self.power()?;
            result = match op {
                Delimiter::Multiply => result * rhs,
                _ if rhs == 0.0 => return Err(error!(DivisionByZero)),
                Delimiter::Divide => result / rhs,
                _ => result % rhs,
            };
        }
    }

    fn power(&mut self) -> Result<f64> {
        let base = self.unary()?;
        if self.delimiter() != Some(Delimiter::Caret) {
            return Ok(base);
        }
        self.advance()?;
        let exponent = self.power()?;
        Ok(raise(base, exponent))
    }

    fn unary(&mut self) -> Result<f64> {
        let negate = match self.delimiter() {
            Some(Delimiter::Minus) => true,
            Some(Delimiter::Plus) => false,
            _ => return self.parenthesized(),
        };
        self.advance()?;
        let result = self.parenthesized()?;
        Ok(if negate { -result } else { result })
    }

    fn parenthesized(&mut self) -> Result<f64> {
        if self.delimiter() != Some(Delimiter::LParen) {
            return self.atom();
        }
        self.advance()?;
        let result = self.relational()?;
        if self.delimiter() != Some(Delimiter::RParen) {
            return Err(error!(UnbalancedParentheses));
        }
        self.advance()?;
        Ok(result)
    }

    fn atom(&mut self) -> Result<f64> {
        let result = match &self.token {
            Token::Number(s) => match s.parse::<f64>() {
                Ok(n) => n,
                Err(_) => return Err(error!(Syntax; s)),
            },
            Token::Variable(name) => self.var.fetch(Var::index(name)?),
            _ => return Err(error!(Syntax)),
        };
        self.advance()?;
        Ok(result)
    }
}
