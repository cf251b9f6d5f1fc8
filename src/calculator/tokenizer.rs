//! Tokenizer for sanitized arithmetic expressions.

use std::fmt;

use super::error::CalcError;

/// A scientific function the calculator can apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    Sqrt,
}

impl Function {
    /// All functions, in the order they appear on the keypad.
    pub const ALL: [Function; 6] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Log,
        Function::Ln,
        Function::Sqrt,
    ];

    /// Look up a function by the name typed into an expression.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }

    /// Apply the function. Trigonometric functions take radians.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    /// A numeric literal such as `12` or `0.5`.
    Number(f64),
    /// '+'
    Plus,
    /// '-'
    Minus,
    /// '*'
    Star,
    /// '/'
    Slash,
    /// '^'
    Caret,
    /// '('
    LParen,
    /// ')'
    RParen,
    /// A function name; the parser expects '(' next.
    Function(Function),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(num) => write!(f, "{}", num),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Function(func) => write!(f, "{}", func.name()),
        }
    }
}

/// Split a sanitized expression into tokens.
///
/// Numbers are runs of digits and dots; a run that is not a valid decimal
/// literal (`1.2.3`, `.`) is an invalid expression, as is any name that is
/// not a known function.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_whitespace() => continue,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start + c.len_utf8();
                while let Some(&(idx, next)) = chars.peek() {
                    if !(next.is_ascii_digit() || next == '.') {
                        break;
                    }
                    end = idx + next.len_utf8();
                    chars.next();
                }
                let literal = &input[start..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalcError::InvalidExpression)?;
                Token::Number(value)
            }
            c if c.is_ascii_alphabetic() => {
                let mut end = start + c.len_utf8();
                while let Some(&(idx, next)) = chars.peek() {
                    if !next.is_ascii_alphabetic() {
                        break;
                    }
                    end = idx + next.len_utf8();
                    chars.next();
                }
                let name = &input[start..end];
                Function::from_name(name)
                    .map(Token::Function)
                    .ok_or(CalcError::InvalidExpression)?
            }
            other => {
                tracing::trace!(character = %other, "unexpected character");
                return Err(CalcError::InvalidExpression);
            }
        };
        tokens.push(token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_arithmetic() {
        let tokens = tokenize("12.5*(3-1)^2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(12.5),
                Token::Star,
                Token::LParen,
                Token::Number(3.0),
                Token::Minus,
                Token::Number(1.0),
                Token::RParen,
                Token::Caret,
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_functions() {
        let tokens = tokenize("sqrt(4)+ln(1)").unwrap();
        assert_eq!(tokens[0], Token::Function(Function::Sqrt));
        assert_eq!(tokens[5], Token::Function(Function::Ln));
    }

    #[test]
    fn test_bare_decimal_points() {
        assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
        assert_eq!(tokenize("5.").unwrap(), vec![Token::Number(5.0)]);
        assert_eq!(tokenize("."), Err(CalcError::InvalidExpression));
        assert_eq!(tokenize("1.2.3"), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert_eq!(tokenize("exp(1)"), Err(CalcError::InvalidExpression));
        assert_eq!(tokenize("2#3"), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_function_lookup() {
        for func in Function::ALL {
            assert_eq!(Function::from_name(func.name()), Some(func));
        }
        assert_eq!(Function::from_name("pow"), None);
    }
}
