use std::fmt;

use crate::syntax::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    UnexpectedCharacter { ch: char, position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError<'src> {
    ExpectedExpression { found: Token<'src> },
    UnclosedGroup { found: Token<'src> },
    InvalidCallTarget { paren: Token<'src> },
    TrailingInput { found: Token<'src> },
}

/// Either half of the front end, for callers that run both in one go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError<'src> {
    Lex(LexError),
    Parse(ParseError<'src>),
}

pub type LexResult<T> = Result<T, LexError>;
pub type PResult<'src, T> = Result<T, ParseError<'src>>;

impl<'src> From<LexError> for SyntaxError<'src> {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl<'src> From<ParseError<'src>> for SyntaxError<'src> {
    fn from(err: ParseError<'src>) -> Self {
        Self::Parse(err)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter { ch, position } => {
                write!(f, "unexpected character `{ch}` at offset {position}")
            }
        }
    }
}

impl fmt::Display for ParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedExpression { found } => {
                write!(f, "expected expression, found {found}")
            }
            Self::UnclosedGroup { found } => write!(f, "expected `)`, found {found}"),
            Self::InvalidCallTarget { .. } => {
                write!(f, "only a plain identifier can be called")
            }
            Self::TrailingInput { found } => {
                write!(f, "expected end of input, found {found}")
            }
        }
    }
}

impl fmt::Display for SyntaxError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(err) => err.fmt(f),
            Self::Parse(err) => err.fmt(f),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{LexError, ParseError};
    use crate::syntax::{Token, TokenType};

    #[test]
    fn display_names_the_offender() {
        let err = LexError::UnexpectedCharacter { ch: '.', position: 2 };
        assert_eq!(err.to_string(), "unexpected character `.` at offset 2");

        let err = ParseError::ExpectedExpression {
            found: Token {
                kind: TokenType::Eof,
                lexeme: "",
            },
        };
        assert_eq!(err.to_string(), "expected expression, found end of input");
    }
}
