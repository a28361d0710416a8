//! A small arithmetic-expression front end: a lexer and a table-driven Pratt
//! parser producing an owned syntax tree, plus a prefix-form pretty-printer.
//! Evaluation is left to consumers of [`Expr`].

pub mod error;
pub mod syntax;

pub use error::{LexError, ParseError, SyntaxError};
pub use syntax::{print, Expr, Lexer, Parser, Token, TokenType};

/// Runs the whole front end over `source`: tokenize, then parse.
pub fn parse_str(source: &str) -> Result<Expr<'_>, SyntaxError<'_>> {
    let tokens = Lexer::new(source).tokenize()?;
    Ok(Parser::new(tokens).parse()?)
}
