use crate::error::{LexError, LexResult};

use super::token::{Token, TokenType};

pub struct Lexer<'src> {
    src: &'src str,
    start: usize,
    current: usize,
    tokens: Vec<Token<'src>>,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            start: 0,
            current: 0,
            tokens: vec![],
        }
    }

    /// Scans the whole input, ending the token stream with a single `Eof`.
    pub fn tokenize(mut self) -> LexResult<Vec<Token<'src>>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        self.tokens.push(Token {
            kind: TokenType::Eof,
            lexeme: "",
        });
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> LexResult<()> {
        match self.advance() {
            '+' => self.push(TokenType::Plus),
            '-' => self.push(TokenType::Minus),
            '*' => self.push(TokenType::Star),
            '/' => self.push(TokenType::Slash),
            ',' => self.push(TokenType::Comma),
            '(' => self.push(TokenType::LParen),
            ')' => self.push(TokenType::RParen),
            ' ' => (),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() => self.identifier(),
            c => {
                return Err(LexError::UnexpectedCharacter {
                    ch: c,
                    position: self.start,
                })
            }
        }
        Ok(())
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }

        // A dot belongs to the number only when another digit follows it.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }

        self.push(TokenType::Number);
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.bump();
        }
        self.push(TokenType::Ident);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.src.len()
    }

    fn advance(&mut self) -> char {
        let c = self.src[self.current..]
            .chars()
            .next()
            .expect("Scanned past end of input. (This should never happen)");
        self.current += c.len_utf8();
        c
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.advance();
    }

    fn peek(&self) -> Option<char> {
        self.src[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.src[self.current..].chars().nth(1)
    }

    fn push(&mut self, kind: TokenType) {
        self.tokens.push(Token {
            kind,
            lexeme: &self.src[self.start..self.current],
        });
    }
}
