//! drift lexer -- tokenizer shared by expression parsing and the
//! type-literal test surface used to write expected inferred types.

mod cursor;
mod token;

use cursor::Cursor;

pub use token::{keyword_from_str, Token, TokenKind};

/// The drift lexer. Converts source text into a stream of tokens.
///
/// Wraps a [`Cursor`] for byte-level iteration and implements
/// `Iterator<Item = Token>` so callers can consume tokens lazily or
/// collect them into a `Vec`.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    emitted_eof: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            emitted_eof: false,
        }
    }

    /// Convenience: tokenize the entire source into a `Vec<Token>`.
    ///
    /// The returned vector includes the final `Eof` token.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.cursor.pos();

        let Some(c) = self.cursor.peek() else {
            return Token::new(TokenKind::Eof, start, start);
        };

        match c {
            '(' => self.single_char_token(TokenKind::LParen, start),
            ')' => self.single_char_token(TokenKind::RParen, start),
            '\\' => self.single_char_token(TokenKind::Backslash, start),
            '=' => self.single_char_token(TokenKind::Eq, start),
            '-' => self.lex_minus(start),
            '"' => self.lex_string(start),
            '0'..='9' => self.lex_number(start),
            c if is_ident_start(c) => self.lex_ident(start),
            _ => {
                self.cursor.advance();
                Token::new(TokenKind::Error, start, self.cursor.pos())
            }
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| c.is_whitespace());
    }

    fn single_char_token(&mut self, kind: TokenKind, start: u32) -> Token {
        self.cursor.advance();
        Token::new(kind, start, self.cursor.pos())
    }

    /// `-` on its own is not a valid token in this grammar; only `->` is.
    fn lex_minus(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '-'
        if self.cursor.peek() == Some('>') {
            self.cursor.advance();
            Token::new(TokenKind::Arrow, start, self.cursor.pos())
        } else {
            Token::new(TokenKind::Error, start, self.cursor.pos())
        }
    }

    /// `"..."`, no escape processing. Unterminated strings lex as `Error`
    /// covering everything up to end of input.
    fn lex_string(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume opening quote
        self.cursor.eat_while(|c| c != '"');
        if self.cursor.peek() == Some('"') {
            self.cursor.advance();
            Token::new(TokenKind::Str, start, self.cursor.pos())
        } else {
            Token::new(TokenKind::Error, start, self.cursor.pos())
        }
    }

    fn lex_number(&mut self, start: u32) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        Token::new(TokenKind::Int, start, self.cursor.pos())
    }

    /// Identifiers and keywords. Keyword lookup happens here, against the
    /// just-consumed source text, so keywords are never mistaken for
    /// ordinary identifiers downstream.
    fn lex_ident(&mut self, start: u32) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let end = self.cursor.pos();
        let text = self.cursor.slice(start, end);
        let kind = keyword_from_str(text).unwrap_or(TokenKind::Ident);
        Token::new(kind, start, end)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.emitted_eof {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.emitted_eof = true;
        }
        Some(token)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
