//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch routine.

use std::iter::FusedIterator;

use tracing::trace;

use crate::chars::{is_digit, is_letter, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the mke scripting language.
///
/// The lexer owns a cursor over a complete source text and hands out one
/// token per call to [`Lexer::next_token`]. It never fails: characters that
/// start no token come back as `ILLEGAL` tokens and scanning resumes right
/// after them. Once the input is exhausted every further call returns `EOF`.
///
/// # Example
///
/// ```
/// use mke_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
/// let token = lexer.next_token();
/// assert_eq!(token.kind, TokenKind::Let);
/// assert_eq!(token.literal, "let");
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset at which the current token starts.
    pub(crate) token_start: usize,

    /// Whether end of input has already been reported once.
    reached_eof: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            reached_eof: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then dispatches on the current character:
    /// identifiers and keywords, integers, operators and delimiters, and
    /// finally `ILLEGAL` for anything else.
    ///
    /// # Returns
    /// The next token in the source stream, or an `EOF` token with an empty
    /// literal at end of input.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.token_start = self.cursor.position();

        if self.cursor.is_at_end() {
            if !self.reached_eof {
                self.reached_eof = true;
                trace!(offset = self.token_start, "reached end of input");
            }
            return Token::eof();
        }

        let kind = match self.cursor.current_char() {
            c if is_letter(c) => return self.lex_identifier(),
            c if is_digit(c) => return self.lex_number(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '+' => self.lex_single(TokenKind::Plus),
            '-' => self.lex_single(TokenKind::Minus),
            '*' => self.lex_single(TokenKind::Asterisk),
            '/' => self.lex_single(TokenKind::Slash),
            '<' => self.lex_single(TokenKind::Lt),
            '>' => self.lex_single(TokenKind::Gt),
            ',' => self.lex_single(TokenKind::Comma),
            ';' => self.lex_single(TokenKind::Semicolon),
            '(' => self.lex_single(TokenKind::LParen),
            ')' => self.lex_single(TokenKind::RParen),
            '{' => self.lex_single(TokenKind::LBrace),
            '}' => self.lex_single(TokenKind::RBrace),
            c => {
                trace!(offset = self.token_start, ch = ?c, "illegal character");
                self.cursor.bump();
                TokenKind::Illegal
            },
        };

        self.make_token(kind)
    }

    /// Builds a token of `kind` from the text consumed since `token_start`.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.cursor.slice_from(self.token_start))
    }

    /// Skips spaces, tabs, newlines and carriage returns.
    fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && is_whitespace(self.cursor.current_char()) {
            self.cursor.bump();
        }
    }

    /// Returns the byte offset of the character under examination.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the byte offset of the next character to read.
    pub fn read_position(&self) -> usize {
        self.cursor.read_position()
    }

    /// Returns the byte offset where the most recently returned token began.
    ///
    /// For `EOF` this is the length of the source.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the source text this lexer was created with.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_skips_all_whitespace_kinds() {
        assert_eq!(kinds(" \t\r\n x \n"), vec![TokenKind::Ident]);
    }

    #[test]
    fn test_form_feed_is_illegal() {
        let tokens: Vec<_> = Lexer::new("a\u{0C}b").collect();
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "\u{0C}"));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Token::eof());
            assert_eq!(lexer.position(), 1);
            assert_eq!(lexer.read_position(), 2);
        }
    }

    #[test]
    fn test_token_start_tracks_offsets() {
        let mut lexer = Lexer::new("let  x");
        lexer.next_token();
        assert_eq!(lexer.token_start(), 0);
        lexer.next_token();
        assert_eq!(lexer.token_start(), 5);
        lexer.next_token();
        assert_eq!(lexer.token_start(), 6);
    }

    #[test]
    fn test_illegal_then_continue() {
        let mut lexer = Lexer::new("@@;");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Illegal, "@"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Illegal, "@"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Semicolon, ";"));
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_illegal_multibyte_keeps_whole_char() {
        let mut lexer = Lexer::new("λx");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Illegal, "λ"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
    }

    #[test]
    fn test_embedded_nul_is_illegal() {
        let mut lexer = Lexer::new("1\02");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Int, "1"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Illegal, "\0"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Int, "2"));
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut lexer = Lexer::new(";");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }
}
