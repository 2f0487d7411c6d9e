//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{lookup_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the maximal run of identifier characters starting at the
    /// current letter, then classifies the whole run through the keyword
    /// table. A run that is not exactly a keyword is an `IDENT`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.bump();
        }

        let text = self.cursor.slice_from(self.token_start);
        Token::new(lookup_ident(text), text)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};

    fn lex_ident(source: &str) -> Token {
        let mut lexer = crate::Lexer::new(source);
        lexer.lex_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("five"), Token::new(TokenKind::Ident, "five"));
    }

    #[test]
    fn test_identifier_with_underscore() {
        assert_eq!(lex_ident("_foo_bar"), Token::new(TokenKind::Ident, "_foo_bar"));
        assert_eq!(lex_ident("_"), Token::new(TokenKind::Ident, "_"));
    }

    #[test]
    fn test_identifier_stops_at_operator() {
        assert_eq!(lex_ident("add(x"), Token::new(TokenKind::Ident, "add"));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_ident("fn"), Token::new(TokenKind::Function, "fn"));
        assert_eq!(lex_ident("let"), Token::new(TokenKind::Let, "let"));
        assert_eq!(lex_ident("true"), Token::new(TokenKind::True, "true"));
        assert_eq!(lex_ident("false"), Token::new(TokenKind::False, "false"));
        assert_eq!(lex_ident("if"), Token::new(TokenKind::If, "if"));
        assert_eq!(lex_ident("else"), Token::new(TokenKind::Else, "else"));
        assert_eq!(lex_ident("return"), Token::new(TokenKind::Return, "return"));
    }

    #[test]
    fn test_keyword_near_misses() {
        assert_eq!(lex_ident("lets").kind, TokenKind::Ident);
        assert_eq!(lex_ident("Let").kind, TokenKind::Ident);
        assert_eq!(lex_ident("fn1").kind, TokenKind::Ident);
        assert_eq!(lex_ident("iff").kind, TokenKind::Ident);
        assert_eq!(lex_ident("returns").kind, TokenKind::Ident);
        assert_eq!(lex_ident("else_").kind, TokenKind::Ident);
    }
}
