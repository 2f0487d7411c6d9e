//! Operator and delimiter lexing.
//!
//! `=` and `!` are the only characters with a two-character form; both are
//! resolved with a single peek before anything is consumed.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes assign or equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> TokenKind {
        self.lex_with_eq_suffix(TokenKind::Eq, TokenKind::Assign)
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> TokenKind {
        self.lex_with_eq_suffix(TokenKind::NotEq, TokenKind::Bang)
    }

    /// Consumes the current character, plus a following `=` when there is one.
    fn lex_with_eq_suffix(&mut self, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.peek_char() == '=' {
            self.cursor.bump();
            self.cursor.bump();
            double
        } else {
            self.cursor.bump();
            single
        }
    }

    /// Consumes one character that always lexes to `kind`.
    #[inline]
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.bump();
        kind
    }
}
