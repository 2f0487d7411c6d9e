//! Integer literal lexing.

use crate::chars::is_digit;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer literal.
    ///
    /// Consumes the maximal run of decimal digits. There are no signs, radix
    /// prefixes, fractions or exponents: a `.` or letter after the digits
    /// starts the next token. The literal is kept as text and never parsed
    /// here, so arbitrarily long digit runs are fine.
    pub(crate) fn lex_number(&mut self) -> Token {
        while is_digit(self.cursor.current_char()) {
            self.cursor.bump();
        }

        self.make_token(TokenKind::Int)
    }
}
