//! Token definitions for the mke language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was lexed
//! from. Keywords are recognized through a static table consulted once an
//! identifier has been fully scanned.

use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

lazy_static! {
    /// Reserved identifier spellings and the kind each one lexes to.
    static ref KEYWORDS: FxHashMap<&'static str, TokenKind> = {
        let mut map = FxHashMap::default();
        map.insert("fn", TokenKind::Function);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };
}

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Sentinels
    /// A character that starts no token.
    Illegal,
    /// End of input.
    Eof,

    // Literals
    /// Identifier name.
    Ident,
    /// Integer literal, digits only.
    Int,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    // Delimiters
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // Keywords
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl TokenKind {
    /// Returns the upper-case name of this kind, e.g. `NOT_EQ`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }

    /// Returns the only spelling a token of this kind can have.
    ///
    /// `None` for kinds whose literal varies: `ILLEGAL`, `IDENT` and `INT`.
    /// `EOF` is always spelled as the empty string.
    ///
    /// ```
    /// use mke_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::NotEq.fixed_literal(), Some("!="));
    /// assert_eq!(TokenKind::Function.fixed_literal(), Some("fn"));
    /// assert_eq!(TokenKind::Ident.fixed_literal(), None);
    /// ```
    pub fn fixed_literal(self) -> Option<&'static str> {
        let literal = match self {
            TokenKind::Illegal | TokenKind::Ident | TokenKind::Int => return None,
            TokenKind::Eof => "",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
        };
        Some(literal)
    }

    /// Returns true for the reserved-identifier kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token: its kind and the exact source text that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Classification of the token.
    pub kind: TokenKind,
    /// Source text of the token. Empty for `EOF`.
    pub literal: String,
}

impl Token {
    /// Creates a token from a kind and its literal text.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// Creates the end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.literal)
    }
}

/// Returns the keyword kind spelled exactly by `ident`, if any.
///
/// Matching is exact and case-sensitive.
///
/// ```
/// use mke_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("let"), Some(TokenKind::Let));
/// assert_eq!(keyword_from_ident("Let"), None);
/// assert_eq!(keyword_from_ident("lets"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

/// Classifies a fully scanned identifier as a keyword kind or `IDENT`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    keyword_from_ident(ident).unwrap_or(TokenKind::Ident)
}
