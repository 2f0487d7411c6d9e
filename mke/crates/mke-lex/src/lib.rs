//! mke-lex - Lexical Analyzer for the mke Scripting Language
//!
//! This crate turns the text of an mke program into the stream of
//! classified tokens the parser consumes.
//!
//! # Example Usage
//!
//! ```
//! use mke_lex::{Lexer, Token, TokenKind};
//!
//! let mut lexer = Lexer::new("let five = 5;");
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Let, "let"));
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "five"));
//!
//! // Or iterate through the rest, stopping before EOF
//! let rest: Vec<TokenKind> = lexer.map(|t| t.kind).collect();
//! assert_eq!(rest, [TokenKind::Assign, TokenKind::Int, TokenKind::Semicolon]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//!
//! ## Identifiers and Literals
//!
//! - **Identifier**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Integer**: `[0-9]+`, kept as text
//!
//! ## Operators
//!
//! `=`, `+`, `-`, `!`, `*`, `/`, `<`, `>`, `==`, `!=`
//!
//! ## Delimiters
//!
//! `,`, `;`, `(`, `)`, `{`, `}`
//!
//! ## Special
//!
//! - **EOF**: End of input, empty literal, repeated forever
//! - **ILLEGAL**: Any other single character

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, lookup_ident, Token, TokenKind};
