//! Lexer module.
//!
//! The lexer implementation is split along its dispatch table:
//! - `core` - Lexer struct, whitespace skipping and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `operator` - Operator and delimiter lexing

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Lexer;
