//! Common types and utilities for mket commands.
//!
//! Loading source text from disk lives here, outside the lexer: the lexer
//! only ever sees a complete in-memory string.

use std::path::Path;

use mke_lex::Lexer;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{MketError, Result};

/// File extension of mke source files.
pub const SOURCE_EXTENSION: &str = "mke";

/// One lexed token together with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Upper-case kind name, e.g. `IDENT`.
    pub kind: &'static str,
    /// Exact source text of the token.
    pub literal: String,
    /// Byte offset of the first character of the token.
    pub offset: usize,
}

/// Reads a source file as UTF-8 text.
///
/// Files without the `.mke` extension are read anyway, with a warning.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MketError::FileOperation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(MketError::Validation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }

    if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        warn!(path = %path.display(), "not a .{} file, lexing anyway", SOURCE_EXTENSION);
    }

    let source = std::fs::read_to_string(path).map_err(|e| {
        MketError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), bytes = source.len(), "loaded source");
    Ok(source)
}

/// Lexes `source` to the end, including the terminating `EOF` token.
pub fn lex_records(source: &str) -> Vec<TokenRecord> {
    let mut lexer = Lexer::new(source);
    let mut records = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        records.push(TokenRecord {
            kind: token.kind.name(),
            literal: token.literal,
            offset: lexer.token_start(),
        });
        if done {
            return records;
        }
    }
}
