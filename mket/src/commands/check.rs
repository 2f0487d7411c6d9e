//! Check command implementation.
//!
//! Reports every `ILLEGAL` token in the input files. The lexer treats those
//! tokens as ordinary data; this command is the consumer that decides they
//! are errors.

use std::io::Write;
use std::path::PathBuf;

use mke_lex::{Lexer, TokenKind};
use tracing::{debug, info};

use crate::commands::common::read_source;
use crate::error::{MketError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// How many illegal characters are listed per file.
    pub max_illegal: usize,
}

/// An illegal character and the byte offset it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalChar {
    /// Byte offset of the character.
    pub offset: usize,
    /// The character itself.
    pub literal: String,
}

/// Collects every `ILLEGAL` token of `source`.
pub fn find_illegal(source: &str) -> Vec<IllegalChar> {
    let mut lexer = Lexer::new(source);
    let mut found = Vec::new();
    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Eof => return found,
            TokenKind::Illegal => found.push(IllegalChar {
                offset: lexer.token_start(),
                literal: token.literal,
            }),
            _ => {},
        }
    }
}

/// Checks every file, writing one line per reported character to `out`.
///
/// Fails with [`MketError::IllegalTokens`] if any file contains one.
pub fn run_check(args: &CheckArgs, out: &mut dyn Write) -> Result<()> {
    if args.max_illegal == 0 {
        return Err(MketError::Validation(
            "max-illegal must be at least 1".to_string(),
        ));
    }

    let mut total = 0;

    for path in &args.files {
        let source = read_source(path)?;
        let illegal = find_illegal(&source);
        debug!(path = %path.display(), illegal = illegal.len(), "checked file");

        for ch in illegal.iter().take(args.max_illegal) {
            writeln!(
                out,
                "{}:{}: illegal character {:?}",
                path.display(),
                ch.offset,
                ch.literal
            )?;
        }
        if illegal.len() > args.max_illegal {
            writeln!(
                out,
                "{}: ... and {} more",
                path.display(),
                illegal.len() - args.max_illegal
            )?;
        }

        total += illegal.len();
    }

    if total > 0 {
        return Err(MketError::IllegalTokens { count: total });
    }

    info!("checked {} file(s), no illegal characters", args.files.len());
    writeln!(out, "ok: {} file(s) checked", args.files.len())?;
    Ok(())
}
