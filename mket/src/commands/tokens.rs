//! Tokens command implementation.
//!
//! Prints the full token stream of each input file.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::commands::common::{lex_records, read_source, TokenRecord};
use crate::config::OutputFormat;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source files to lex.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Print byte offsets in text output.
    pub offsets: bool,
}

/// JSON document written for one file.
#[derive(Serialize)]
struct FileTokens<'a> {
    file: String,
    tokens: &'a [TokenRecord],
}

/// Lexes every file and writes its tokens to `out`.
pub fn run_tokens(args: &TokensArgs, out: &mut dyn Write) -> Result<()> {
    let with_headers = args.files.len() > 1;

    for path in &args.files {
        let source = read_source(path)?;
        let records = lex_records(&source);
        debug!(path = %path.display(), tokens = records.len(), "lexed file");

        match args.format {
            OutputFormat::Text => {
                if with_headers {
                    writeln!(out, "==> {} <==", path.display())?;
                }
                for record in &records {
                    write_text_line(out, record, args.offsets)?;
                }
            },
            OutputFormat::Json => {
                let doc = FileTokens {
                    file: path.display().to_string(),
                    tokens: &records,
                };
                serde_json::to_writer_pretty(&mut *out, &doc)?;
                writeln!(out)?;
            },
        }
    }

    Ok(())
}

fn write_text_line(out: &mut dyn Write, record: &TokenRecord, offsets: bool) -> Result<()> {
    if offsets {
        writeln!(out, "{:>6} {:<9} {:?}", record.offset, record.kind, record.literal)?;
    } else {
        writeln!(out, "{:<9} {:?}", record.kind, record.literal)?;
    }
    Ok(())
}
