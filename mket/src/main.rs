//! mket - inspect the token stream of mke source files.
//!
//! This is the main entry point for the mket CLI application. It loads
//! source files from disk, hands their text to the lexer and reports what
//! comes back.

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::{MketError, Result};

/// mket - inspect the token stream of mke source files
#[derive(Parser, Debug)]
#[command(name = "mket")]
#[command(author = "Mke Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the token stream of mke source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MKET_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MKET_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MKET_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the mket CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of the given files
    ///
    /// The stream of each file ends with its EOF token.
    Tokens(TokensCommand),

    /// Report characters that start no token
    ///
    /// Exits with a failure status if any file contains one.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit byte offsets from text output
    #[arg(long)]
    no_offsets: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Illegal characters listed per file (default: from config)
    #[arg(long)]
    max_illegal: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Initializes logging, loads configuration and runs the selected command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = execute_command(cli.command, &config, &mut out);
    out.flush()?;
    result
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MketError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command, merging flags over configuration.
fn execute_command(command: Commands, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                files: args.files,
                format: args.format.unwrap_or(config.output.format),
                offsets: config.output.offsets && !args.no_offsets,
            };
            run_tokens(&tokens_args, out)
        },
        Commands::Check(args) => {
            let check_args = CheckArgs {
                files: args.files,
                max_illegal: args.max_illegal.unwrap_or(config.check.max_illegal),
            };
            run_check(&check_args, out)
        },
    }
}
