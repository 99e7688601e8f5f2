//! Muncht CLI - A command-line tool for the munch tokenizer.
//!
//! This is the main entry point for the muncht CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{OutputFormat, VocabularyOverrides};
use commands::{
    run_check, run_init, run_lex, run_vocab, CheckArgs, InitArgs, LexArgs, VocabArgs,
};
use config::Config;
use error::{MunchtError, Result};

/// Muncht - A CLI tool for the munch tokenizer
///
/// Muncht splits text files into keywords, words, numbers and operators
/// using a configurable vocabulary.
#[derive(Parser, Debug)]
#[command(name = "muncht")]
#[command(author = "Munch Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for the munch tokenizer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MUNCHT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MUNCHT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MUNCHT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the muncht CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize files and print every token
    ///
    /// Files are scanned in parallel with one shared vocabulary; tokens are
    /// printed in input-file order. Use `-` to read standard input.
    Lex(LexCommand),

    /// Check that files tokenize
    ///
    /// Prints one line per clean file, a diagnostic per failing file, and a
    /// summary. Exits non-zero if any file fails.
    Check(CheckCommand),

    /// Show the effective vocabulary
    ///
    /// Prints the keywords and operators after configuration and overrides,
    /// and the characters read as operator characters.
    Vocab(VocabCommand),

    /// Write a default muncht.toml
    ///
    /// Creates a configuration file with the built-in vocabulary in the
    /// specified or current directory.
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Number of files scanned in parallel
    #[arg(short, long)]
    jobs: Option<usize>,

    #[command(flatten)]
    vocabulary: VocabularyOverrides,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of files scanned in parallel
    #[arg(short, long)]
    jobs: Option<usize>,

    #[command(flatten)]
    vocabulary: VocabularyOverrides,
}

/// Arguments for the vocab subcommand.
#[derive(Parser, Debug)]
struct VocabCommand {
    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    #[command(flatten)]
    vocabulary: VocabularyOverrides,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing muncht.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the muncht CLI.
///
/// Errors are printed with their `Display` text and turn into a failing
/// exit status.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        },
    }
}

/// Initialize logging, load configuration, and dispatch the command.
fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Execute the selected command
    execute_command(cli.command, verbose, config)
}

/// The final line printed for a failed run.
fn error_line(err: &MunchtError) -> String {
    format!("error: {}", err)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
/// `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

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
        .map_err(|e| MunchtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
        Commands::Vocab(args) => execute_vocab(args, config),
        Commands::Init(args) => execute_init(args, verbose, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, verbose: bool, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        verbose,
        files: args.files,
        format: args.format,
        jobs: args.jobs,
        vocabulary: args.vocabulary,
    };
    run_lex(lex_args, config)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        files: args.files,
        jobs: args.jobs,
        vocabulary: args.vocabulary,
    };
    run_check(check_args, config)
}

/// Execute the vocab command.
fn execute_vocab(args: VocabCommand, config: Config) -> Result<()> {
    let vocab_args = VocabArgs {
        format: args.format,
        vocabulary: args.vocabulary,
    };
    run_vocab(vocab_args, config)
}

/// Execute the init command.
fn execute_init(args: InitCommand, verbose: bool, config: Config) -> Result<()> {
    let init_args = InitArgs {
        verbose,
        force: args.force,
        path: args.path,
    };
    run_init(init_args, config)
}
