//! Common types and utilities for muncht commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::{Path, PathBuf};

use munch_lex::{LexError, Lexicon, Token, Vocabulary};
use munch_util::SourceFile;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{MunchtError, Result};

use super::traits::FileSummary;

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One item per line
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

// ============================================================================
// Vocabulary
// ============================================================================

/// Command-line replacements for the configured keyword and operator lists.
///
/// Entries are separated by spaces, since neither a keyword nor an operator
/// can contain whitespace. `--operators ""` disables operators.
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct VocabularyOverrides {
    /// Space-separated keywords replacing the configured list (repeatable)
    #[arg(long, value_delimiter = ' ')]
    pub keywords: Option<Vec<String>>,

    /// Space-separated operators replacing the configured list (repeatable)
    #[arg(long, value_delimiter = ' ')]
    pub operators: Option<Vec<String>>,
}

impl VocabularyOverrides {
    /// The vocabulary from `base` with any overridden list replaced.
    pub fn apply(&self, base: &Vocabulary) -> Vocabulary {
        Vocabulary {
            keywords: Self::entries(&self.keywords).unwrap_or_else(|| base.keywords.clone()),
            operators: Self::entries(&self.operators).unwrap_or_else(|| base.operators.clone()),
        }
    }

    // runs of spaces split into empty strings
    fn entries(list: &Option<Vec<String>>) -> Option<Vec<String>> {
        list.as_ref().map(|items| {
            items
                .iter()
                .filter(|item| !item.is_empty())
                .cloned()
                .collect()
        })
    }
}

/// Compile the effective vocabulary once for a whole command run.
pub fn build_lexicon(config: &Config, overrides: &VocabularyOverrides) -> Result<Lexicon> {
    let vocabulary = overrides.apply(&config.vocabulary);
    Ok(Lexicon::new(&vocabulary)?)
}

/// Resolve the worker count from the command line and configuration.
///
/// Falls back to the number of CPUs when neither sets it.
pub fn resolve_jobs(jobs: Option<usize>, config: &Config) -> Result<usize> {
    match jobs.or(config.lex.jobs).unwrap_or_else(num_cpus::get) {
        0 => Err(MunchtError::Validation(
            error_messages::ZERO_JOBS.to_string(),
        )),
        jobs => Ok(jobs),
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// Path argument that reads standard input.
pub const STDIN_PATH: &str = "-";

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Read one input, or standard input for `-`.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(SourceFile::new(STDIN_NAME, content));
    }

    if !path.exists() {
        return Err(MunchtError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(MunchtError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        MunchtError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(SourceFile::new(display_name(path), content))
}

fn display_name(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        STDIN_NAME.to_string()
    } else {
        path.display().to_string()
    }
}

/// Result of scanning one input.
#[derive(Debug)]
pub struct FileScan {
    /// Display name of the input.
    pub name: String,

    /// The text that was scanned, if it could be read.
    pub source: Option<SourceFile>,

    /// Every token, or why there are none.
    pub outcome: Result<Vec<Token>>,
}

impl FileScan {
    /// Scan one input against a shared lexicon.
    pub fn run(lexicon: &Lexicon, path: &Path) -> Self {
        let name = display_name(path);
        tracing::debug!(file = %name, "scanning");

        match read_source(path) {
            Ok(source) => {
                let outcome = lexicon.tokenize(source.content()).map_err(|err| {
                    MunchtError::Lex {
                        path: name.clone(),
                        source: err,
                    }
                });
                Self {
                    name,
                    source: Some(source),
                    outcome,
                }
            },
            Err(err) => Self {
                name,
                source: None,
                outcome: Err(err),
            },
        }
    }

    /// The tokens, if the scan succeeded.
    pub fn tokens(&self) -> Option<&[Token]> {
        self.outcome.as_deref().ok()
    }

    /// A printable report of the failure, if the scan failed.
    ///
    /// Lexing failures include the offending source line with a caret under
    /// the failing position.
    pub fn diagnostic(&self) -> Option<String> {
        let err = self.outcome.as_ref().err()?;
        Some(match (err, &self.source) {
            (MunchtError::Lex { source: lex_err, .. }, Some(file)) => {
                format!("{}\n{}", err, source_excerpt(file, lex_err))
            },
            _ => format!("{}: error: {}", self.name, err),
        })
    }
}

/// Scan every input in parallel on `jobs` workers.
///
/// The returned scans are in the same order as `paths`.
///
/// Standard input can be named at most once.
pub fn scan_files(lexicon: &Lexicon, paths: &[PathBuf], jobs: usize) -> Result<Vec<FileScan>> {
    let stdin_count = paths
        .iter()
        .filter(|path| path.as_path() == Path::new(STDIN_PATH))
        .count();
    if stdin_count > 1 {
        return Err(MunchtError::Validation(
            error_messages::STDIN_REPEATED.to_string(),
        ));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| MunchtError::Config(format!("Failed to start worker pool: {}", e)))?;

    tracing::debug!(files = paths.len(), jobs, "scanning inputs");
    Ok(pool.install(|| {
        paths
            .par_iter()
            .map(|path| FileScan::run(lexicon, path))
            .collect()
    }))
}

/// Print the diagnostic of every failed scan to stderr and count outcomes.
pub fn report_failures(scans: &[FileScan]) -> FileSummary {
    let mut summary = FileSummary::default();
    for scan in scans {
        match scan.diagnostic() {
            Some(diagnostic) => {
                eprintln!("{}", diagnostic);
                summary.failed += 1;
            },
            None => summary.succeeded += 1,
        }
    }
    summary
}

/// Turn a summary with failures into the command's error.
pub fn check_for_failures(summary: FileSummary) -> Result<()> {
    if summary.is_success() {
        return Ok(());
    }
    Err(MunchtError::Validation(format!(
        "{} {}",
        summary.failed,
        error_messages::FILES_FAILED
    )))
}

/// The source line of `err` with carets under the offending text.
fn source_excerpt(file: &SourceFile, err: &LexError) -> String {
    let span = err.span();
    let line_number = span.line.to_string();
    let gutter = " ".repeat(line_number.len());
    let line = file.line_of(span).unwrap_or_default();

    // keep tabs so the caret lines up under tab-indented text
    let pad: String = line
        .chars()
        .take(span.column.saturating_sub(1) as usize)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    // a single caret marks the end of input
    let width = match file.snippet(span) {
        Ok(text) => text.trim_end_matches(['\n', '\r']).chars().count().max(1),
        Err(err) => {
            tracing::debug!(%span, error = %err, "span outside source");
            1
        },
    };

    format!(
        "{} |\n{} | {}\n{} | {}{}",
        gutter,
        line_number,
        line,
        gutter,
        pad,
        "^".repeat(width)
    )
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when the configuration file already exists.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force to overwrite):";

    /// Error when files failed to scan.
    pub const FILES_FAILED: &str = "file(s) failed to tokenize";

    /// Error when standard input is named more than once.
    pub const STDIN_REPEATED: &str = "standard input (`-`) can only be read once";

    /// Error when zero workers are requested.
    pub const ZERO_JOBS: &str = "--jobs must be at least 1";
}
