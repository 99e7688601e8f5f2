//! Lex command implementation.
//!
//! This module tokenizes input files with one shared lexicon and prints the
//! token streams as text or JSON.

use std::path::PathBuf;
use std::time::Instant;

use indexmap::IndexMap;
use munch_lex::Token;

use crate::commands::common::{
    build_lexicon, check_for_failures, report_failures, resolve_jobs, scan_files, FileScan,
    OutputFormat, VocabularyOverrides,
};
use crate::commands::traits::{run_command, Command, CommandDescription, FileSummary};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files; `-` reads standard input.
    pub files: Vec<PathBuf>,
    /// Output format (default: from config).
    pub format: Option<OutputFormat>,
    /// Number of parallel jobs (default: from config).
    pub jobs: Option<usize>,
    /// Keyword and operator replacements.
    pub vocabulary: VocabularyOverrides,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<FileSummary> {
        let start_time = Instant::now();
        let lexicon = build_lexicon(&self.config, &self.args.vocabulary)?;
        let jobs = resolve_jobs(self.args.jobs, &self.config)?;

        let scans = scan_files(&lexicon, &self.args.files, jobs)?;
        let output = match self.output_format() {
            OutputFormat::Text => render_text(&scans),
            OutputFormat::Json => render_json(&scans)?,
        };
        if !output.is_empty() {
            println!("{}", output);
        }

        let summary = report_failures(&scans);
        self.log_completion(start_time.elapsed(), summary);
        check_for_failures(summary)?;
        Ok(summary)
    }

    /// The effective output format.
    pub fn output_format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.lex.format)
    }

    fn log_completion(&self, elapsed: std::time::Duration, summary: FileSummary) {
        if self.args.verbose {
            eprintln!(
                "ℹ️ Tokenized {} of {} file(s) in {:.2}s",
                summary.succeeded,
                summary.total(),
                elapsed.as_secs_f64()
            );
        }
    }
}

/// One token per line as `line:column  kind  value`.
///
/// With several inputs each successful file gets a `==> name <==` header.
/// Failed files are left out; their diagnostics go to stderr.
pub fn render_text(scans: &[FileScan]) -> String {
    let headed = scans.len() > 1;
    let mut blocks = Vec::new();

    for scan in scans {
        let Some(tokens) = scan.tokens() else {
            continue;
        };
        let mut block = String::new();
        if headed {
            block.push_str(&format!("==> {} <==\n", scan.name));
        }
        for token in tokens {
            block.push_str(&render_token(token));
            block.push('\n');
        }
        blocks.push(block);
    }

    blocks.join("\n").trim_end().to_string()
}

fn render_token(token: &Token) -> String {
    format!(
        "{:<9} {:<9} {}",
        token.span.to_string(),
        token.kind.as_str(),
        token.value
    )
}

/// The token array of a single input, or an object of token arrays keyed by
/// file name in input order.
pub fn render_json(scans: &[FileScan]) -> Result<String> {
    if let [scan] = scans {
        return match scan.tokens() {
            Some(tokens) => Ok(serde_json::to_string_pretty(tokens)?),
            None => Ok(String::new()),
        };
    }

    let by_file: IndexMap<&str, &[Token]> = scans
        .iter()
        .filter_map(|scan| Some((scan.name.as_str(), scan.tokens()?)))
        .collect();
    Ok(serde_json::to_string_pretty(&by_file)?)
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = FileSummary;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

impl CommandDescription for LexCommand {
    fn description() -> &'static str {
        "Tokenize input files"
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    run_command::<LexCommand>(args, config).map(|_| ())
}
