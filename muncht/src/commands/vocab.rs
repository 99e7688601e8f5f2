//! Vocab command implementation.
//!
//! Prints the effective keyword and operator lists after configuration and
//! command-line overrides, together with the operator characters derived
//! from them.

use munch_lex::Lexicon;
use serde::Serialize;

use crate::commands::common::{build_lexicon, OutputFormat, VocabularyOverrides};
use crate::commands::traits::{run_command, Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the vocab command.
#[derive(Debug, Clone, Default)]
pub struct VocabArgs {
    /// Output format (default: from config).
    pub format: Option<OutputFormat>,
    /// Keyword and operator replacements.
    pub vocabulary: VocabularyOverrides,
}

/// The compiled vocabulary as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyReport {
    /// Distinct keywords, sorted.
    pub keywords: Vec<String>,
    /// Distinct operators, sorted.
    pub operators: Vec<String>,
    /// Characters classified as operator characters, in first-seen order.
    pub operator_chars: Vec<char>,
}

impl VocabularyReport {
    /// Summarize a compiled lexicon.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self {
            keywords: lexicon.keywords().words(),
            operators: lexicon.operators().words(),
            operator_chars: lexicon.classifier().operator_chars().collect(),
        }
    }

    /// Render as three labelled lines.
    pub fn to_text(&self) -> String {
        let chars: Vec<String> = self.operator_chars.iter().map(char::to_string).collect();
        format!(
            "keywords ({}): {}\noperators ({}): {}\noperator characters ({}): {}",
            self.keywords.len(),
            self.keywords.join(" "),
            self.operators.len(),
            self.operators.join(" "),
            chars.len(),
            chars.join(" ")
        )
    }
}

/// Vocab command handler.
pub struct VocabCommand {
    args: VocabArgs,
    config: Config,
}

impl VocabCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<VocabularyReport> {
        let lexicon = build_lexicon(&self.config, &self.args.vocabulary)?;
        let report = VocabularyReport::from_lexicon(&lexicon);

        match self.args.format.unwrap_or(self.config.lex.format) {
            OutputFormat::Text => println!("{}", report.to_text()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
        Ok(report)
    }
}

impl Command for VocabCommand {
    type Args = VocabArgs;
    type Output = VocabularyReport;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "vocab"
    }
}

impl CommandDescription for VocabCommand {
    fn description() -> &'static str {
        "Show the effective vocabulary"
    }
}

/// Run the vocab command.
pub fn run_vocab(args: VocabArgs, config: Config) -> Result<()> {
    run_command::<VocabCommand>(args, config).map(|_| ())
}
