//! Check command implementation.
//!
//! Scans input files like `lex` but prints only whether each file
//! tokenizes, followed by a summary line.

use std::path::PathBuf;

use crate::commands::common::{
    build_lexicon, check_for_failures, report_failures, resolve_jobs, scan_files, FileScan,
    VocabularyOverrides,
};
use crate::commands::traits::{run_command, Command, CommandDescription, FileSummary};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files; `-` reads standard input.
    pub files: Vec<PathBuf>,
    /// Number of parallel jobs (default: from config).
    pub jobs: Option<usize>,
    /// Keyword and operator replacements.
    pub vocabulary: VocabularyOverrides,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<FileSummary> {
        let lexicon = build_lexicon(&self.config, &self.args.vocabulary)?;
        let jobs = resolve_jobs(self.args.jobs, &self.config)?;
        let scans = scan_files(&lexicon, &self.args.files, jobs)?;

        for line in ok_lines(&scans, self.args.verbose) {
            println!("{}", line);
        }
        let summary = report_failures(&scans);
        println!("{}", summary_line(summary));

        check_for_failures(summary)?;
        Ok(summary)
    }
}

/// `name: ok` for every clean file, with the token count when verbose.
pub fn ok_lines(scans: &[FileScan], verbose: bool) -> Vec<String> {
    scans
        .iter()
        .filter_map(|scan| {
            let tokens = scan.tokens()?;
            Some(if verbose {
                format!("{}: ok ({} tokens)", scan.name, tokens.len())
            } else {
                format!("{}: ok", scan.name)
            })
        })
        .collect()
}

/// Final `checked N file(s)` line.
pub fn summary_line(summary: FileSummary) -> String {
    format!(
        "checked {} file(s): {} ok, {} failed",
        summary.total(),
        summary.succeeded,
        summary.failed
    )
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = FileSummary;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Check that input files tokenize"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    run_command::<CheckCommand>(args, config).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use munch_lex::{Lexicon, Vocabulary};
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_check_command_name() {
        assert_eq!(<CheckCommand as Command>::name(), "check");
    }

    #[test]
    fn test_summary_line() {
        let summary = FileSummary {
            succeeded: 2,
            failed: 1,
        };
        assert_eq!(summary_line(summary), "checked 3 file(s): 2 ok, 1 failed");
    }

    #[test]
    fn test_ok_lines_skip_failures() {
        let temp_dir = TempDir::new().unwrap();
        let lexicon = Lexicon::new(&Vocabulary::default()).unwrap();
        let good = write_file(&temp_dir, "good.mn", "a b c");
        let bad = write_file(&temp_dir, "bad.mn", "a ~ c");
        let scans = scan_files(&lexicon, &[good.clone(), bad], 2).unwrap();

        let lines = ok_lines(&scans, true);
        assert_eq!(lines, vec![format!("{}: ok (3 tokens)", good.display())]);
        assert_eq!(ok_lines(&scans, false), vec![format!("{}: ok", good.display())]);
    }

    #[test]
    fn test_check_command_all_ok() {
        let temp_dir = TempDir::new().unwrap();
        let args = CheckArgs {
            files: vec![
                write_file(&temp_dir, "a.mn", "if a { b }"),
                write_file(&temp_dir, "b.mn", "while x < 3.5 { x += 1 }"),
            ],
            ..CheckArgs::default()
        };
        let summary = CheckCommand::new(args, Config::default()).run().unwrap();
        assert_eq!(summary.succeeded, 2);
    }

    #[test]
    fn test_check_command_failure_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let args = CheckArgs {
            files: vec![write_file(&temp_dir, "a.mn", "1.2.3")],
            ..CheckArgs::default()
        };
        assert!(run_check(args, Config::default()).is_err());
    }
}
