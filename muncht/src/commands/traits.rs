//! Command trait for the muncht CLI.
//!
//! This module defines the standard command traits that all commands
//! implement to ensure consistency across the application.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all muncht commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing command descriptions.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;
}

/// Construct and execute a command.
pub fn run_command<C>(args: C::Args, config: Config) -> Result<C::Output>
where
    C: Command + CommandDescription,
{
    tracing::debug!(command = C::name(), "{}", C::description());
    C::new(args, config).execute()
}

/// Summary of a command that processes several input files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSummary {
    /// Files that scanned cleanly.
    pub succeeded: usize,

    /// Files that failed to read or scan.
    pub failed: usize,
}

impl FileSummary {
    /// Total number of files.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Returns true if no file failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
