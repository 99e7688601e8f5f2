//! Init command implementation.
//!
//! This module writes a default `muncht.toml` containing the built-in
//! vocabulary, ready to be edited.

use std::path::{Path, PathBuf};

use crate::commands::common::error_messages;
use crate::commands::traits::{run_command, Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{MunchtError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command, returning the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        let target_path = self.get_target_path();
        self.validate_directory(&target_path)?;

        let config_path = target_path.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(MunchtError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        tracing::info!(path = %config_path.display(), "wrote configuration");
        println!("Created {}", config_path.display());

        Ok(config_path)
    }

    /// Get the directory to initialize.
    fn get_target_path(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Create the directory if needed and make sure it is one.
    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            if self.args.verbose {
                eprintln!("ℹ️ Creating directory: {}", path.display());
            }
            std::fs::create_dir_all(path)?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(MunchtError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args, _config: Config) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default muncht.toml"
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs, config: Config) -> Result<()> {
    run_command::<InitCommand>(args, config).map(|_| ())
}
