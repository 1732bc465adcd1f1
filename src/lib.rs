//! # Workbench Starter
//!
//! Command-line front end for the DL Workbench command generator.
//! This crate provides the CLI structure, argument parsing, and command
//! routing; all command construction lives in `workbench-core`.

pub mod commands;
pub mod config;
pub mod display;
pub mod form;
pub mod helpers;

// Re-export common types
pub use config::StarterConfig;

use clap::{Parser, Subcommand};
use thiserror::Error;

/// Application-level errors for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Core domain error: {0}")]
    Core(#[from] workbench_core::CoreError),

    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::InvalidInput(format!("Input error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Main CLI struct
#[derive(Parser)]
#[command(name = "workbench-starter")]
#[command(about = "Generates the shell commands that start the DL Workbench")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the starting commands for a configuration given as flags
    Build(commands::build::BuildArgs),
    /// Fill in the configuration through interactive prompts
    Interactive(commands::interactive::InteractiveArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current command defaults
    Show,
    /// Show the configuration file path
    Path,
    /// Persist a default value override
    Set {
        /// Key to set (image, bind-ip, port, container-port, container-name, wrapper)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Main CLI runner
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = StarterConfig::load()?;

    match cli.command {
        Commands::Build(args) => commands::build::handle(args, &config),
        Commands::Interactive(args) => commands::interactive::handle(args, &config),
        Commands::Config { action } => commands::config::handle(action, config),
    }
}
