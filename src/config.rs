use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use workbench_core::CommandDefaults;

/// Configuration-specific errors that can occur during config operations
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine a configuration directory")]
    NoConfigDir,

    #[error("Config directory creation failed: {0}")]
    DirectoryCreationFailed(String),

    #[error("TOML parsing error: {0}")]
    TomlParse(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(String),

    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// On-disk configuration structure.
///
/// The `[command]` table overrides the built-in command defaults; any
/// field left out keeps its built-in value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigData {
    #[serde(default)]
    pub command: CommandDefaults,
}

/// Configuration manager that handles loading, saving, and accessing the
/// command defaults override file.
#[derive(Debug, Clone)]
pub struct StarterConfig {
    pub config_path: PathBuf,
    pub data: ConfigData,
}

impl StarterConfig {
    /// Load from `<config-dir>/workbench-starter/config.toml`, creating
    /// the directory (but not the file) when missing.
    ///
    /// `WORKBENCH_STARTER_CONFIG_DIR` overrides the directory entirely.
    pub fn load() -> Result<Self> {
        let config_dir = config_dir()?;
        let config_path = config_dir.join("config.toml");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| ConfigError::DirectoryCreationFailed(e.to_string()))?;
        }

        let data = if config_path.exists() {
            let content = fs::read_to_string(&config_path).map_err(CliError::Io)?;
            toml::from_str(&content).map_err(|e| ConfigError::TomlParse(e.to_string()))?
        } else {
            ConfigData::default()
        };

        Ok(Self { config_path, data })
    }

    /// The effective command defaults (built-ins plus file overrides).
    pub fn defaults(&self) -> &CommandDefaults {
        &self.data.command
    }

    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.data)
            .map_err(|e| ConfigError::TomlSerialize(e.to_string()))?;
        fs::write(&self.config_path, content).map_err(CliError::Io)?;
        Ok(())
    }

    /// Set one override by key and persist the file.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let command = &mut self.data.command;
        match key {
            "image" => command.docker_image_with_tag = value.to_string(),
            "bind-ip" => command.bind_ip = value.to_string(),
            "port" => command.host_port = parse_port(key, value)?,
            "container-port" => command.container_port = parse_port(key, value)?,
            "container-name" => command.container_name = value.to_string(),
            "wrapper" => command.python_wrapper_name = value.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
        self.save()
    }

    /// Current configuration rendered as TOML for `config show`.
    pub fn show(&self) -> Result<String> {
        let content = toml::to_string_pretty(&self.data)
            .map_err(|e| ConfigError::TomlSerialize(e.to_string()))?;
        Ok(content)
    }
}

fn parse_port(field: &str, value: &str) -> Result<u16> {
    value.parse().map_err(|_| {
        ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
        .into()
    })
}

fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("WORKBENCH_STARTER_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("workbench-starter"))
}


// TODO: Add a `config reset` subcommand that removes the override file
