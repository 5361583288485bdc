//! Configuration management for the CLI
//!
//! This module handles loading and merging configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Environment variables
//! - Command-line arguments

use crate::cli::{Cli, OutputFormat};
use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Unpacked bundle directory; the built-in bundle is used when unset
    pub assets_dir: Option<PathBuf>,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Use colored output by default
    pub color: bool,

    /// Show progress indicators
    pub progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no -v flag is given (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
            progress: true,
        }
    }
}

/// Configuration file syntax, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Yaml,
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config = match FileFormat::from_path(path) {
            FileFormat::Yaml => {
                serde_yaml::from_str(&content).map_err(|e| Error::config_file(path, e))?
            }
            FileFormat::Toml => toml::from_str(&content).map_err(|e| Error::config_file(path, e))?,
            FileFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::config_file(path, e))?
            }
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        for ext in ["yaml", "json", "toml"] {
            paths.push(PathBuf::from(format!(".resource-schema.{}", ext)));
        }

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("resource-schema");
            for ext in ["yaml", "json", "toml"] {
                paths.push(app_dir.join(format!("config.{}", ext)));
            }
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".resource-schema.yaml"));
            paths.push(home_dir.join(".resource-schema.json"));
        }

        paths
    }

    /// Apply command-line overrides (flags win over file values)
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.assets_dir {
            self.assets_dir = Some(dir.clone());
        }
        if cli.no_color {
            self.output.color = false;
        }
        if cli.quiet {
            self.output.progress = false;
        }
    }

    /// Effective output format, preferring the command line
    pub fn output_format(&self, cli_format: Option<OutputFormat>) -> Result<OutputFormat> {
        match cli_format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&self.output.format, true).map_err(|_| {
                Error::config(format!(
                    "unknown output format '{}' (expected human, json, json-pretty or yaml)",
                    self.output.format
                ))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml_json_and_toml() {
        let dir = TempDir::new().unwrap();

        let yaml = dir.path().join("config.yaml");
        std::fs::write(&yaml, "assets_dir: /opt/bundle\noutput:\n  format: yaml\n").unwrap();
        let json = dir.path().join("config.json");
        std::fs::write(&json, r#"{"assets_dir": "/opt/bundle", "output": {"format": "yaml"}}"#).unwrap();
        let toml_path = dir.path().join("config.toml");
        std::fs::write(&toml_path, "assets_dir = \"/opt/bundle\"\n[output]\nformat = \"yaml\"\n").unwrap();

        let expected = Config {
            assets_dir: Some(PathBuf::from("/opt/bundle")),
            output: OutputConfig {
                format: "yaml".to_string(),
                ..OutputConfig::default()
            },
            logging: LoggingConfig::default(),
        };

        for path in [yaml, json, toml_path] {
            assert_eq!(Config::from_file(&path).unwrap(), expected, "{}", path.display());
        }
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigFile { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = Config {
            assets_dir: Some(PathBuf::from("/from/file")),
            ..Config::default()
        };
        let cli = Cli::parse_from([
            "resource-schema",
            "--assets-dir",
            "/from/flag",
            "--no-color",
            "list",
        ]);

        config.apply_cli(&cli);
        assert_eq!(config.assets_dir, Some(PathBuf::from("/from/flag")));
        assert!(!config.output.color);
    }

    #[test]
    fn test_output_format_resolution() {
        let mut config = Config::default();
        assert_eq!(config.output_format(None).unwrap(), OutputFormat::Human);
        assert_eq!(
            config.output_format(Some(OutputFormat::Json)).unwrap(),
            OutputFormat::Json
        );

        config.output.format = "json-pretty".to_string();
        assert_eq!(config.output_format(None).unwrap(), OutputFormat::JsonPretty);

        config.output.format = "xml".to_string();
        assert!(config.output_format(None).is_err());
    }
}
