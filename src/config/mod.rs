//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{client, files, output_formats, timeouts};
use crate::core::error::{CheckerError, Result};

/// Settings for a single run, built once at process start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to a file with one URL per line
    pub file: Option<String>,

    /// Single URL to check (takes precedence over `file`)
    pub url: Option<String>,

    /// Deadline in seconds for the whole batch
    pub timeout: Option<u64>,

    /// Per-request client timeout in seconds
    pub request_timeout: Option<u64>,

    /// Report only URLs with errors
    pub only_errors: Option<bool>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            url: None,
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            request_timeout: Some(timeouts::DEFAULT_REQUEST_TIMEOUT_SECONDS),
            only_errors: Some(false),
            user_agent: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Config for checking a single URL with default settings
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Config for checking every URL listed in a file with default settings
    pub fn for_file(path: impl Into<String>) -> Self {
        Self {
            file: Some(path.into()),
            ..Default::default()
        }
    }

    /// Load configuration from file, falling back to defaults for missing keys
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CheckerError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            CheckerError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load the config file from the working directory if there is one
    pub fn load_from_standard_locations() -> Result<Self> {
        if Path::new(files::DEFAULT_CONFIG_FILE).is_file() {
            Self::load_from_file(files::DEFAULT_CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // A URL source on the command line replaces both source fields
        if cli_config.file.is_some() || cli_config.url.is_some() {
            self.file = cli_config.file.clone();
            self.url = cli_config.url.clone();
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(request_timeout) = cli_config.request_timeout {
            self.request_timeout = Some(request_timeout);
        }
        if cli_config.only_errors {
            self.only_errors = Some(true);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Single URL, if one is set and non-empty
    pub fn single_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// URL file path, if one is set and non-empty
    pub fn file_path(&self) -> Option<&str> {
        self.file.as_deref().filter(|f| !f.is_empty())
    }

    /// Whether a URL source is configured at all
    pub fn has_url_source(&self) -> bool {
        self.single_url().is_some() || self.file_path().is_some()
    }

    /// Get batch deadline as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Get per-request client timeout as Duration
    pub fn request_timeout_duration(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout
                .unwrap_or(timeouts::DEFAULT_REQUEST_TIMEOUT_SECONDS),
        )
    }

    pub fn only_errors(&self) -> bool {
        self.only_errors.unwrap_or(false)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(client::DEFAULT_USER_AGENT)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("Timeout", self.timeout),
            ("Request timeout", self.request_timeout),
        ] {
            if let Some(seconds) = value {
                if seconds == 0 {
                    return Err(CheckerError::Config(format!(
                        "{name} cannot be 0. Expected a positive integer representing seconds."
                    )));
                }
                if seconds > timeouts::MAX_TIMEOUT_SECONDS {
                    return Err(CheckerError::Config(format!(
                        "{name} of {seconds} seconds is extremely large (>24 hours). Consider using a smaller value."
                    )));
                }
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(CheckerError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // URL source
    pub file: Option<String>, // --file
    pub url: Option<String>,  // --url

    // Timing
    pub timeout: Option<u64>,         // --timeout
    pub request_timeout: Option<u64>, // --request-timeout

    // Output & format
    pub only_errors: bool,             // --only-errors
    pub output_format: Option<String>, // --format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose

    // Network
    pub user_agent: Option<String>, // --user-agent

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
