//! Application configuration.
//!
//! Resolves the input and output paths from command-line values, environment
//! variables (optionally loaded from a `.env` file) and built-in defaults.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{env as env_keys, paths};
use crate::error::{Error, Result};

/// Configuration for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Plain-text quote list to read.
    pub input_path: PathBuf,
    /// Formatted topic file to write.
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(paths::DEFAULT_INPUT),
            output_path: PathBuf::from(paths::DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(env_keys::INPUT) {
            config.input_path = expand_path(env_keys::INPUT, &path)?;
        }

        if let Some(path) = lookup(env_keys::OUTPUT) {
            config.output_path = expand_path(env_keys::OUTPUT, &path)?;
        }

        Ok(config)
    }

    /// Apply command-line paths, which take precedence over everything else.
    #[must_use]
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        self
    }
}

/// Expand `~` in a configured path, rejecting empty values.
fn expand_path(key: &str, value: &str) -> Result<PathBuf> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::config(
            format!("{key} is set but empty"),
            "Unset it to use the default path or give a file path",
        ));
    }
    Ok(PathBuf::from(shellexpand::tilde(value).to_string()))
}
