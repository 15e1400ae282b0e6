//! Configuration for the CLI
//!
//! Loaded from a TOML file. Every field has a default, so a missing file or
//! an empty one yields a working configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eacl_core::LogLevel;
use eacl_policy::PrivilegeHierarchy;
use serde::{Deserialize, Serialize};

/// Privilege table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivilegeConfig {
    /// Whether to start from the standard JCR privilege table
    #[serde(default = "default_include_jcr_defaults")]
    pub include_jcr_defaults: bool,

    /// Additional aggregates, layered over the defaults
    #[serde(default)]
    pub aggregates: BTreeMap<String, Vec<String>>,
}

fn default_include_jcr_defaults() -> bool {
    true
}

impl Default for PrivilegeConfig {
    fn default() -> Self {
        Self {
            include_jcr_defaults: default_include_jcr_defaults(),
            aggregates: BTreeMap::new(),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level name
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether to indent JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Privilege table
    #[serde(default)]
    pub privileges: PrivilegeConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty: false,
            privileges: PrivilegeConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a file
    ///
    /// Returns the defaults when no path is given or the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path).with_context(|| {
                    format!("Failed to read configuration file: {}", path.display())
                })?;
                toml::from_str(&content).with_context(|| {
                    format!("Failed to parse configuration file: {}", path.display())
                })?
            }
            _ => CliConfig::default(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.log_level()?;
        self.hierarchy()?;
        Ok(())
    }

    /// The configured log level
    pub fn log_level(&self) -> Result<LogLevel> {
        Ok(self.log_level.parse::<LogLevel>()?)
    }

    /// Build the privilege table
    pub fn hierarchy(&self) -> Result<PrivilegeHierarchy> {
        let base = if self.privileges.include_jcr_defaults {
            PrivilegeHierarchy::jcr()
        } else {
            PrivilegeHierarchy::empty()
        };

        base.with_aggregates(self.privileges.aggregates.clone())
            .context("Invalid privilege aggregates in configuration")
    }
}
