//! Configuration management for Facetist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_FILTER_PREFIX, DEFAULT_ID_DELIMITER, DEFAULT_INSTITUTION_FIELD,
    DEFAULT_LEAF_CATEGORY,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub filters: FilterConfig,
    pub wizard: WizardConfig,
    pub logging: LoggingConfig,
}

/// Filter synchronization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Prefix marking a query parameter as filter-owned
    pub param_prefix: String,
    /// Delimiter joining selected ids inside one filter parameter
    pub id_delimiter: String,
    /// Whether sessions synchronize to an external location at all
    pub sync_enabled: bool,
}

/// Wizard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Key of the leaf category whose selection is submitted
    pub leaf_category: String,
    /// Item field carrying the institution id required on recipients
    pub institution_field: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            param_prefix: DEFAULT_FILTER_PREFIX.to_string(),
            id_delimiter: DEFAULT_ID_DELIMITER.to_string(),
            sync_enabled: true,
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            leaf_category: DEFAULT_LEAF_CATEGORY.to_string(),
            institution_field: DEFAULT_INSTITUTION_FIELD.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("facetist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("facetist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate filter parameter settings; '=' and '&' would corrupt the
        // serialized query string
        if self.filters.param_prefix.is_empty() {
            anyhow::bail!("param_prefix cannot be empty");
        }
        if self.filters.param_prefix.contains(['=', '&']) {
            anyhow::bail!(
                "param_prefix cannot contain '=' or '&', got '{}'",
                self.filters.param_prefix
            );
        }
        if self.filters.id_delimiter.is_empty() {
            anyhow::bail!("id_delimiter cannot be empty");
        }
        if self.filters.id_delimiter.contains(['=', '&']) {
            anyhow::bail!(
                "id_delimiter cannot contain '=' or '&', got '{}'",
                self.filters.id_delimiter
            );
        }

        // Validate wizard settings
        if self.wizard.leaf_category.is_empty() {
            anyhow::bail!("leaf_category cannot be empty");
        }
        if self.wizard.institution_field.is_empty() {
            anyhow::bail!("institution_field cannot be empty");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Facetist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("facetist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
