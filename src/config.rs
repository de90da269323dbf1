//! Configuration file support for component-resolver.
//!
//! Provides YAML-based configuration through `component-resolver.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::adapters::outbound::platforms::CODE_PLACEHOLDER;
use crate::application::dto::{OutputFormat, ResolverSettings};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "component-resolver.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub lcsc_detail_url: Option<String>,
    pub enable_taobao: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Overrides the given settings with every value present in the file
    pub fn apply_to(&self, settings: &mut ResolverSettings) {
        if let Some(secs) = self.timeout_secs {
            settings.timeout = Duration::from_secs(secs);
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(ref url) = self.lcsc_detail_url {
            settings.lcsc_detail_url = url.clone();
        }
        if let Some(enable) = self.enable_taobao {
            settings.enable_taobao = enable;
        }
    }

    /// Parsed output format, if configured
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| OutputFormat::from_str(f).map_err(anyhow::Error::msg))
            .transpose()
    }

    /// Warnings about unknown fields, one per field, in key order
    pub fn warnings(&self) -> Vec<String> {
        self.unknown_fields
            .keys()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Use a value such as 10."
        );
    }

    if let Some(ref url) = config.lcsc_detail_url {
        if !url.contains(CODE_PLACEHOLDER) {
            bail!(
                "Invalid config: lcsc_detail_url must contain {}.\n\n\
                 💡 Hint: For example https://www.jlc-smt.com/lcsc/detail/{}.html",
                CODE_PLACEHOLDER,
                CODE_PLACEHOLDER
            );
        }
    }

    config
        .output_format()
        .context("Invalid config: format\n\n💡 Hint: Use 'json' or 'markdown'.")?;

    Ok(())
}
