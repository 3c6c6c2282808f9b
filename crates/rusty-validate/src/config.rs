// File: src/config.rs
// Purpose: Validator configuration parsing from validate.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::string::StringOptions;

/// Validator configuration
///
/// ```toml
/// [password]
/// min_strength = 6
///
/// [strings.username]
/// min = 3
/// max = 20
/// noRepetition = true
///
/// [strings.pincode]
/// matchPostalCode = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub password: PasswordConfig,

    /// Named presets for the string validator
    #[serde(default)]
    pub strings: BTreeMap<String, StringOptions>,
}

/// Password configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Strength required by `Validator::password_default`
    #[serde(default = "default_min_strength")]
    pub min_strength: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_strength: default_min_strength(),
        }
    }
}

fn default_min_strength() -> u32 {
    5
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            presets = config.strings.len(),
            "loaded validator config"
        );
        Ok(config)
    }

    /// Load `validate.toml` from `dir`, or the default config if it is absent
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join("validate.toml");
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid validator config")
    }

    /// Look up a named string preset
    pub fn string_rule(&self, name: &str) -> Option<&StringOptions> {
        self.strings.get(name)
    }
}
