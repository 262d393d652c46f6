//! Configuration — parsed from a TOML file + environment variable overrides.
//!
//! Priority: environment variables > config file > defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::MnemonicError;
use crate::registry::WordlistRegistry;
use crate::wordlist::Language;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordseedConfig {
    /// Mnemonic defaults
    #[serde(default)]
    pub mnemonic: MnemonicSection,

    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for WordseedConfig {
    fn default() -> Self {
        Self {
            mnemonic: MnemonicSection::default(),
            log_level: default_log_level(),
        }
    }
}

/// Mnemonic defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MnemonicSection {
    /// Default wordlist key ("english", "japanese", "EN", ...)
    #[serde(default = "default_language")]
    pub language: String,

    /// Entropy size in bits for generated mnemonics
    #[serde(default = "default_strength")]
    pub strength: usize,
}

impl Default for MnemonicSection {
    fn default() -> Self {
        Self {
            language: default_language(),
            strength: default_strength(),
        }
    }
}

fn default_language() -> String {
    Language::English.key().to_string()
}

fn default_strength() -> usize {
    crate::mnemonic::DEFAULT_STRENGTH
}

fn default_log_level() -> String {
    "info".to_string()
}

impl WordseedConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `WORDSEED_LANGUAGE`
    /// - `WORDSEED_STRENGTH`
    /// - `WORDSEED_LOG_LEVEL`
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("WORDSEED_LANGUAGE") {
            self.mnemonic.language = v;
        }
        if let Some(v) = var("WORDSEED_STRENGTH") {
            if let Ok(bits) = v.parse::<usize>() {
                self.mnemonic.strength = bits;
            }
        }
        if let Some(v) = var("WORDSEED_LOG_LEVEL") {
            self.log_level = v;
        }
    }

    /// The configured language.
    pub fn language(&self) -> Result<Language, ConfigError> {
        Language::from_key(&self.mnemonic.language).ok_or_else(|| {
            ConfigError::Invalid(format!("unknown language \"{}\"", self.mnemonic.language))
        })
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.language()?;

        let strength = self.mnemonic.strength;
        if strength % 32 != 0 || !(128..=256).contains(&strength) {
            return Err(ConfigError::Invalid(format!(
                "mnemonic.strength must be one of 128, 160, 192, 224, 256 (got {})",
                strength
            )));
        }
        Ok(())
    }

    /// Build a registry whose default is the configured language.
    pub fn build_registry(&self) -> Result<WordlistRegistry, ConfigError> {
        Ok(WordlistRegistry::with_language(self.language()?))
    }

    /// Point an existing registry at the configured language.
    pub fn apply_to(&self, registry: &WordlistRegistry) -> Result<(), ConfigError> {
        Ok(registry.set_default_wordlist(&self.mnemonic.language)?)
    }
}
