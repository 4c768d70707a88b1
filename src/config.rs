use crate::constants::{DEFAULT_CONFIG_PATHS, DEFAULT_TOP_N};
use crate::error::ResumeError;
use crate::tagger::SkillVocabulary;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub skills: SkillsConfig,
    #[serde(default)]
    pub nlp: NlpConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Replaces the built-in vocabulary when set
    #[serde(default)]
    pub vocabulary: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NlpConfig {
    /// One stop word per line; replaces the built-in English list
    #[serde(default)]
    pub stopwords_path: Option<String>,
    /// Added to the built-in abbreviation list used by the sentence tokenizer
    #[serde(default)]
    pub extra_abbreviations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl SkillsConfig {
    /// Build the shared skill vocabulary from configuration
    pub fn vocabulary(&self) -> std::result::Result<SkillVocabulary, ResumeError> {
        match &self.vocabulary {
            Some(skills) => SkillVocabulary::new(skills.iter().map(String::as_str)),
            None => Ok(SkillVocabulary::builtin()),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        for candidate in DEFAULT_CONFIG_PATHS {
            let path = expand_path(candidate);
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }
}

/// Expand a leading `~` in a configured path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
