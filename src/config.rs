//! YAML configuration file support for highxbot
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working bot that reads `knowledge.txt`.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "highxbot"
//!
//! knowledge:
//!   path: "knowledge.txt"
//!
//! matcher:
//!   fuzzy_cutoff: 0.72
//!   fuzzy_enabled: true
//!
//! console:
//!   typing: true
//!   typing_delay_ms: 400
//!   char_delay_ms: 15
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BOT_NAME: &str = "highxbot";
pub const DEFAULT_KNOWLEDGE_PATH: &str = "knowledge.txt";

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BotConfig {
    /// Configuration format version
    #[serde(default = "default_config_version")]
    pub version: String,

    /// Name shown in the banner, reply prefix and chat page
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub knowledge: KnowledgeYamlConfig,

    #[serde(default)]
    pub matcher: MatchConfig,

    #[serde(default)]
    pub console: ConsoleYamlConfig,
}

impl BotConfig {
    /// Load a YAML configuration file from the given path.
    ///
    /// A relative `knowledge.path` is resolved against the directory that
    /// holds the config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        if let Some(dir) = path.parent() {
            config.knowledge.resolve_against(dir);
        }
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: BotConfig = if yaml.trim().is_empty() {
            BotConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        if self.name.trim().is_empty() {
            return Err(ConfigLoadError::Validation("name must not be empty".into()));
        }

        self.knowledge.validate()?;
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;

        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            name: default_name(),
            knowledge: KnowledgeYamlConfig::default(),
            matcher: MatchConfig::default(),
            console: ConsoleYamlConfig::default(),
        }
    }
}

/// Knowledge source YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeYamlConfig {
    /// `question|answer` file; a missing file means an empty knowledge base
    #[serde(default = "default_knowledge_path")]
    pub path: PathBuf,
}

impl KnowledgeYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "knowledge.path must not be empty".into(),
            ));
        }
        Ok(())
    }

    fn resolve_against(&mut self, dir: &Path) {
        if self.path.is_relative() && !dir.as_os_str().is_empty() {
            self.path = dir.join(&self.path);
        }
    }
}

impl Default for KnowledgeYamlConfig {
    fn default() -> Self {
        Self {
            path: default_knowledge_path(),
        }
    }
}

/// Console presentation YAML configuration
///
/// Delays only affect how a reply is printed, never its text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleYamlConfig {
    #[serde(default = "true_value")]
    pub typing: bool,

    /// Pause before a reply starts printing
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Pause after each printed character
    #[serde(default = "default_char_delay_ms")]
    pub char_delay_ms: u64,
}

impl ConsoleYamlConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }
}

impl Default for ConsoleYamlConfig {
    fn default() -> Self {
        Self {
            typing: true_value(),
            typing_delay_ms: default_typing_delay_ms(),
            char_delay_ms: default_char_delay_ms(),
        }
    }
}

fn default_config_version() -> String {
    "1.0".to_string()
}
fn default_name() -> String {
    DEFAULT_BOT_NAME.to_string()
}
fn default_knowledge_path() -> PathBuf {
    PathBuf::from(DEFAULT_KNOWLEDGE_PATH)
}
fn true_value() -> bool {
    true
}
fn default_typing_delay_ms() -> u64 {
    400
}
fn default_char_delay_ms() -> u64 {
    15
}
