use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub theme: Theme,
}

/// Opt-in strict fallbacks for malformed markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Keep header-only tables as paragraphs instead of dropping them.
    pub strict_tables: bool,
    /// Keep unterminated fences as paragraphs instead of code to end of input.
    pub strict_fences: bool,
}

/// Color tokens keyed by category name (`keyword`, `functionCall`, `bold`, ...).
///
/// Only overrides are stored; everything else falls back to
/// [`Theme::default_color`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    colors: BTreeMap<String, String>,
}

impl Theme {
    pub fn color_for(&self, category: &str) -> &str {
        self.colors
            .get(category)
            .map_or_else(|| Self::default_color(category), String::as_str)
    }

    pub fn set(&mut self, category: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(category.into(), color.into());
    }

    pub fn default_color(category: &str) -> &'static str {
        match category {
            "keyword" => "magenta",
            "string" => "green",
            "number" => "yellow",
            "comment" => "darkgray",
            "functionCall" => "blue",
            "operator" => "cyan",
            "className" => "lightyellow",
            "tag" => "red",
            "heading" => "lightcyan",
            "inlineCode" => "yellow",
            "link" => "lightblue",
            "blockquote" => "gray",
            _ => "reset",
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chatmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}
